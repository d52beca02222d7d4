use super::domain::{Id, StayError};
use super::repository::RepositoryError;

/// Error raised by the hotel, company, policy and booking services.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Hotel {0} already exists")]
    HotelAlreadyExists(Id),
    #[error("Hotel {0} does not found")]
    UnknownHotel(Id),
    #[error("Employee {0} already exists")]
    EmployeeAlreadyExists(Id),
    #[error("Hotel is not found")]
    HotelNotFound,
    #[error("Hotel does not provide this type of room")]
    RoomTypeNotProvided,
    #[error("The policy does not allow booking")]
    PolicyViolation,
    #[error("There are not available rooms")]
    NoRoomsAvailable,
    #[error(transparent)]
    Stay(#[from] StayError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
