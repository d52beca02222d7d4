use chrono::NaiveDate;

use super::domain::{
    Booking, CompanyPolicy, Employee, EmployeePolicy, Hotel, Id, RoomNumber, RoomType,
};

/// Storage for hotels and their rooms.
pub trait HotelRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the id is already taken.
    fn create_hotel(&self, hotel_id: Id, name: String) -> Result<Hotel, RepositoryError>;
    fn find_hotel_by_id(&self, hotel_id: &Id) -> Result<Option<Hotel>, RepositoryError>;
    fn add_or_update_room(
        &self,
        hotel_id: &Id,
        room_number: RoomNumber,
        room_type: RoomType,
    ) -> Result<(), RepositoryError>;
}

/// Storage for the employees registered by each company.
pub trait CompanyRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the id is already taken.
    fn create_employee(&self, company_id: Id, employee_id: Id)
        -> Result<Employee, RepositoryError>;
    fn find_employee_by_id(&self, employee_id: &Id) -> Result<Option<Employee>, RepositoryError>;
    fn delete_employee(&self, employee_id: &Id) -> Result<(), RepositoryError>;
}

/// Storage for employee and company booking policies, one per subject.
pub trait PolicyRepository: Send + Sync {
    fn find_employee_policy(
        &self,
        employee_id: &Id,
    ) -> Result<Option<EmployeePolicy>, RepositoryError>;
    fn find_company_policy(&self, company_id: &Id)
        -> Result<Option<CompanyPolicy>, RepositoryError>;
    fn upsert_employee_policy(&self, policy: EmployeePolicy) -> Result<(), RepositoryError>;
    fn upsert_company_policy(&self, policy: CompanyPolicy) -> Result<(), RepositoryError>;
    fn delete_employee_policy(&self, employee_id: &Id) -> Result<(), RepositoryError>;
    fn delete_company_policy(&self, company_id: &Id) -> Result<(), RepositoryError>;
}

/// Append-only storage for confirmed bookings.
pub trait BookingRepository: Send + Sync {
    fn create_booking(&self, booking: Booking) -> Result<(), RepositoryError>;

    /// Bookings at `hotel_id` for `room_type` whose check-in or check-out lies
    /// inside the inclusive `[check_in, check_out]` window.
    fn overlapping_bookings(
        &self,
        hotel_id: &Id,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<Booking>, RepositoryError>;

    fn bookings_for_employee(&self, employee_id: &Id) -> Result<Vec<Booking>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
