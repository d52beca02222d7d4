use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Hotel, Id, RoomNumber, RoomType};
use super::error::BookingError;
use super::repository::{HotelRepository, RepositoryError};

/// Registers hotels and maintains their room inventory.
pub struct HotelService<H> {
    hotels: Arc<H>,
}

impl<H> Clone for HotelService<H> {
    fn clone(&self) -> Self {
        Self {
            hotels: Arc::clone(&self.hotels),
        }
    }
}

impl<H> HotelService<H>
where
    H: HotelRepository,
{
    pub fn new(hotels: Arc<H>) -> Self {
        Self { hotels }
    }

    pub fn add_hotel(
        &self,
        hotel_id: Id,
        name: impl Into<String>,
    ) -> Result<Hotel, BookingError> {
        match self.hotels.create_hotel(hotel_id.clone(), name.into()) {
            Ok(hotel) => {
                info!(hotel_id = %hotel.id, name = %hotel.name, "hotel registered");
                Ok(hotel)
            }
            Err(RepositoryError::Conflict) => {
                warn!(%hotel_id, "hotel already registered");
                Err(BookingError::HotelAlreadyExists(hotel_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn find_hotel_by(&self, hotel_id: &Id) -> Result<Option<Hotel>, BookingError> {
        Ok(self.hotels.find_hotel_by_id(hotel_id)?)
    }

    /// Insert or replace the room numbered `room_number` on an existing hotel.
    pub fn set_room(
        &self,
        hotel_id: &Id,
        room_number: RoomNumber,
        room_type: RoomType,
    ) -> Result<(), BookingError> {
        if !self.hotel_exists(hotel_id)? {
            warn!(%hotel_id, room_number, "room update for unknown hotel");
            return Err(BookingError::UnknownHotel(hotel_id.clone()));
        }

        self.hotels
            .add_or_update_room(hotel_id, room_number, room_type)?;
        info!(%hotel_id, room_number, %room_type, "room set");
        Ok(())
    }

    fn hotel_exists(&self, hotel_id: &Id) -> Result<bool, BookingError> {
        Ok(self.hotels.find_hotel_by_id(hotel_id)?.is_some())
    }
}
