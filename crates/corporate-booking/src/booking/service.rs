use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{Booking, Hotel, Id, RoomType};
use super::error::BookingError;
use super::hotels::HotelService;
use super::policy::BookingPolicyService;
use super::repository::{BookingRepository, CompanyRepository, HotelRepository, PolicyRepository};

/// Service composing the facility, policy and availability checks in front of
/// the booking repository.
pub struct BookingService<B, H, P, C> {
    bookings: Arc<B>,
    hotels: HotelService<H>,
    policies: BookingPolicyService<P, C>,
}

impl<B, H, P, C> BookingService<B, H, P, C>
where
    B: BookingRepository,
    H: HotelRepository,
    P: PolicyRepository,
    C: CompanyRepository,
{
    pub fn new(
        bookings: Arc<B>,
        hotels: HotelService<H>,
        policies: BookingPolicyService<P, C>,
    ) -> Self {
        Self {
            bookings,
            hotels,
            policies,
        }
    }

    /// Book one room of `room_type`. Nothing is stored unless every check passes.
    pub fn book(
        &self,
        employee_id: Id,
        hotel_id: Id,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, BookingError> {
        let hotel = self.check_facilities(&hotel_id, room_type)?;
        self.check_policy(&employee_id, room_type)?;
        self.check_availability(&hotel, room_type, check_in, check_out)?;

        let booking = Booking::create(
            Id::generate(),
            employee_id,
            hotel_id,
            room_type,
            check_in,
            check_out,
        )
        .inspect_err(|err| warn!(%check_in, %check_out, "booking rejected: {err}"))?;

        self.bookings.create_booking(booking.clone())?;
        info!(
            booking_id = %booking.id,
            employee_id = %booking.employee_id,
            hotel_id = %booking.hotel_id,
            %room_type,
            nights = booking.nights(),
            "booking confirmed"
        );
        Ok(booking)
    }

    pub fn bookings_for(&self, employee_id: &Id) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.bookings_for_employee(employee_id)?)
    }

    fn check_facilities(&self, hotel_id: &Id, room_type: RoomType) -> Result<Hotel, BookingError> {
        let hotel = self.hotels.find_hotel_by(hotel_id)?.ok_or_else(|| {
            warn!(%hotel_id, "booking rejected: hotel not found");
            BookingError::HotelNotFound
        })?;

        if !hotel.has_room_type(room_type) {
            warn!(%hotel_id, %room_type, "booking rejected: room type not offered");
            return Err(BookingError::RoomTypeNotProvided);
        }

        Ok(hotel)
    }

    fn check_policy(&self, employee_id: &Id, room_type: RoomType) -> Result<(), BookingError> {
        if !self.policies.is_booking_allowed(employee_id, room_type)? {
            warn!(%employee_id, %room_type, "booking rejected: policy");
            return Err(BookingError::PolicyViolation);
        }
        Ok(())
    }

    fn check_availability(
        &self,
        hotel: &Hotel,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<(), BookingError> {
        let taken = self
            .bookings
            .overlapping_bookings(&hotel.id, room_type, check_in, check_out)?
            .len();
        let capacity = hotel.room_count(room_type);

        if taken >= capacity {
            warn!(hotel_id = %hotel.id, %room_type, taken, capacity, "booking rejected: no rooms left");
            return Err(BookingError::NoRoomsAvailable);
        }
        Ok(())
    }
}
