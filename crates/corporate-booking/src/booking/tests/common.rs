use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::booking::domain::{
    Booking, CompanyPolicy, Employee, EmployeePolicy, Hotel, Id, RoomNumber, RoomType,
};
use crate::booking::memory::{
    InMemoryBookingRepository, InMemoryCompanyRepository, InMemoryHotelRepository,
    InMemoryPolicyRepository,
};
use crate::booking::repository::{
    BookingRepository, CompanyRepository, HotelRepository, PolicyRepository, RepositoryError,
};
use crate::booking::{BookingDesk, InMemoryBookingDesk};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn hotel_id() -> Id {
    Id::new("hotel-harbour")
}

pub(super) fn employee_id() -> Id {
    Id::new("employee-alice")
}

pub(super) fn company_id() -> Id {
    Id::new("company-acme")
}

/// Handles onto the repositories behind a desk so tests can inspect state.
pub(super) struct Fixture {
    pub(super) desk: InMemoryBookingDesk,
    pub(super) hotels: Arc<InMemoryHotelRepository>,
    pub(super) companies: Arc<InMemoryCompanyRepository>,
    pub(super) policies: Arc<InMemoryPolicyRepository>,
    pub(super) bookings: Arc<InMemoryBookingRepository>,
}

pub(super) fn fixture() -> Fixture {
    let hotels = Arc::new(InMemoryHotelRepository::default());
    let companies = Arc::new(InMemoryCompanyRepository::default());
    let policies = Arc::new(InMemoryPolicyRepository::default());
    let bookings = Arc::new(InMemoryBookingRepository::default());
    let desk = BookingDesk::new(
        hotels.clone(),
        companies.clone(),
        policies.clone(),
        bookings.clone(),
    );

    Fixture {
        desk,
        hotels,
        companies,
        policies,
        bookings,
    }
}

/// Fixture with one hotel carrying the given rooms and one registered employee.
pub(super) fn seeded_fixture(rooms: &[(RoomNumber, RoomType)]) -> Fixture {
    let fixture = fixture();
    fixture
        .desk
        .hotels()
        .add_hotel(hotel_id(), "Harbour View")
        .expect("hotel registers");
    for (number, room_type) in rooms {
        fixture
            .desk
            .hotels()
            .set_room(&hotel_id(), *number, *room_type)
            .expect("room registers");
    }
    fixture
        .desk
        .companies()
        .add_employee(company_id(), employee_id())
        .expect("employee registers");
    fixture
}

pub(super) fn stored_bookings(fixture: &Fixture) -> Vec<Booking> {
    fixture
        .bookings
        .bookings_for_employee(&employee_id())
        .expect("bookings readable")
}

/// Repository double whose backing store is always offline.
pub(super) struct UnavailableRepository;

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

impl HotelRepository for UnavailableRepository {
    fn create_hotel(&self, _hotel_id: Id, _name: String) -> Result<Hotel, RepositoryError> {
        Err(offline())
    }

    fn find_hotel_by_id(&self, _hotel_id: &Id) -> Result<Option<Hotel>, RepositoryError> {
        Err(offline())
    }

    fn add_or_update_room(
        &self,
        _hotel_id: &Id,
        _room_number: RoomNumber,
        _room_type: RoomType,
    ) -> Result<(), RepositoryError> {
        Err(offline())
    }
}

impl CompanyRepository for UnavailableRepository {
    fn create_employee(
        &self,
        _company_id: Id,
        _employee_id: Id,
    ) -> Result<Employee, RepositoryError> {
        Err(offline())
    }

    fn find_employee_by_id(&self, _employee_id: &Id) -> Result<Option<Employee>, RepositoryError> {
        Err(offline())
    }

    fn delete_employee(&self, _employee_id: &Id) -> Result<(), RepositoryError> {
        Err(offline())
    }
}

impl PolicyRepository for UnavailableRepository {
    fn find_employee_policy(
        &self,
        _employee_id: &Id,
    ) -> Result<Option<EmployeePolicy>, RepositoryError> {
        Err(offline())
    }

    fn find_company_policy(
        &self,
        _company_id: &Id,
    ) -> Result<Option<CompanyPolicy>, RepositoryError> {
        Err(offline())
    }

    fn upsert_employee_policy(&self, _policy: EmployeePolicy) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn upsert_company_policy(&self, _policy: CompanyPolicy) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn delete_employee_policy(&self, _employee_id: &Id) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn delete_company_policy(&self, _company_id: &Id) -> Result<(), RepositoryError> {
        Err(offline())
    }
}

impl BookingRepository for UnavailableRepository {
    fn create_booking(&self, _booking: Booking) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn overlapping_bookings(
        &self,
        _hotel_id: &Id,
        _room_type: RoomType,
        _check_in: NaiveDate,
        _check_out: NaiveDate,
    ) -> Result<Vec<Booking>, RepositoryError> {
        Err(offline())
    }

    fn bookings_for_employee(&self, _employee_id: &Id) -> Result<Vec<Booking>, RepositoryError> {
        Err(offline())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
