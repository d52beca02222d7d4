//! Corporate hotel booking: hotel inventory, company employees, booking
//! policies and the availability-checked booking workflow.

pub mod catalog;
mod company;
mod desk;
pub mod domain;
mod error;
mod hotels;
pub mod memory;
mod policy;
pub mod repository;
pub mod router;
mod service;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError, CatalogSummary};
pub use company::CompanyService;
pub use desk::{BookingDesk, InMemoryBookingDesk};
pub use domain::{
    AllowedRoomTypes, Booking, CompanyPolicy, Employee, EmployeePolicy, Hotel, Id, Room,
    RoomListError, RoomNumber, RoomType, StayError,
};
pub use error::BookingError;
pub use hotels::HotelService;
pub use memory::{
    InMemoryBookingRepository, InMemoryCompanyRepository, InMemoryHotelRepository,
    InMemoryPolicyRepository,
};
pub use policy::{ApplicablePolicy, BookingPolicyService};
pub use repository::{
    BookingRepository, CompanyRepository, HotelRepository, PolicyRepository, RepositoryError,
};
pub use router::{booking_router, BookingRequest};
pub use service::BookingService;
