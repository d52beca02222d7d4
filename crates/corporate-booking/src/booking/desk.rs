use std::sync::Arc;

use super::company::CompanyService;
use super::hotels::HotelService;
use super::memory::{
    InMemoryBookingRepository, InMemoryCompanyRepository, InMemoryHotelRepository,
    InMemoryPolicyRepository,
};
use super::policy::BookingPolicyService;
use super::repository::{BookingRepository, CompanyRepository, HotelRepository, PolicyRepository};
use super::service::BookingService;

/// The four booking services wired over one shared set of repositories.
pub struct BookingDesk<H, C, P, B> {
    hotels: HotelService<H>,
    companies: CompanyService<C, P>,
    policies: BookingPolicyService<P, C>,
    bookings: BookingService<B, H, P, C>,
}

pub type InMemoryBookingDesk = BookingDesk<
    InMemoryHotelRepository,
    InMemoryCompanyRepository,
    InMemoryPolicyRepository,
    InMemoryBookingRepository,
>;

impl<H, C, P, B> BookingDesk<H, C, P, B>
where
    H: HotelRepository,
    C: CompanyRepository,
    P: PolicyRepository,
    B: BookingRepository,
{
    pub fn new(hotels: Arc<H>, companies: Arc<C>, policies: Arc<P>, bookings: Arc<B>) -> Self {
        let hotel_service = HotelService::new(hotels);
        let policy_service = BookingPolicyService::new(policies.clone(), companies.clone());
        let company_service = CompanyService::new(companies, policies);
        let booking_service =
            BookingService::new(bookings, hotel_service.clone(), policy_service.clone());

        Self {
            hotels: hotel_service,
            companies: company_service,
            policies: policy_service,
            bookings: booking_service,
        }
    }

    pub fn hotels(&self) -> &HotelService<H> {
        &self.hotels
    }

    pub fn companies(&self) -> &CompanyService<C, P> {
        &self.companies
    }

    pub fn policies(&self) -> &BookingPolicyService<P, C> {
        &self.policies
    }

    pub fn bookings(&self) -> &BookingService<B, H, P, C> {
        &self.bookings
    }
}

impl InMemoryBookingDesk {
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryHotelRepository::default()),
            Arc::new(InMemoryCompanyRepository::default()),
            Arc::new(InMemoryPolicyRepository::default()),
            Arc::new(InMemoryBookingRepository::default()),
        )
    }
}

impl Default for InMemoryBookingDesk {
    fn default() -> Self {
        Self::in_memory()
    }
}
