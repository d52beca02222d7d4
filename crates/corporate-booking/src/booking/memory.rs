use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use super::domain::{
    Booking, CompanyPolicy, Employee, EmployeePolicy, Hotel, Id, Room, RoomNumber, RoomType,
};
use super::repository::{
    BookingRepository, CompanyRepository, HotelRepository, PolicyRepository, RepositoryError,
};

fn lock<'a, T>(store: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, RepositoryError> {
    store
        .lock()
        .map_err(|_| RepositoryError::Unavailable(format!("{name} store poisoned")))
}

#[derive(Debug, Default)]
pub struct InMemoryHotelRepository {
    hotels: Mutex<HashMap<Id, Hotel>>,
}

impl InMemoryHotelRepository {
    pub fn with_hotels(hotels: impl IntoIterator<Item = Hotel>) -> Self {
        let hotels = hotels
            .into_iter()
            .map(|hotel| (hotel.id.clone(), hotel))
            .collect();
        Self {
            hotels: Mutex::new(hotels),
        }
    }
}

impl HotelRepository for InMemoryHotelRepository {
    fn create_hotel(&self, hotel_id: Id, name: String) -> Result<Hotel, RepositoryError> {
        match lock(&self.hotels, "hotel")?.entry(hotel_id) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict),
            Entry::Vacant(slot) => {
                let hotel = Hotel::new(slot.key().clone(), name);
                Ok(slot.insert(hotel).clone())
            }
        }
    }

    fn find_hotel_by_id(&self, hotel_id: &Id) -> Result<Option<Hotel>, RepositoryError> {
        Ok(lock(&self.hotels, "hotel")?.get(hotel_id).cloned())
    }

    fn add_or_update_room(
        &self,
        hotel_id: &Id,
        room_number: RoomNumber,
        room_type: RoomType,
    ) -> Result<(), RepositoryError> {
        let mut hotels = lock(&self.hotels, "hotel")?;
        let hotel = hotels.get_mut(hotel_id).ok_or(RepositoryError::NotFound)?;
        hotel.add_or_update_room(Room::new(room_number, room_type, hotel_id.clone()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    employees: Mutex<HashMap<Id, Employee>>,
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn create_employee(
        &self,
        company_id: Id,
        employee_id: Id,
    ) -> Result<Employee, RepositoryError> {
        match lock(&self.employees, "employee")?.entry(employee_id) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict),
            Entry::Vacant(slot) => {
                let employee = Employee::new(company_id, slot.key().clone());
                Ok(slot.insert(employee).clone())
            }
        }
    }

    fn find_employee_by_id(&self, employee_id: &Id) -> Result<Option<Employee>, RepositoryError> {
        Ok(lock(&self.employees, "employee")?.get(employee_id).cloned())
    }

    fn delete_employee(&self, employee_id: &Id) -> Result<(), RepositoryError> {
        lock(&self.employees, "employee")?.remove(employee_id);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPolicyRepository {
    employee_policies: Mutex<HashMap<Id, EmployeePolicy>>,
    company_policies: Mutex<HashMap<Id, CompanyPolicy>>,
}

impl PolicyRepository for InMemoryPolicyRepository {
    fn find_employee_policy(
        &self,
        employee_id: &Id,
    ) -> Result<Option<EmployeePolicy>, RepositoryError> {
        Ok(lock(&self.employee_policies, "employee policy")?
            .get(employee_id)
            .cloned())
    }

    fn find_company_policy(
        &self,
        company_id: &Id,
    ) -> Result<Option<CompanyPolicy>, RepositoryError> {
        Ok(lock(&self.company_policies, "company policy")?
            .get(company_id)
            .cloned())
    }

    fn upsert_employee_policy(&self, policy: EmployeePolicy) -> Result<(), RepositoryError> {
        lock(&self.employee_policies, "employee policy")?
            .insert(policy.employee_id.clone(), policy);
        Ok(())
    }

    fn upsert_company_policy(&self, policy: CompanyPolicy) -> Result<(), RepositoryError> {
        lock(&self.company_policies, "company policy")?.insert(policy.company_id.clone(), policy);
        Ok(())
    }

    fn delete_employee_policy(&self, employee_id: &Id) -> Result<(), RepositoryError> {
        lock(&self.employee_policies, "employee policy")?.remove(employee_id);
        Ok(())
    }

    fn delete_company_policy(&self, company_id: &Id) -> Result<(), RepositoryError> {
        lock(&self.company_policies, "company policy")?.remove(company_id);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
        }
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn create_booking(&self, booking: Booking) -> Result<(), RepositoryError> {
        lock(&self.bookings, "booking")?.push(booking);
        Ok(())
    }

    fn overlapping_bookings(
        &self,
        hotel_id: &Id,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = lock(&self.bookings, "booking")?;
        Ok(bookings
            .iter()
            .filter(|booking| &booking.hotel_id == hotel_id)
            .filter(|booking| booking.room_type == room_type)
            .filter(|booking| booking.overlaps(check_in, check_out))
            .cloned()
            .collect())
    }

    fn bookings_for_employee(&self, employee_id: &Id) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = lock(&self.bookings, "booking")?;
        Ok(bookings
            .iter()
            .filter(|booking| &booking.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
