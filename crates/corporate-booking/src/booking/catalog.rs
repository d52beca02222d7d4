use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::desk::BookingDesk;
use super::domain::{Id, RoomNumber, RoomType};
use super::error::BookingError;
use super::repository::{BookingRepository, CompanyRepository, HotelRepository, PolicyRepository};

/// Start-up inventory: hotels with rooms, employees and booking policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub hotels: Vec<HotelEntry>,
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
    #[serde(default)]
    pub company_policies: Vec<PolicyEntry>,
    #[serde(default)]
    pub employee_policies: Vec<PolicyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelEntry {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub number: RoomNumber,
    pub room_type: RoomType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeEntry {
    pub company_id: Id,
    pub employee_id: Id,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub subject_id: Id,
    pub allowed_room_types: Vec<RoomType>,
}

/// Counts of what a catalog registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub hotels: usize,
    pub rooms: usize,
    pub employees: usize,
    pub policies: usize,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Booking(BookingError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "invalid catalog JSON: {}", err),
            CatalogError::Booking(err) => write!(f, "could not apply catalog: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Parse(err) => Some(err),
            CatalogError::Booking(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<BookingError> for CatalogError {
    fn from(err: BookingError) -> Self {
        Self::Booking(err)
    }
}

impl Catalog {
    pub fn from_path<T: AsRef<Path>>(path: T) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Register every entry through the desk services, stopping at the first
    /// rejected entry.
    pub fn apply<H, C, P, B>(
        &self,
        desk: &BookingDesk<H, C, P, B>,
    ) -> Result<CatalogSummary, CatalogError>
    where
        H: HotelRepository,
        C: CompanyRepository,
        P: PolicyRepository,
        B: BookingRepository,
    {
        let mut summary = CatalogSummary::default();

        for hotel in &self.hotels {
            desk.hotels().add_hotel(hotel.id.clone(), hotel.name.clone())?;
            summary.hotels += 1;
            for room in &hotel.rooms {
                desk.hotels()
                    .set_room(&hotel.id, room.number, room.room_type)?;
                summary.rooms += 1;
            }
        }

        for employee in &self.employees {
            desk.companies()
                .add_employee(employee.company_id.clone(), employee.employee_id.clone())?;
            summary.employees += 1;
        }

        for policy in &self.company_policies {
            desk.policies().set_company_policy(
                policy.subject_id.clone(),
                policy.allowed_room_types.iter().copied(),
            )?;
            summary.policies += 1;
        }

        for policy in &self.employee_policies {
            desk.policies().set_employee_policy(
                policy.subject_id.clone(),
                policy.allowed_room_types.iter().copied(),
            )?;
            summary.policies += 1;
        }

        info!(
            hotels = summary.hotels,
            rooms = summary.rooms,
            employees = summary.employees,
            policies = summary.policies,
            "catalog applied"
        );
        Ok(summary)
    }
}
