use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{CompanyPolicy, EmployeePolicy, Id, RoomType};
use super::error::BookingError;
use super::repository::{CompanyRepository, PolicyRepository};

const ALLOWED_BY_DEFAULT: bool = true;

/// Policy that governs a given employee's bookings.
///
/// A personal policy always wins over the company policy, even when it is the
/// stricter of the two. Without either, every room type is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicablePolicy {
    Employee(EmployeePolicy),
    Company(CompanyPolicy),
    Unrestricted,
}

impl ApplicablePolicy {
    pub fn allows(&self, room_type: RoomType) -> bool {
        match self {
            ApplicablePolicy::Employee(policy) => policy.allows(room_type),
            ApplicablePolicy::Company(policy) => policy.allows(room_type),
            ApplicablePolicy::Unrestricted => ALLOWED_BY_DEFAULT,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ApplicablePolicy::Employee(_) => "employee",
            ApplicablePolicy::Company(_) => "company",
            ApplicablePolicy::Unrestricted => "unrestricted",
        }
    }
}

pub struct BookingPolicyService<P, C> {
    policies: Arc<P>,
    companies: Arc<C>,
}

impl<P, C> Clone for BookingPolicyService<P, C> {
    fn clone(&self) -> Self {
        Self {
            policies: Arc::clone(&self.policies),
            companies: Arc::clone(&self.companies),
        }
    }
}

impl<P, C> BookingPolicyService<P, C>
where
    P: PolicyRepository,
    C: CompanyRepository,
{
    pub fn new(policies: Arc<P>, companies: Arc<C>) -> Self {
        Self {
            policies,
            companies,
        }
    }

    pub fn set_company_policy(
        &self,
        company_id: Id,
        room_types: impl IntoIterator<Item = RoomType>,
    ) -> Result<(), BookingError> {
        let policy = CompanyPolicy::new(company_id, room_types);
        info!(company_id = %policy.company_id, allowed = ?policy.allowed_room_types, "company policy set");
        self.policies.upsert_company_policy(policy)?;
        Ok(())
    }

    pub fn set_employee_policy(
        &self,
        employee_id: Id,
        room_types: impl IntoIterator<Item = RoomType>,
    ) -> Result<(), BookingError> {
        let policy = EmployeePolicy::new(employee_id, room_types);
        info!(employee_id = %policy.employee_id, allowed = ?policy.allowed_room_types, "employee policy set");
        self.policies.upsert_employee_policy(policy)?;
        Ok(())
    }

    pub fn remove_company_policy(&self, company_id: &Id) -> Result<(), BookingError> {
        self.policies.delete_company_policy(company_id)?;
        info!(%company_id, "company policy removed");
        Ok(())
    }

    pub fn employee_policy(&self, employee_id: &Id) -> Result<Option<EmployeePolicy>, BookingError> {
        Ok(self.policies.find_employee_policy(employee_id)?)
    }

    pub fn company_policy(&self, company_id: &Id) -> Result<Option<CompanyPolicy>, BookingError> {
        Ok(self.policies.find_company_policy(company_id)?)
    }

    pub fn applicable_policy(&self, employee_id: &Id) -> Result<ApplicablePolicy, BookingError> {
        if let Some(policy) = self.policies.find_employee_policy(employee_id)? {
            return Ok(ApplicablePolicy::Employee(policy));
        }

        let company_policy = match self.companies.find_employee_by_id(employee_id)? {
            Some(employee) => self.policies.find_company_policy(&employee.company_id)?,
            None => None,
        };

        Ok(company_policy.map_or(ApplicablePolicy::Unrestricted, ApplicablePolicy::Company))
    }

    pub fn is_booking_allowed(
        &self,
        employee_id: &Id,
        room_type: RoomType,
    ) -> Result<bool, BookingError> {
        let policy = self.applicable_policy(employee_id)?;
        let allowed = policy.allows(room_type);
        debug!(%employee_id, %room_type, source = policy.label(), allowed, "policy resolved");
        Ok(allowed)
    }
}
