use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Employee, Id};
use super::error::BookingError;
use super::repository::{CompanyRepository, PolicyRepository, RepositoryError};

/// Maintains company employees; removing one also drops their personal policy.
pub struct CompanyService<C, P> {
    companies: Arc<C>,
    policies: Arc<P>,
}

impl<C, P> CompanyService<C, P>
where
    C: CompanyRepository,
    P: PolicyRepository,
{
    pub fn new(companies: Arc<C>, policies: Arc<P>) -> Self {
        Self {
            companies,
            policies,
        }
    }

    pub fn add_employee(&self, company_id: Id, employee_id: Id) -> Result<Employee, BookingError> {
        match self
            .companies
            .create_employee(company_id, employee_id.clone())
        {
            Ok(employee) => {
                info!(employee_id = %employee.id, company_id = %employee.company_id, "employee registered");
                Ok(employee)
            }
            Err(RepositoryError::Conflict) => {
                warn!(%employee_id, "employee already registered");
                Err(BookingError::EmployeeAlreadyExists(employee_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn find_employee_by(&self, employee_id: &Id) -> Result<Option<Employee>, BookingError> {
        Ok(self.companies.find_employee_by_id(employee_id)?)
    }

    /// Removes the personal policy, then the employee. Not atomic.
    pub fn delete_employee(&self, employee_id: &Id) -> Result<(), BookingError> {
        self.policies.delete_employee_policy(employee_id)?;
        self.companies.delete_employee(employee_id)?;
        info!(%employee_id, "employee and personal policy removed");
        Ok(())
    }
}
