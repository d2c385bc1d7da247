use std::sync::Arc;

use list_cache::ListQueryHandler;
use tracing::{info, instrument};

use crate::{
    commands::{
        CreateEmployeeCommand, DeleteEmployeeCommand, UpdateEmployeeCommand,
    },
    dao::EmployeeStore,
    error::HrError,
    models::{Employee, MutationResponse},
};

#[derive(Clone)]
pub struct CreateEmployeeHandler {
    store: Arc<dyn EmployeeStore>,
    employees: ListQueryHandler<Employee>,
}

impl CreateEmployeeHandler {
    pub fn new(
        store: Arc<dyn EmployeeStore>, employees: ListQueryHandler<Employee>,
    ) -> Self {
        Self { store, employees }
    }

    #[instrument(skip_all, fields(id = ?command.id))]
    pub async fn execute(
        &self, command: CreateEmployeeCommand,
    ) -> Result<MutationResponse, HrError> {
        command.validate()?;
        let saved = self.store.create(command).await?;
        let purged = self.employees.invalidate().await;

        info!(id = saved.id, purged, "employee created");
        Ok(MutationResponse::with_employee(
            "Employee created successfully",
            saved.into(),
        ))
    }
}

#[derive(Clone)]
pub struct UpdateEmployeeHandler {
    store: Arc<dyn EmployeeStore>,
    employees: ListQueryHandler<Employee>,
}

impl UpdateEmployeeHandler {
    pub fn new(
        store: Arc<dyn EmployeeStore>, employees: ListQueryHandler<Employee>,
    ) -> Self {
        Self { store, employees }
    }

    #[instrument(skip_all, fields(id = command.id))]
    pub async fn execute(
        &self, command: UpdateEmployeeCommand,
    ) -> Result<MutationResponse, HrError> {
        command.validate()?;
        let updated = self.store.update(command.id, command).await?;
        let purged = self.employees.invalidate().await;

        info!(id = updated.id, purged, "employee updated");
        Ok(MutationResponse::with_employee(
            "Employee updated successfully",
            updated.into(),
        ))
    }
}

#[derive(Clone)]
pub struct DeleteEmployeeHandler {
    store: Arc<dyn EmployeeStore>,
    employees: ListQueryHandler<Employee>,
}

impl DeleteEmployeeHandler {
    pub fn new(
        store: Arc<dyn EmployeeStore>, employees: ListQueryHandler<Employee>,
    ) -> Self {
        Self { store, employees }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteEmployeeCommand,
    ) -> Result<MutationResponse, HrError> {
        self.store.delete(command.id).await?;
        let purged = self.employees.invalidate().await;

        info!(id = command.id, purged, "employee deleted");
        Ok(MutationResponse::message("Employee deleted successfully"))
    }
}
