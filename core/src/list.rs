//! Employee list state
//!
//! The list owns the canonical in-memory collection. Each flow is split into
//! a `begin`/`finish` pair so the GUI can run the request on a background
//! executor; the synchronous drivers ([`EmployeeList::load`],
//! [`EmployeeList::add`], [`EmployeeList::delete`]) chain the two halves
//! against any [`EmployeeApi`].

use std::time::Duration;

use crate::error::ServiceError;
use crate::models::{Employee, NewEmployee};
use crate::service::EmployeeApi;

pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load employees. Please ensure the backend server is running.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add employee";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee";

/// How long a success banner stays visible
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(4);

/// Identifies one success banner. Only the ticket of the banner currently
/// shown can dismiss it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Debug, Default)]
pub struct EmployeeList {
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    show_form: bool,
    success_message: Option<String>,
    banner_generation: u64,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_form(&self) -> bool {
        self.show_form
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Employee>, ServiceError>) {
        match result {
            Ok(employees) => {
                let total = employees.len();
                self.employees = employees.into_iter().filter(|e| e.id.is_some()).collect();
                if self.employees.len() != total {
                    tracing::warn!(
                        dropped = total - self.employees.len(),
                        "ignoring employees without an id"
                    );
                }
                tracing::info!(count = self.employees.len(), "employees loaded");
            }
            Err(err) => {
                tracing::error!("Error loading employees: {}", err);
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
        self.success_message = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Apply the result of a create call.
    ///
    /// Returns the ticket of the success banner to dismiss later.
    pub fn finish_add(&mut self, result: Result<Employee, ServiceError>) -> Option<BannerTicket> {
        match result {
            Ok(employee) if employee.id.is_some() => {
                let message = format!("{} has been added successfully!", employee.name);
                self.employees.push(employee);
                self.show_form = false;
                Some(self.show_banner(message))
            }
            Ok(employee) => {
                tracing::error!(name = %employee.name, "created employee came back without an id");
                self.error = Some(ADD_FAILED_MESSAGE.to_string());
                None
            }
            Err(err) => {
                self.error = Some(message_or(err, ADD_FAILED_MESSAGE));
                None
            }
        }
    }

    /// Confirmation question for deleting `employee`, or `None` when it has
    /// never been persisted.
    pub fn delete_prompt(&self, employee: &Employee) -> Option<String> {
        employee
            .id
            .map(|_| format!("Are you sure you want to delete {}?", employee.name))
    }

    /// Apply the result of a confirmed delete call.
    pub fn finish_delete(
        &mut self,
        employee: &Employee,
        result: Result<(), ServiceError>,
    ) -> Option<BannerTicket> {
        let id = employee.id?;
        match result {
            Ok(()) => {
                self.employees.retain(|e| e.id != Some(id));
                Some(self.show_banner(format!("{} has been removed successfully!", employee.name)))
            }
            Err(err) => {
                self.error = Some(message_or(err, DELETE_FAILED_MESSAGE));
                None
            }
        }
    }

    /// Clear the banner if `ticket` still identifies it. A newer banner
    /// invalidates older tickets.
    pub fn dismiss_banner(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 != self.banner_generation || self.success_message.is_none() {
            return false;
        }
        self.success_message = None;
        true
    }

    fn show_banner(&mut self, message: String) -> BannerTicket {
        self.banner_generation += 1;
        self.success_message = Some(message);
        BannerTicket(self.banner_generation)
    }

    /// Fetch the full list synchronously.
    pub fn load(&mut self, api: &impl EmployeeApi) {
        self.begin_load();
        self.finish_load(api.list());
    }

    pub fn add(&mut self, api: &impl EmployeeApi, candidate: &NewEmployee) -> Option<BannerTicket> {
        self.finish_add(api.create(candidate))
    }

    /// Delete after asking `confirm`. Nothing is sent unless it answers yes.
    pub fn delete(
        &mut self,
        api: &impl EmployeeApi,
        employee: &Employee,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<BannerTicket> {
        let prompt = self.delete_prompt(employee)?;
        let id = employee.id?;
        if !confirm(&prompt) {
            return None;
        }
        self.finish_delete(employee, api.delete(id))
    }
}

fn message_or(err: ServiceError, fallback: &str) -> String {
    if err.message().is_empty() {
        fallback.to_string()
    } else {
        err.message().to_string()
    }
}
