/// Directory application state
///
/// Ties the views together the way the screen behaves:
/// - A successful create, update or delete raises a success notice and
///   re-fetches the list with the current search text
/// - A failed submission raises an error notice and leaves the form open
///   with its values
/// - Opening the form for editing starts from the employee's current values

use crate::error::GatewayResult;
use crate::gateway::EmployeeApi;
use crate::views::{DeleteFlow, EmployeeForm, FormMode, ListView, Notices, SubmitError};
use directory_shared::models::employee::Employee;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const ADDED: &str = "Employee added successfully!";
pub const UPDATED: &str = "Employee updated successfully!";
pub const DELETED: &str = "Employee deleted successfully!";

pub struct DirectoryApp {
    api: Arc<dyn EmployeeApi>,
    pub list: ListView,
    pub notices: Arc<Notices>,
    form: Option<EmployeeForm>,
    delete: DeleteFlow,
}

impl DirectoryApp {
    pub fn new(api: Arc<dyn EmployeeApi>, search_debounce: Duration) -> Self {
        let notices = Arc::new(Notices::new());
        let list = ListView::new(Arc::clone(&api), Arc::clone(&notices), search_debounce);

        Self {
            api,
            list,
            notices,
            form: None,
            delete: DeleteFlow::new(),
        }
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EmployeeForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) -> &mut EmployeeForm {
        self.form.insert(EmployeeForm::create())
    }

    /// Opens the form for an existing employee
    ///
    /// Uses the displayed row when available, otherwise fetches it.
    ///
    /// # Errors
    ///
    /// Returns the gateway error if the employee cannot be fetched.
    pub async fn open_edit(&mut self, id: Uuid) -> GatewayResult<&mut EmployeeForm> {
        let employee = self.employee(id).await?;
        Ok(self.form.insert(EmployeeForm::edit(&employee)))
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submits the open form
    ///
    /// Returns the saved employee on success. On failure the form stays open.
    pub async fn submit_form(&mut self) -> Option<Employee> {
        let form = self.form.as_mut()?;

        match form.submit(self.api.as_ref()).await {
            Ok(employee) => {
                let notice = match form.mode() {
                    FormMode::Create => ADDED,
                    FormMode::Edit(_) => UPDATED,
                };
                tracing::info!(employee_id = %employee.id, "{}", notice);

                self.form = None;
                self.notices.success(notice);
                self.list.refresh().await;
                Some(employee)
            }
            Err(SubmitError::Invalid) => None,
            Err(SubmitError::Rejected(err)) => {
                tracing::warn!(error = %err, "Submission rejected");
                self.notices.error(err.to_string());
                None
            }
        }
    }

    /// Starts the delete confirmation for an employee
    ///
    /// # Errors
    ///
    /// Returns the gateway error if the employee cannot be fetched.
    pub async fn request_delete(&mut self, id: Uuid) -> GatewayResult<Employee> {
        let employee = self.employee(id).await?;
        self.delete.request(employee.clone());
        Ok(employee)
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        self.delete.pending()
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// Deletes the employee awaiting confirmation
    ///
    /// Returns true if an employee was deleted.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some((employee, result)) = self.delete.confirm(self.api.as_ref()).await else {
            return false;
        };

        match result {
            Ok(()) => {
                tracing::info!(employee_id = %employee.id, "Employee deleted");
                self.notices.success(DELETED);
                self.list.refresh().await;
                true
            }
            Err(err) => {
                tracing::warn!(employee_id = %employee.id, error = %err, "Delete failed");
                self.notices.error(err.to_string());
                false
            }
        }
    }

    async fn employee(&self, id: Uuid) -> GatewayResult<Employee> {
        match self.list.find(id).await {
            Some(employee) => Ok(employee),
            None => self.api.get(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::LocalGateway;
    use crate::views::{Field, NoticeKind};

    fn app() -> (DirectoryApp, Arc<LocalGateway>) {
        let gateway = Arc::new(LocalGateway::new());
        let app = DirectoryApp::new(gateway.clone(), Duration::from_millis(500));
        (app, gateway)
    }

    async fn add(app: &mut DirectoryApp, name: &str, email: &str, position: &str) -> Employee {
        let form = app.open_create();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Position, position);
        app.submit_form().await.unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_refreshes_with_current_search() {
        let (mut app, gateway) = app();
        app.list.set_search("eng").await.await.unwrap();

        add(&mut app, "Ann Lee", "ann@x.com", "Engineer").await;
        add(&mut app, "Bob Stone", "bob@x.com", "Manager").await;

        assert!(app.form().is_none());
        let notices = app.notices.drain();
        assert!(notices.iter().all(|n| n.kind == NoticeKind::Success && n.message == ADDED));

        // initial search plus one refresh per add, all filtered
        let calls = gateway.list_calls().await;
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| c.as_deref() == Some("eng")));

        let state = app.list.snapshot().await;
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.employees[0].name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_form_open() {
        let (mut app, _) = app();
        add(&mut app, "Ann Lee", "ann@x.com", "Engineer").await;
        app.notices.drain();

        let form = app.open_create();
        form.set(Field::Name, "Bob Stone");
        form.set(Field::Email, "ann@x.com");
        form.set(Field::Position, "Manager");

        assert!(app.submit_form().await.is_none());

        let form = app.form().unwrap();
        assert_eq!(form.value(Field::Name), "Bob Stone");
        let notices = app.notices.drain();
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].message, "Email already exists");
    }

    #[tokio::test]
    async fn test_edit_then_delete() {
        let (mut app, gateway) = app();
        let ann = add(&mut app, "Ann Lee", "ann@x.com", "Engineer").await;

        let form = app.open_edit(ann.id).await.unwrap();
        assert_eq!(form.value(Field::Email), "ann@x.com");
        form.set(Field::Position, "Senior Engineer");
        let updated = app.submit_form().await.unwrap();
        assert_eq!(updated.position, "Senior Engineer");

        app.request_delete(ann.id).await.unwrap();
        app.cancel_delete();
        assert!(!app.confirm_delete().await);
        assert_eq!(gateway.list(None).await.unwrap().len(), 1);

        let pending = app.request_delete(ann.id).await.unwrap();
        assert_eq!(pending.position, "Senior Engineer");
        assert!(app.confirm_delete().await);

        assert!(app.list.snapshot().await.employees.is_empty());
        let messages: Vec<String> = app.notices.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec![ADDED, UPDATED, DELETED]);
    }

    #[tokio::test]
    async fn test_edit_unknown_employee_fails() {
        let (mut app, _) = app();

        let err = app.open_edit(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(app.form().is_none());
    }
}
