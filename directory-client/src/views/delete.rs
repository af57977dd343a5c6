/// Two-step delete confirmation
///
/// ```text
/// Idle ──request──> Confirming(employee) ──confirm──> delete sent ──> Idle
///                          └───────────cancel──────────────────────> Idle
/// ```

use crate::error::GatewayResult;
use crate::gateway::EmployeeApi;
use directory_shared::models::employee::Employee;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming(Employee),
}

#[derive(Debug, Default)]
pub struct DeleteFlow {
    state: DeleteState,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks for confirmation before deleting `employee`
    pub fn request(&mut self, employee: Employee) {
        self.state = DeleteState::Confirming(employee);
    }

    /// Employee awaiting confirmation, if any
    pub fn pending(&self) -> Option<&Employee> {
        match &self.state {
            DeleteState::Confirming(employee) => Some(employee),
            DeleteState::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DeleteState::Idle;
    }

    /// Sends the delete for the pending employee
    ///
    /// Returns `None` when nothing was awaiting confirmation. The flow returns
    /// to idle whatever the outcome.
    pub async fn confirm(&mut self, api: &dyn EmployeeApi) -> Option<(Employee, GatewayResult<()>)> {
        match std::mem::take(&mut self.state) {
            DeleteState::Confirming(employee) => {
                let result = api.delete(employee.id).await;
                Some((employee, result))
            }
            DeleteState::Idle => None,
        }
    }
}
