/// In-memory record store
///
/// Keeps employees in a `RwLock`-guarded vector and enforces the same
/// constraints as the PostgreSQL store: case-insensitive email uniqueness,
/// newest-first listing and strictly increasing `updated_at`.
///
/// It is useful for:
/// - Testing the service and HTTP layer without a database
/// - Running the API locally with `DATABASE_URL=memory`
///
/// Data does not survive a restart.
///
/// # Example
///
/// ```
/// use directory_shared::models::employee::NewEmployee;
/// use directory_shared::store::{MemoryStore, RecordStore};
///
/// # async fn example() -> Result<(), directory_shared::store::StoreError> {
/// let store = MemoryStore::new();
/// let ann = store
///     .insert(NewEmployee {
///         name: "Ann Lee".to_string(),
///         email: "ann@x.com".to_string(),
///         position: "Engineer".to_string(),
///     })
///     .await?;
///
/// assert!(store.find_by_id(ann.id).await?.is_some());
/// # Ok(())
/// # }
/// ```

use super::{RecordStore, StoreError, StoreResult};
use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Employee store held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Current time, nudged past `previous` so timestamps never repeat
fn tick_after(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}

fn email_taken(employees: &[Employee], email: &str, excluding: Option<Uuid>) -> bool {
    employees
        .iter()
        .any(|e| Some(e.id) != excluding && e.email.eq_ignore_ascii_case(email))
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn insert(&self, data: NewEmployee) -> StoreResult<Employee> {
        let mut employees = self.employees.write().await;

        if email_taken(&employees, &data.email, None) {
            return Err(StoreError::DuplicateEmail);
        }

        let created_at = tick_after(employees.iter().map(|e| e.created_at).max());
        let employee = Employee {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            position: data.position,
            created_at,
            updated_at: created_at,
        };

        employees.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
        excluding: Option<Uuid>,
    ) -> StoreResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees
            .iter()
            .find(|e| Some(e.id) != excluding && e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self, search: Option<&str>) -> StoreResult<Vec<Employee>> {
        let employees = self.employees.read().await;

        let mut found: Vec<Employee> = employees
            .iter()
            .filter(|e| search.map_or(true, |needle| e.matches(needle)))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(found)
    }

    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> StoreResult<Option<Employee>> {
        let mut employees = self.employees.write().await;

        if let Some(email) = &changes.email {
            if email_taken(&employees, email, Some(id)) {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let Some(employee) = employees.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        changes.apply_to(employee);
        employee.updated_at = tick_after(Some(employee.updated_at));

        Ok(Some(employee.clone()))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok(employees.len() < before)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
