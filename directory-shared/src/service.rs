/// Employee resource service
///
/// Orchestrates validation, store access and error shaping for the five CRUD
/// operations. The service holds no state of its own; the injected store is the
/// single source of truth.
///
/// # Operation flow
///
/// ```text
/// create(payload)
///   ├─> validate_create          -> Validation
///   ├─> store.find_by_email      -> Conflict (pre-check)
///   └─> store.insert             -> Conflict (store constraint) | Employee
/// ```
///
/// # Example
///
/// ```
/// use directory_shared::models::employee::CreateEmployeeRequest;
/// use directory_shared::service::EmployeeService;
/// use directory_shared::store::MemoryStore;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), directory_shared::service::ServiceError> {
/// let service = EmployeeService::new(Arc::new(MemoryStore::new()));
///
/// let ann = service
///     .create(&CreateEmployeeRequest {
///         name: "Ann Lee".to_string(),
///         email: "ann@x.com".to_string(),
///         position: "Engineer".to_string(),
///     })
///     .await?;
///
/// let engineers = service.list(Some("eng")).await?;
/// assert_eq!(engineers[0].id, ann.id);
/// # Ok(())
/// # }
/// ```

use crate::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::store::{RecordStore, StoreError};
use crate::validation::{self, FieldError};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const NOT_FOUND: &str = "Employee not found";
pub const EMAIL_EXISTS: &str = "Email already exists";

/// Service error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// One or more payload fields failed validation
    #[error("Validation failed: {} errors", .0.len())]
    Validation(Vec<FieldError>),

    /// The path identifier is malformed
    #[error("Invalid argument: {}", .0.message)]
    InvalidArgument(FieldError),

    /// Another employee already uses the email
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No employee has the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Service result type alias
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ServiceError::Conflict(EMAIL_EXISTS.to_string()),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

/// CRUD operations over employees
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn RecordStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the injected store
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Lists employees, newest first, optionally filtered by a
    /// case-insensitive substring of name, email or position
    pub async fn list(&self, query: Option<&str>) -> ServiceResult<Vec<Employee>> {
        let search = validation::search_term(query);
        let employees = self.store.list(search.as_deref()).await?;

        debug!(search = ?search, count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Fetches one employee
    pub async fn get(&self, raw_id: &str) -> ServiceResult<Employee> {
        let id = parse_id(raw_id)?;

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validates and stores a new employee
    pub async fn create(&self, req: &CreateEmployeeRequest) -> ServiceResult<Employee> {
        let data = validation::validate_create(req).map_err(ServiceError::Validation)?;

        if self.store.find_by_email(&data.email, None).await?.is_some() {
            warn!(email = %data.email, "Rejected create with existing email");
            return Err(ServiceError::Conflict(EMAIL_EXISTS.to_string()));
        }

        // A concurrent create can still win the race; the store reports it as DuplicateEmail
        let employee = self.store.insert(data).await?;

        info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Applies a partial update
    pub async fn update(
        &self,
        raw_id: &str,
        req: &UpdateEmployeeRequest,
    ) -> ServiceResult<Employee> {
        let id = parse_id(raw_id)?;
        let changes = validation::validate_update(req).map_err(ServiceError::Validation)?;

        if let Some(email) = &changes.email {
            if self.store.find_by_email(email, Some(id)).await?.is_some() {
                warn!(employee_id = %id, email = %email, "Rejected update with existing email");
                return Err(ServiceError::Conflict(EMAIL_EXISTS.to_string()));
            }
        }

        let employee = self
            .store
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound(NOT_FOUND.to_string()))?;

        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Permanently removes an employee
    pub async fn delete(&self, raw_id: &str) -> ServiceResult<()> {
        let id = parse_id(raw_id)?;

        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(NOT_FOUND.to_string()));
        }

        info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    /// Returns true if the store answers
    pub async fn store_reachable(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(store = self.store.name(), "Store ping failed: {}", e);
                false
            }
        }
    }
}

fn parse_id(raw_id: &str) -> ServiceResult<Uuid> {
    validation::parse_id(raw_id).map_err(ServiceError::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::{EmployeeChanges, NewEmployee};
    use crate::store::{MemoryStore, StoreResult};
    use async_trait::async_trait;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(MemoryStore::new()))
    }

    fn create_req(name: &str, email: &str, position: &str) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
        }
    }

    /// Store whose email lookup never finds anything, so only the store's own
    /// constraint can catch a duplicate
    struct RacingStore(MemoryStore);

    #[async_trait]
    impl RecordStore for RacingStore {
        fn name(&self) -> &str {
            "racing"
        }
        async fn insert(&self, data: NewEmployee) -> StoreResult<Employee> {
            self.0.insert(data).await
        }
        async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>> {
            self.0.find_by_id(id).await
        }
        async fn find_by_email(&self, _: &str, _: Option<Uuid>) -> StoreResult<Option<Employee>> {
            Ok(None)
        }
        async fn list(&self, search: Option<&str>) -> StoreResult<Vec<Employee>> {
            self.0.list(search).await
        }
        async fn update(&self, id: Uuid, changes: EmployeeChanges) -> StoreResult<Option<Employee>> {
            self.0.update(id, changes).await
        }
        async fn delete(&self, id: Uuid) -> StoreResult<bool> {
            self.0.delete(id).await
        }
        async fn ping(&self) -> StoreResult<()> {
            Err(StoreError::Backend("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = service();
        let created = service
            .create(&create_req(" Ann Lee ", "Ann@X.com", "Engineer"))
            .await
            .unwrap();

        let fetched = service.get(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Ann Lee");
        assert_eq!(fetched.email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_create_validation_errors() {
        let err = service()
            .create(&create_req("", "bad", "Engineer"))
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "email"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_regardless_of_other_fields() {
        let service = service();
        service
            .create(&create_req("Ann Lee", "ann@x.com", "Engineer"))
            .await
            .unwrap();

        let err = service
            .create(&create_req("Bob", "ANN@X.COM", "Manager"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == EMAIL_EXISTS));
    }

    #[tokio::test]
    async fn test_store_constraint_surfaces_as_conflict() {
        let service = EmployeeService::new(Arc::new(RacingStore(MemoryStore::new())));
        service
            .create(&create_req("Ann Lee", "ann@x.com", "Engineer"))
            .await
            .unwrap();

        let err = service
            .create(&create_req("Ann Twin", "ann@x.com", "Engineer"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert!(!service.store_reachable().await);
    }

    #[tokio::test]
    async fn test_list_searches_all_fields_case_insensitively() {
        let service = service();
        let ann = service
            .create(&create_req("Ann Lee", "ann@x.com", "Engineer"))
            .await
            .unwrap();
        let bob = service
            .create(&create_req("Bob Stone", "bob@corp.io", "Manager"))
            .await
            .unwrap();

        let ids = |list: Vec<Employee>| list.into_iter().map(|e| e.id).collect::<Vec<_>>();

        assert_eq!(ids(service.list(None).await.unwrap()), vec![bob.id, ann.id]);
        assert_eq!(ids(service.list(Some("")).await.unwrap()), vec![bob.id, ann.id]);
        assert_eq!(ids(service.list(Some("ENG")).await.unwrap()), vec![ann.id]);
        assert_eq!(ids(service.list(Some("corp")).await.unwrap()), vec![bob.id]);
        assert_eq!(ids(service.list(Some("ston")).await.unwrap()), vec![bob.id]);
        assert!(service.list(Some("nobody")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_update_only_touches_updated_at() {
        let service = service();
        let ann = service
            .create(&create_req("Ann Lee", "ann@x.com", "Engineer"))
            .await
            .unwrap();

        let updated = service
            .update(&ann.id.to_string(), &UpdateEmployeeRequest::default())
            .await
            .unwrap();

        assert_eq!(updated.name, ann.name);
        assert_eq!(updated.email, ann.email);
        assert_eq!(updated.position, ann.position);
        assert_eq!(updated.created_at, ann.created_at);
        assert!(updated.updated_at > ann.updated_at);
    }

    #[tokio::test]
    async fn test_update_email_conflict_excludes_self() {
        let service = service();
        let ann = service
            .create(&create_req("Ann Lee", "ann@x.com", "Engineer"))
            .await
            .unwrap();
        service
            .create(&create_req("Bob Stone", "bob@x.com", "Manager"))
            .await
            .unwrap();

        let same = UpdateEmployeeRequest {
            email: Some("ANN@x.com".to_string()),
            ..Default::default()
        };
        assert!(service.update(&ann.id.to_string(), &same).await.is_ok());

        let taken = UpdateEmployeeRequest {
            email: Some("bob@x.com".to_string()),
            ..Default::default()
        };
        let err = service.update(&ann.id.to_string(), &taken).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_malformed_and_unknown_ids() {
        let service = service();

        assert!(matches!(
            service.get("not-a-uuid").await,
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.delete("42").await,
            Err(ServiceError::InvalidArgument(_))
        ));

        let missing = Uuid::new_v4().to_string();
        assert!(matches!(service.get(&missing).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            service.update(&missing, &UpdateEmployeeRequest::default()).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(service.delete(&missing).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();
        let ann = service
            .create(&create_req("Ann Lee", "ann@x.com", "Engineer"))
            .await
            .unwrap();
        let id = ann.id.to_string();

        service.delete(&id).await.unwrap();

        assert!(matches!(service.get(&id).await, Err(ServiceError::NotFound(_))));
        assert!(service.store_reachable().await);
    }
}
