/// Record store abstraction
///
/// The `RecordStore` trait is the persistence boundary for employees. It is
/// injected into the service as `Arc<dyn RecordStore>` and created once at
/// process start.
///
/// # Implementations
///
/// - `postgres::PgStore`: PostgreSQL via sqlx, the production store
/// - `memory::MemoryStore`: in-process store with the same constraints, used by
///   tests and for running without a database
///
/// # Uniqueness
///
/// Both implementations enforce case-insensitive email uniqueness themselves and
/// report a violation as `StoreError::DuplicateEmail`. The service's pre-check
/// only exists to produce the error earlier; two concurrent creates can both
/// pass it, and the store decides which one wins.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};
use async_trait::async_trait;
use uuid::Uuid;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another employee already has this email
    #[error("Email already exists")]
    DuplicateEmail,

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other backend failure
    #[error("Store error: {0}")]
    Backend(String),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations over employee records
///
/// Every method touches at most one record, except `list`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short name used in logs and health output
    fn name(&self) -> &str;

    /// Persists a new employee, assigning id and timestamps
    async fn insert(&self, data: NewEmployee) -> StoreResult<Employee>;

    /// Finds an employee by id
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>>;

    /// Finds an employee by email (case-insensitive), optionally ignoring one id
    async fn find_by_email(&self, email: &str, excluding: Option<Uuid>)
        -> StoreResult<Option<Employee>>;

    /// Lists employees newest first
    ///
    /// `search` must already be lower-cased; when present only employees whose
    /// name, email or position contains it are returned.
    async fn list(&self, search: Option<&str>) -> StoreResult<Vec<Employee>>;

    /// Applies changes and refreshes `updated_at`; `None` if the id is unknown
    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> StoreResult<Option<Employee>>;

    /// Hard-deletes an employee; false if the id is unknown
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;

    /// Checks that the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}
