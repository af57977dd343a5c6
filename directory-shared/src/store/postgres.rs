/// PostgreSQL record store
///
/// Stores employees in the `employees` table (see `migrations/`). Email
/// uniqueness is enforced by the `employees_email_key` unique index on
/// `LOWER(email)`; a violation is reported as `StoreError::DuplicateEmail`.
///
/// # Example
///
/// ```no_run
/// use directory_shared::db::pool::{create_pool, DatabaseConfig};
/// use directory_shared::store::{PgStore, RecordStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let store = PgStore::new(pool);
/// let newest_first = store.list(None).await?;
/// # Ok(())
/// # }
/// ```

use super::{RecordStore, StoreError, StoreResult};
use crate::db::pool::health_check;
use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

const COLUMNS: &str = "id, name, email, position, created_at, updated_at";

/// Employee store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool (for shutdown)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Escapes LIKE wildcards so the term is matched literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Maps unique-index violations to `DuplicateEmail`
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let on_email = db_err
            .constraint()
            .map(|c| c.contains("email"))
            .unwrap_or(false);
        if db_err.is_unique_violation() && on_email {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl RecordStore for PgStore {
    fn name(&self) -> &str {
        "postgres"
    }

    async fn insert(&self, data: NewEmployee) -> StoreResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            r#"
            INSERT INTO employees (name, email, position)
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(data.name)
        .bind(data.email)
        .bind(data.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_email(
        &self,
        email: &str,
        excluding: Option<Uuid>,
    ) -> StoreResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM employees
            WHERE LOWER(email) = LOWER($1)
              AND ($2::uuid IS NULL OR id <> $2)
            "#
        ))
        .bind(email)
        .bind(excluding)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn list(&self, search: Option<&str>) -> StoreResult<Vec<Employee>> {
        let pattern = search.map(like_pattern);
        debug!(pattern = ?pattern, "Listing employees");

        let employees = sqlx::query_as::<_, Employee>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM employees
            WHERE $1::text IS NULL
               OR name ILIKE $1 ESCAPE '\'
               OR email ILIKE $1 ESCAPE '\'
               OR position ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> StoreResult<Option<Employee>> {
        // updated_at must move forward even within one clock tick
        let mut query = String::from(
            "UPDATE employees SET updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')",
        );
        let mut bind_count = 1;

        if changes.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if changes.email.is_some() {
            bind_count += 1;
            query.push_str(&format!(", email = ${}", bind_count));
        }
        if changes.position.is_some() {
            bind_count += 1;
            query.push_str(&format!(", position = ${}", bind_count));
        }

        query.push_str(&format!(" WHERE id = $1 RETURNING {COLUMNS}"));

        let mut q = sqlx::query_as::<_, Employee>(&query).bind(id);

        if let Some(name) = changes.name {
            q = q.bind(name);
        }
        if let Some(email) = changes.email {
            q = q.bind(email);
        }
        if let Some(position) = changes.position {
            q = q.bind(position);
        }

        let employee = q.fetch_optional(&self.pool).await.map_err(map_write_error)?;

        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        health_check(&self.pool).await?;
        Ok(())
    }
}
