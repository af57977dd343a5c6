/// Database layer
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with health check and shutdown
/// - `migrations`: Embedded schema migrations
///
/// The employee queries themselves live in `store::postgres`.

pub mod migrations;
pub mod pool;
