/// Data models for the employee directory
///
/// # Models
///
/// - `employee`: The employee record plus its create and update inputs
///
/// # Example
///
/// ```no_run
/// use directory_shared::models::employee::NewEmployee;
///
/// let new_employee = NewEmployee {
///     name: "Ann Lee".to_string(),
///     email: "ann@example.com".to_string(),
///     position: "Engineer".to_string(),
/// };
/// ```

pub mod employee;
