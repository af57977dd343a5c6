/// View-models for the directory front-end
///
/// - `list`: Employee list with debounced search
/// - `form`: Create/edit form with inline field errors
/// - `delete`: Two-step delete confirmation
/// - `notice`: Transient success/error notices

pub mod delete;
pub mod form;
pub mod list;
pub mod notice;

pub use delete::DeleteFlow;
pub use form::{EmployeeForm, Field, FormMode, SubmitError};
pub use list::{ListState, ListView};
pub use notice::{Notice, NoticeKind, Notices};
