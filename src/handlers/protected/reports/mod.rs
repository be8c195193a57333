use uuid::Uuid;

use crate::error::ApiError;

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

// Re-export handler functions for use in routing
pub use create::create as report_create;
pub use delete::delete as report_delete;
pub use list::list as report_list;
pub use show::show as report_show;
pub use update::update as report_update;

/// Path ids are taken as raw strings so a malformed id maps to 400 rather
/// than a framework-level rejection, and never reaches the store.
pub(crate) fn parse_report_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("Invalid report id"))
}
