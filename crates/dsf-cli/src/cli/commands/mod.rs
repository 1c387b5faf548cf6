//! CLI command handlers. Each command is in its own file for clarity.

mod fetch;
mod list;
mod status;

pub use fetch::run_fetch;
pub use list::run_list;
pub use status::run_status;
