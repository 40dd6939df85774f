//! Value Objects - Immutable domain values

pub mod app_type;
pub mod exec_command;
pub mod search_query;

pub use app_type::{AppType, UserProfile};
pub use exec_command::ExecCommand;
pub use search_query::{tokenize, SearchQuery};
