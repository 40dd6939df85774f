//! Gateways - Repository and scanner implementations

pub mod desktop_entry_gateway;
pub mod file_usage_gateway;
pub mod heroic_gateway;

pub use desktop_entry_gateway::DesktopEntryGateway;
pub use file_usage_gateway::FileUsageGateway;
pub use heroic_gateway::{HeroicGateway, HEROIC_LAUNCHER};
