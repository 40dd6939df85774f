//! Ports - Interfaces the application layer needs from the outside

pub mod desktop_source_port;

pub use desktop_source_port::DesktopSourcePort;
