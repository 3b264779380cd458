#[cfg(feature = "cli")]
pub mod cli;
pub mod menu_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use menu_config::MenuConfig;
