//! Configuration Module
//!
//! Client settings and loading them from files and the environment.

pub mod loader;
pub mod options;

pub use loader::{ConfigFile, ConfigLoader};
pub use options::{ClientConfig, ClientOptions, Credentials, DEFAULT_BASE_URL};
