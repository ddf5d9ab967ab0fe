//! Contact Book - an in-memory address book with validated phone numbers and
//! upcoming-birthday lookup.
//!
//! # Architecture
//!
//! - **domain**: Validated value types for names, phone numbers and birthdays
//! - **models**: The `Record` entity and the `AddressBook` collection
//! - **error**: Error types for book operations, commands and configuration
//! - **config**: Configuration from environment variables
//! - **commands**: Parsing and rendering for the interactive assistant

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use commands::{render_error, Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, CommandError, ConfigError};
pub use models::{AddressBook, Record};
