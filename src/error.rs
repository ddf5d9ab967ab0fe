//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value failed its format rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The record holds no such phone number
    #[error("Phone number '{0}' not found")]
    PhoneNotFound(String),

    /// The address book holds no contact with this name
    #[error("Record with name '{0}' not found")]
    ContactNotFound(String),
}

impl BookError {
    /// Whether the error refers to a missing phone or contact.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound(_) | Self::ContactNotFound(_))
    }

    /// Whether the error is a rejected phone, birthday or name format.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors raised while turning a line of input into a book operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The book operation itself failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Required arguments were not supplied
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The command word is not recognised
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
