//! Assistant command layer.
//!
//! Turns input lines into address book operations and renders their outcome
//! as one-line replies. Errors from the book are rendered here, never raised
//! past [`Assistant::handle_line`], so a bad command cannot end the session.

pub mod parser;

pub use parser::Command;

use crate::config::Config;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands
    Message(String),
    /// Print the text and end the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// An interactive assistant owning one address book.
#[derive(Debug, Default)]
pub struct Assistant {
    book: AddressBook,
    config: Config,
}

impl Assistant {
    pub fn new(config: Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    pub fn with_book(book: AddressBook, config: Config) -> Self {
        Self { book, config }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and run one input line, rendering any failure as a message.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Command '{}' failed: {}", line.trim(), e);
                Reply::Message(render_error(&e))
            }
        }
    }

    /// Run a parsed command against the address book.
    pub fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(name, phone)?,
            Command::Change { name, old, new } => {
                self.book.find_mut(&name)?.edit_phone(&old, &new)?;
                "Phone number updated.".to_string()
            }
            Command::Phone { name } => {
                let record = self.book.find(&name)?;
                if record.phones().is_empty() {
                    format!("No phones saved for {}.", name)
                } else {
                    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
                    format!("Phones for {}: {}", name, phones.join(", "))
                }
            }
            Command::All => {
                if self.book.is_empty() {
                    "No contacts saved.".to_string()
                } else {
                    self.book
                        .iter()
                        .map(Record::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday { name, birthday } => {
                self.book.find_mut(&name)?.add_birthday(&birthday)?;
                "Birthday added.".to_string()
            }
            Command::ShowBirthday { name } => match self.book.find(&name)?.birthday() {
                Some(birthday) => format!("Birthday for {}: {}", name, birthday),
                None => "Birthday not set.".to_string(),
            },
            Command::Birthdays => self.upcoming_birthdays(),
            Command::Delete { name } => {
                self.book.delete(&name)?;
                "Contact deleted.".to_string()
            }
            Command::RemovePhone { name, phone } => {
                self.book.find_mut(&name)?.remove_phone(&phone)?;
                "Phone number removed.".to_string()
            }
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Message(message))
    }

    /// Add a phone to an existing contact, or create the contact.
    ///
    /// A new contact is only inserted once its phone has been accepted.
    fn add_contact(&mut self, name: String, phone: Option<String>) -> CommandResult<String> {
        if self.book.contains(&name) {
            if let Some(phone) = phone {
                self.book.find_mut(&name)?.add_phone(&phone)?;
            }
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name)?;
        if let Some(phone) = phone {
            record.add_phone(&phone)?;
        }
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn upcoming_birthdays(&self) -> String {
        let days = self.config.birthday_horizon_days;
        let upcoming = self.book.get_upcoming_birthdays(days);
        if upcoming.is_empty() {
            return format!("No upcoming birthdays in the next {} days.", days);
        }

        upcoming
            .iter()
            .filter_map(|record| {
                record
                    .birthday()
                    .map(|birthday| format!("Upcoming birthday: {} on {}", record.name(), birthday))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render an error as a one-line reply for the user.
pub fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::Book(BookError::ContactNotFound(name)) => {
            format!("Contact '{}' not found.", name)
        }
        CommandError::Book(e) => e.to_string(),
        CommandError::MissingArguments { usage, .. } => {
            format!("Not enough arguments. Usage: {}", usage)
        }
        CommandError::InvalidCommand(_) => "Invalid command.".to_string(),
    }
}
