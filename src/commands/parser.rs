//! Parsing of assistant input lines into commands.

use crate::error::{CommandError, CommandResult};

const ADD_USAGE: &str = "add <name> [phone]";
const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
const PHONE_USAGE: &str = "phone <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";
const DELETE_USAGE: &str = "delete <name>";
const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";

/// A single assistant command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Create a contact, or add a phone to an existing one
    Add { name: String, phone: Option<String> },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    RemovePhone { name: String, phone: String },
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The line is split on whitespace. The command word is matched
    /// case-insensitively; arguments are taken verbatim and extra trailing
    /// arguments are ignored.
    ///
    /// # Errors
    ///
    /// - `CommandError::InvalidCommand` for an empty line or unknown command word
    /// - `CommandError::MissingArguments` when required arguments are absent
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let command = words
            .next()
            .ok_or_else(|| CommandError::InvalidCommand(String::new()))?
            .to_lowercase();
        let args: Vec<&str> = words.collect();

        let parsed = match command.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name] = required::<1>(&args, "add", ADD_USAGE)?;
                Command::Add {
                    name,
                    phone: args.get(1).map(|phone| phone.to_string()),
                }
            }
            "change" => {
                let [name, old, new] = required::<3>(&args, "change", CHANGE_USAGE)?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [name] = required::<1>(&args, "phone", PHONE_USAGE)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] =
                    required::<2>(&args, "add-birthday", ADD_BIRTHDAY_USAGE)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = required::<1>(&args, "show-birthday", SHOW_BIRTHDAY_USAGE)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "delete" => {
                let [name] = required::<1>(&args, "delete", DELETE_USAGE)?;
                Command::Delete { name }
            }
            "remove-phone" => {
                let [name, phone] = required::<2>(&args, "remove-phone", REMOVE_PHONE_USAGE)?;
                Command::RemovePhone { name, phone }
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::InvalidCommand(command)),
        };

        Ok(parsed)
    }
}

/// Take the first `N` arguments, failing with the command's usage if fewer are present.
fn required<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { command, usage });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
