//! Parsing of console input lines into engine actions.

use std::path::PathBuf;

use studyroom_shared::types::{GroupId, MessageId};

use crate::error::ConsoleError;

pub const HELP: &str = "\
Commands:
  /name <name>              enter the room (or switch name)
  /leave                    leave the room
  /say <text>               send a message (plain lines do the same)
  /attach <path> [caption]  send a file
  /groups                   list study groups
  /join <id>, /part <id>    join or leave a study group
  /admin <password>         enter admin mode
  /logout                   exit admin mode
  /ban <name>, /unban <name>
  /delete <id>              delete a message
  /flagged                  list flagged messages
  /clear-flagged, /clear-all, /kick-all
  /state                    print the session as JSON
  /help, /quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Leave,
    Say(String),
    Attach {
        path: PathBuf,
        caption: String,
    },
    Groups,
    Join(GroupId),
    Part(GroupId),
    Admin(String),
    Logout,
    Ban(String),
    Unban(String),
    Delete(MessageId),
    Flagged,
    ClearFlagged,
    ClearAll,
    KickAll,
    State,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`; lines that do not
    /// start with `/` are messages.
    pub fn parse(line: &str) -> Result<Option<Self>, ConsoleError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return Ok(Some(Command::Say(line.to_string())));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "name" => Command::Name(required(arg, "name", "a display name")?),
            "leave" => Command::Leave,
            "say" => Command::Say(required(arg, "say", "some text")?),
            "attach" => {
                let arg = required(arg, "attach", "a file path")?;
                let (path, caption) = match arg.split_once(char::is_whitespace) {
                    Some((path, caption)) => (path, caption.trim()),
                    None => (arg.as_str(), ""),
                };
                Command::Attach {
                    path: PathBuf::from(path),
                    caption: caption.to_string(),
                }
            }
            "groups" => Command::Groups,
            "join" => Command::Join(group_id(arg, "join")?),
            "part" => Command::Part(group_id(arg, "part")?),
            "admin" => Command::Admin(required(arg, "admin", "a password")?),
            "logout" => Command::Logout,
            "ban" => Command::Ban(required(arg, "ban", "a name")?),
            "unban" => Command::Unban(required(arg, "unban", "a name")?),
            "delete" => {
                let raw = required(arg, "delete", "a message id")?;
                let id = raw.parse().map_err(|_| ConsoleError::InvalidArgument {
                    what: "message id",
                    value: raw.clone(),
                })?;
                Command::Delete(id)
            }
            "flagged" => Command::Flagged,
            "clear-flagged" => Command::ClearFlagged,
            "clear-all" => Command::ClearAll,
            "kick-all" => Command::KickAll,
            "state" => Command::State,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ConsoleError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(arg: &str, command: &'static str, what: &'static str) -> Result<String, ConsoleError> {
    if arg.is_empty() {
        return Err(ConsoleError::MissingArgument { command, what });
    }
    Ok(arg.to_string())
}

fn group_id(arg: &str, command: &'static str) -> Result<GroupId, ConsoleError> {
    let raw = required(arg, command, "a group id")?;
    raw.parse().map_err(|_| ConsoleError::InvalidArgument {
        what: "group id",
        value: raw,
    })
}
