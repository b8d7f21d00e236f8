//! Executes parsed commands against the session engine.

use tracing::debug;

use studyroom_session::{Attachment, SessionEngine, SessionError};

use crate::command::{Command, HELP};
use crate::error::ConsoleError;
use crate::render;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Quit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }

    fn none() -> Self {
        Reply::Lines(Vec::new())
    }
}

/// Run one command. Engine refusals come back as `Err` and leave the
/// engine unchanged; the caller prints them and carries on.
pub async fn execute(engine: &mut SessionEngine, command: Command) -> Result<Reply, ConsoleError> {
    debug!(?command, "Executing");

    let reply = match command {
        Command::Name(name) => {
            engine.set_identity(&name)?;
            Reply::none()
        }
        Command::Leave => {
            engine.leave_session();
            Reply::none()
        }
        Command::Say(text) => {
            let message = engine.send_message(&text, None)?;
            Reply::line(render::message_line(&message))
        }
        Command::Attach { path, caption } => {
            let limit = engine.state().log().max_attachment_bytes();
            let len = tokio::fs::metadata(&path).await?.len();
            let size = usize::try_from(len).unwrap_or(usize::MAX);
            if size > limit {
                return Err(SessionError::AttachmentTooLarge { size, max: limit }.into());
            }

            let data = tokio::fs::read(&path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let message =
                engine.send_message(&caption, Some(Attachment::new(file_name, data)))?;
            Reply::line(render::message_line(&message))
        }
        Command::Groups => Reply::Lines(engine.groups().iter().map(render::group_line).collect()),
        Command::Join(id) => {
            engine.join_group(id)?;
            Reply::none()
        }
        Command::Part(id) => {
            engine.leave_group(id)?;
            Reply::none()
        }
        Command::Admin(password) => {
            engine.authenticate_admin(&password)?;
            Reply::none()
        }
        Command::Logout => {
            engine.revoke_admin();
            Reply::none()
        }
        Command::Ban(name) => {
            if !engine.ban_user(&name)? {
                return Ok(Reply::line(format!("{name} is already banned")));
            }
            Reply::none()
        }
        Command::Unban(name) => {
            if !engine.unban_user(&name)? {
                return Ok(Reply::line(format!("{name} is not banned")));
            }
            Reply::none()
        }
        Command::Delete(id) => {
            if !engine.delete_message(id)? {
                return Ok(Reply::line(format!("No message #{id}")));
            }
            Reply::none()
        }
        Command::Flagged => {
            let flagged = engine.list_flagged();
            if flagged.is_empty() {
                Reply::line("No flagged messages")
            } else {
                Reply::Lines(flagged.into_iter().map(render::message_line).collect())
            }
        }
        Command::ClearFlagged => {
            engine.clear_flagged()?;
            Reply::none()
        }
        Command::ClearAll => {
            engine.clear_all()?;
            Reply::none()
        }
        Command::KickAll => {
            engine.kick_all()?;
            Reply::none()
        }
        Command::State => {
            let json = serde_json::to_string_pretty(&engine.snapshot())
                .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
            Reply::line(json)
        }
        Command::Help => Reply::line(HELP),
        Command::Quit => Reply::Quit,
    };

    Ok(reply)
}

/// Drain queued engine events as notice lines.
pub fn notices(engine: &mut SessionEngine) -> Vec<String> {
    engine
        .drain_events()
        .iter()
        .map(render::notice)
        .collect()
}
