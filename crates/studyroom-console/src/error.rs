use studyroom_session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown command: /{0} (try /help)")]
    UnknownCommand(String),

    #[error("/{command} needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("Cannot read attachment: {0}")]
    Io(#[from] std::io::Error),
}
