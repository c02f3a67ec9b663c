use thiserror::Error;
use x11rb::errors::ReplyError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot connect with the X server.")]
    ConnectionFailed,

    #[error("No screen available.")]
    NoScreen,

    #[error(transparent)]
    X11(ReplyError),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl<T: Into<ReplyError>> From<T> for Error {
    fn from(x: T) -> Error {
        Error::X11(Into::<ReplyError>::into(x))
    }
}
