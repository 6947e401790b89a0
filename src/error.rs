use failure::{Context, Fail};
use std::fmt::Display;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}
#[derive(Debug, Fail)]
pub enum ErrorKind {
    #[fail(display = "{}", _0)]
    IO(#[cause] io::Error),

    #[fail(display = "pool is shutting down")]
    PoolShuttingDown,

    #[fail(display = "invalid pool configuration: {}", _0)]
    InvalidConfig(String),

    #[fail(display = "task failed: {}", _0)]
    TaskFailed(String),
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }

    pub(crate) fn shutting_down() -> Error {
        Error::from(ErrorKind::PoolShuttingDown)
    }

    pub(crate) fn invalid_config(msg: String) -> Error {
        Error::from(ErrorKind::InvalidConfig(msg))
    }

    pub(crate) fn task_failed(msg: String) -> Error {
        Error::from(ErrorKind::TaskFailed(msg))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error {
            inner: Context::new(ErrorKind::IO(err)),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(err: ErrorKind) -> Self {
        Error {
            inner: Context::new(err),
        }
    }
}
