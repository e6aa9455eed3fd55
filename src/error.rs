use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum NotifierError {
    NoRecords,
    Send(reqwest::Error),
}

impl Display for NotifierError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            NotifierError::NoRecords => write!(f, "Event contains no records"),
            NotifierError::Send(ref error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl Error for NotifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            NotifierError::Send(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(e: reqwest::Error) -> NotifierError {
        NotifierError::Send(e)
    }
}
