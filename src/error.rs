// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use thiserror::Error;

/// Result type for preflight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The sentinel failure conditions callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoConnection,
    BadPath,
    InvalidProperty,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NoConnection => "no connection",
            ErrorKind::BadPath => "bad path",
            ErrorKind::InvalidProperty => "invalid property",
        };
        f.write_str(s)
    }
}

/// Errors that can occur when validating or talking to a Secret Service.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no valid D-Bus connection")]
    NoConnection,

    #[error("bad D-Bus object path: {0:?}")]
    BadPath(String),

    #[error("invalid property value: expected an array of object paths, got signature {found:?}")]
    InvalidProperty { found: String },

    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),

    #[error("service config error: {0}")]
    Config(#[from] figment2::Error),

    #[error("{0}")]
    Aggregate(AggregateError),
}

impl Error {
    /// The sentinel kind of this error, if it is one of the validation failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::NoConnection => Some(ErrorKind::NoConnection),
            Error::BadPath(_) => Some(ErrorKind::BadPath),
            Error::InvalidProperty { .. } => Some(ErrorKind::InvalidProperty),
            _ => None,
        }
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind() == Some(kind)
    }
}

impl From<zbus::fdo::Error> for Error {
    fn from(e: zbus::fdo::Error) -> Self {
        Error::Bus(e.into())
    }
}

impl From<AggregateError> for Error {
    fn from(e: AggregateError) -> Self {
        Error::Aggregate(e)
    }
}

/// Every error collected during one validation pass, in the order they were added.
#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<Error>,
}

impl AggregateError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: impl Into<Error>) {
        self.errors.push(err.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Sentinel kinds of the members, skipping members that have none.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().filter_map(Error::kind).collect()
    }

    /// `Ok(())` when nothing was collected, otherwise the whole aggregate as one error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Aggregate(self))
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("no errors"),
            [only] => write!(f, "{only}"),
            all => {
                write!(f, "{} errors: ", all.len())?;
                for (i, e) in all.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for AggregateError {}

impl IntoIterator for AggregateError {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
