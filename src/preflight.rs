// SPDX-License-Identifier: MIT OR Apache-2.0

//! The combined connection and path check run before every remote call.

use crate::conn::{check_connection, BusConnection};
use crate::error::{AggregateError, Result};
use crate::path::{check_path, PathArg};

/// Which half of a combined connection/path check passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnPathCheckResult {
    pub connection_ok: bool,
    pub path_ok: bool,
}

impl ConnPathCheckResult {
    pub fn is_ok(&self) -> bool {
        self.connection_ok && self.path_ok
    }
}

/// Check both `conn` and `path`, reporting every failure rather than the first.
///
/// The error, when present, is always [`Error::Aggregate`](crate::Error::Aggregate)
/// with one member per failed check, connection first.
pub fn check_conn_and_path<'a, C: BusConnection + ?Sized>(
    conn: Option<&C>,
    path: impl Into<PathArg<'a>>,
) -> (ConnPathCheckResult, Result<()>) {
    let mut errs = AggregateError::new();
    let mut result = ConnPathCheckResult::default();

    match check_connection(conn) {
        Ok(()) => result.connection_ok = true,
        Err(e) => errs.push(e),
    }
    match check_path(path) {
        Ok(()) => result.path_ok = true,
        Err(e) => errs.push(e),
    }

    if errs.is_empty() {
        tracing::trace!("preflight check passed");
    } else {
        tracing::debug!(
            connection_ok = result.connection_ok,
            path_ok = result.path_ok,
            "preflight check failed"
        );
    }

    (result, errs.into_result())
}
