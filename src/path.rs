// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object path checks and classification.

use zbus::zvariant::{ObjectPath, OwnedObjectPath};

use crate::consts::PROMPT_PREFIX;
use crate::error::{Error, Result};

/// A path argument, either as a raw string or as a typed object path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathArg<'a> {
    Str(&'a str),
    /// Typed paths are re-validated, since `ObjectPath` has unchecked constructors.
    Object(&'a str),
}

impl<'a> PathArg<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            PathArg::Str(s) | PathArg::Object(s) => s,
        }
    }
}

impl<'a> From<&'a str> for PathArg<'a> {
    fn from(s: &'a str) -> Self {
        PathArg::Str(s)
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    fn from(s: &'a String) -> Self {
        PathArg::Str(s.as_str())
    }
}

impl<'a, 'b> From<&'a ObjectPath<'b>> for PathArg<'a> {
    fn from(p: &'a ObjectPath<'b>) -> Self {
        PathArg::Object(p.as_str())
    }
}

impl<'a> From<&'a OwnedObjectPath> for PathArg<'a> {
    fn from(p: &'a OwnedObjectPath) -> Self {
        PathArg::Object(p.as_str())
    }
}

/// Check that `path` is usable as an object path.
///
/// Typed paths must pass the D-Bus path syntax check. Any path must be
/// non-blank once surrounding whitespace is trimmed.
pub fn check_path<'a>(path: impl Into<PathArg<'a>>) -> Result<()> {
    let path = path.into();

    if let PathArg::Object(p) = path {
        if ObjectPath::try_from(p).is_err() {
            tracing::debug!(path = p, "object path failed syntax check");
            return Err(Error::BadPath(p.to_string()));
        }
    }

    let raw = path.as_str();
    if raw.trim().is_empty() {
        tracing::debug!(path = raw, "blank object path");
        return Err(Error::BadPath(raw.to_string()));
    }

    tracing::trace!(path = raw, "object path ok");
    Ok(())
}

/// Whether `path` names a Prompt object. No validation is done.
pub fn is_prompt_path<'a>(path: impl Into<PathArg<'a>>) -> bool {
    has_prefix(path.into(), PROMPT_PREFIX)
}

pub(crate) fn has_prefix(path: PathArg<'_>, prefix: &str) -> bool {
    path.as_str().starts_with(prefix)
}

/// The name of an object as it appears on the bus: the last segment of its path.
///
/// ```
/// use secret_preflight::name_from_path;
///
/// let name = name_from_path("/org/freedesktop/secrets/collection/login").unwrap();
/// assert_eq!(name, "login");
/// ```
pub fn name_from_path<'a>(path: impl Into<PathArg<'a>>) -> Result<String> {
    let path = path.into();
    check_path(path)?;

    let raw = path.as_str();
    raw.rsplit('/')
        .next()
        .map(str::to_string)
        .ok_or_else(|| Error::BadPath(raw.to_string()))
}
