// SPDX-License-Identifier: MIT OR Apache-2.0

//! Detection of services speaking the legacy draft of the Secret Service API.

use crate::consts::UNKNOWN_PROPERTY_ERROR;
use crate::error::Error;

/// Outcome of [`check_err_is_from_legacy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyCheck {
    /// The error matches the legacy symptom.
    pub is_legacy: bool,
    /// The error was of a shape the check knows how to inspect.
    pub recognized: bool,
}

/// Guess whether `err` came from a service implementing the legacy draft API.
///
/// Only meaningful for errors returned by `SearchItems`, `CreateItem`, item
/// construction, `ChangeItemType` and reading an item's `Type`. Legacy
/// services lack the `Type` item property, which shows up as an
/// `UnknownProperty` D-Bus error; that is the only symptom looked for.
///
/// `is_legacy == false` does not mean the service follows the current API.
/// For an aggregate, the first matching member decides.
pub fn check_err_is_from_legacy(err: &Error) -> LegacyCheck {
    let mut check = LegacyCheck::default();

    match err {
        Error::Aggregate(errs) => {
            check.recognized = true;
            check.is_legacy = errs.iter().any(|e| match e {
                Error::Bus(bus) => unknown_property(bus) == Some(true),
                _ => false,
            });
        }
        Error::Bus(bus) => {
            if let Some(is_legacy) = unknown_property(bus) {
                check.recognized = true;
                check.is_legacy = is_legacy;
            }
        }
        _ => {}
    }

    if check.is_legacy {
        tracing::debug!(error = %err, "error looks like a legacy Secret Service");
    }
    check
}

/// `None` when `err` is not an error reply from the remote side.
fn unknown_property(err: &zbus::Error) -> Option<bool> {
    match err {
        zbus::Error::MethodError(name, _, _) => Some(name.as_str() == UNKNOWN_PROPERTY_ERROR),
        zbus::Error::FDO(fdo) => Some(matches!(**fdo, zbus::fdo::Error::UnknownProperty(_))),
        _ => None,
    }
}
