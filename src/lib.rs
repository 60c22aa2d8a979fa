// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preflight Checks for Secret Service Clients
//!
//! This crate holds the checks a freedesktop Secret Service client runs
//! around its D-Bus calls: connection and object path validation before a
//! call, and narrowing of property values and classification of errors
//! after one.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use secret_preflight::{check_conn_and_path, paths_from_object_property, ServiceConfig};
//!
//! let config = ServiceConfig::from_env()?;
//! let conn = config.connect()?;
//!
//! // Refuse to touch the bus unless both checks pass
//! let (_, checked) = check_conn_and_path(Some(&conn), config.path.as_str());
//! checked?;
//!
//! let service = config.object(&conn, &config.path, "org.freedesktop.Secret.Service")?;
//! let collections = paths_from_object_property(&service, "Collections")?;
//! # Ok::<(), secret_preflight::Error>(())
//! ```
//!
//! # Legacy services
//!
//! Some services still implement an earlier draft of the API that lacks the
//! item `Type` property. [`check_err_is_from_legacy`] spots the error that
//! produces, for the handful of calls where it can show up.
//!
//! # Configuration
//!
//! [`ServiceConfig`] can come from any Figment source; by default it reads
//! `SECRET_SERVICE_*` environment variables:
//!
//! ```toml
//! bus = "session"
//! service = "org.freedesktop.secrets"
//! path = "/org/freedesktop/secrets"
//! prompt_prefix = "/org/freedesktop/secrets/prompt/"
//! ```

pub mod conn;
pub mod consts;
pub mod error;
pub mod legacy;
pub mod path;
pub mod preflight;
pub mod property;
pub mod service_config;

pub use conn::{check_connection, BusConnection};
pub use error::{AggregateError, Error, ErrorKind, Result};
pub use legacy::{check_err_is_from_legacy, LegacyCheck};
pub use path::{check_path, is_prompt_path, name_from_path, PathArg};
pub use preflight::{check_conn_and_path, ConnPathCheckResult};
pub use property::{paths_from_object_property, paths_from_property, BusObject};
pub use service_config::{Bus, ServiceConfig};
