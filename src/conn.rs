// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};

/// A bus connection that can list the names it currently owns.
pub trait BusConnection {
    fn names(&self) -> Vec<String>;
}

impl BusConnection for zbus::blocking::Connection {
    /// Only the unique name is reported; it is assigned by the bus during the handshake.
    fn names(&self) -> Vec<String> {
        self.unique_name()
            .map(|name| name.to_string())
            .into_iter()
            .collect()
    }
}

/// Check that `conn` is present and has finished its bus handshake.
///
/// A handshaken connection always owns at least one name, so a connection
/// with none is treated the same as a missing one.
pub fn check_connection<C: BusConnection + ?Sized>(conn: Option<&C>) -> Result<()> {
    match conn {
        Some(c) if !c.names().is_empty() => {
            tracing::trace!("bus connection is live");
            Ok(())
        }
        Some(_) => {
            tracing::debug!("bus connection owns no names");
            Err(Error::NoConnection)
        }
        None => {
            tracing::debug!("no bus connection");
            Err(Error::NoConnection)
        }
    }
}
