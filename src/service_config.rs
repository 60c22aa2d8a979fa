// SPDX-License-Identifier: MIT OR Apache-2.0

use figment2::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use zbus::blocking::{Connection, ConnectionBuilder, Proxy};
use zbus::zvariant::OwnedObjectPath;

use crate::conn::BusConnection;
use crate::consts::{
    COLLECTIONS_PROPERTY, PROMPT_PREFIX, SERVICE_INTERFACE, SERVICE_NAME, SERVICE_PATH,
};
use crate::error::Result;
use crate::path::{has_prefix, PathArg};
use crate::preflight::check_conn_and_path;
use crate::property::paths_from_object_property;

/// Environment variable prefix read by [`ServiceConfig::figment`].
pub const ENV_PREFIX: &str = "SECRET_SERVICE_";

/// Identifies which message bus to connect to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bus {
    /// Current user's session bus (default)
    Session,
    /// System-wide bus
    System,
    /// Explicit D-Bus address, e.g. `unix:path=/run/user/1000/bus`
    #[serde(untagged)]
    Address(String),
}

impl Default for Bus {
    fn default() -> Self {
        Bus::Session
    }
}

impl From<&str> for Bus {
    fn from(s: &str) -> Self {
        match s {
            "session" => Bus::Session,
            "system" => Bus::System,
            address => Bus::Address(address.into()),
        }
    }
}

/// Where the Secret Service lives.
/// Deserializable from any Figment source.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub bus: Bus,

    /// Bus name of the service
    #[serde(default = "default_service")]
    pub service: String,

    /// Object path of the Service object
    #[serde(default = "default_path")]
    pub path: String,

    /// Path prefix shared by every Prompt object
    #[serde(default = "default_prompt_prefix")]
    pub prompt_prefix: String,
}

fn default_service() -> String {
    SERVICE_NAME.into()
}

fn default_path() -> String {
    SERVICE_PATH.into()
}

fn default_prompt_prefix() -> String {
    PROMPT_PREFIX.into()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bus: Bus::default(),
            service: default_service(),
            path: default_path(),
            prompt_prefix: default_prompt_prefix(),
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by `SECRET_SERVICE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Open a connection to the configured bus.
    ///
    /// This sits outside the checks themselves: it is the transport setup a
    /// client does once before handing the connection to them.
    pub fn connect(&self) -> Result<Connection> {
        let conn = match &self.bus {
            Bus::Session => Connection::session()?,
            Bus::System => Connection::system()?,
            Bus::Address(address) => ConnectionBuilder::address(address.as_str())?.build()?,
        };
        tracing::debug!(bus = ?self.bus, "connected to message bus");
        Ok(conn)
    }

    /// Whether `path` names a Prompt object under the configured prefix.
    pub fn is_prompt<'a>(&self, path: impl Into<PathArg<'a>>) -> bool {
        has_prefix(path.into(), &self.prompt_prefix)
    }

    /// A proxy for the object at `path` on the configured service.
    ///
    /// Nothing is built unless both the connection and the path pass
    /// [`check_conn_and_path`].
    pub fn object<'a>(
        &'a self,
        conn: &Connection,
        path: &'a str,
        interface: &'a str,
    ) -> Result<Proxy<'a>> {
        self.check_target(conn, path)?;
        Ok(Proxy::new(conn, self.service.as_str(), path, interface)?)
    }

    /// The gate [`ServiceConfig::object`] runs before building a proxy.
    pub fn check_target<C: BusConnection + ?Sized>(&self, conn: &C, path: &str) -> Result<()> {
        let (result, checked) = check_conn_and_path(Some(conn), path);
        if result.is_ok() {
            tracing::trace!(service = %self.service, path, "target passed preflight");
        }
        checked
    }

    /// Paths of every collection the service currently exposes.
    ///
    /// A client convenience built on the checks: one preflight, then a single
    /// read of the service's `Collections` property. No other bus traffic.
    pub fn collections(&self, conn: &Connection) -> Result<Vec<OwnedObjectPath>> {
        let service = self.object(conn, &self.path, SERVICE_INTERFACE)?;
        paths_from_object_property(&service, COLLECTIONS_PROPERTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conn::tests::FakeConn;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_bus_from_str() {
        assert_eq!(Bus::from("session"), Bus::Session);
        assert_eq!(Bus::from("system"), Bus::System);
        assert_eq!(
            Bus::from("unix:path=/tmp/bus"),
            Bus::Address("unix:path=/tmp/bus".into())
        );
    }

    #[test]
    fn test_bus_default() {
        assert_eq!(Bus::default(), Bus::Session);
    }

    #[test]
    fn test_config_defaults() {
        let config = ServiceConfig::from_figment(&Figment::from(Serialized::defaults(
            ServiceConfig::default(),
        )))
        .unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.service, "org.freedesktop.secrets");
        assert_eq!(config.prompt_prefix, "/org/freedesktop/secrets/prompt/");
    }

    #[test]
    fn test_config_overrides() {
        let figment = Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Serialized::default("bus", "system"))
            .merge(Serialized::default("service", "org.example.Secrets"));
        let config = ServiceConfig::from_figment(&figment).unwrap();
        assert_eq!(config.bus, Bus::System);
        assert_eq!(config.service, "org.example.Secrets");
        assert_eq!(config.path, SERVICE_PATH);
    }

    #[test]
    fn test_config_address_bus() {
        let figment = Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Serialized::default("bus", "unix:path=/tmp/bus"));
        let config = ServiceConfig::from_figment(&figment).unwrap();
        assert_eq!(config.bus, Bus::Address("unix:path=/tmp/bus".into()));
    }

    #[test]
    fn test_config_bad_type() {
        let figment = Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Serialized::default("path", vec![1, 2]));
        assert!(matches!(
            ServiceConfig::from_figment(&figment),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_is_prompt_uses_configured_prefix() {
        let config = ServiceConfig {
            prompt_prefix: "/org/example/prompt/".into(),
            ..ServiceConfig::default()
        };
        assert!(config.is_prompt("/org/example/prompt/1"));
        assert!(!config.is_prompt("/org/freedesktop/secrets/prompt/1"));
        assert!(ServiceConfig::default().is_prompt("/org/freedesktop/secrets/prompt/1"));
    }

    #[test]
    fn test_check_target_passes() {
        let config = ServiceConfig::default();
        assert!(config.check_target(&FakeConn::live(), &config.path).is_ok());
    }

    #[test]
    fn test_check_target_blocks_on_failure() {
        let config = ServiceConfig::default();

        match config.check_target(&FakeConn::dead(), "") {
            Err(Error::Aggregate(agg)) => {
                assert_eq!(agg.kinds(), vec![ErrorKind::NoConnection, ErrorKind::BadPath])
            }
            other => panic!("expected aggregate, got {other:?}"),
        }

        match config.check_target(&FakeConn::live(), "  ") {
            Err(Error::Aggregate(agg)) => assert_eq!(agg.kinds(), vec![ErrorKind::BadPath]),
            other => panic!("expected aggregate, got {other:?}"),
        }
    }

    #[test]
    fn test_config_from_env() {
        let var = format!("{ENV_PREFIX}PROMPT_PREFIX");
        std::env::set_var(&var, "/org/example/prompt/");
        let config = ServiceConfig::from_env();
        std::env::remove_var(&var);

        let config = config.unwrap();
        assert_eq!(config.prompt_prefix, "/org/example/prompt/");
        assert_eq!(config.service, SERVICE_NAME);
        assert!(config.is_prompt("/org/example/prompt/3"));
    }
}
