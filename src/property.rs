// SPDX-License-Identifier: MIT OR Apache-2.0

//! Narrowing of property values into object path lists.

use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::error::{Error, Result};

const OBJECT_PATH_ARRAY: &str = "ao";

/// A remote object whose properties can be read.
pub trait BusObject {
    /// Read one property. Transport failures come back untouched.
    fn property(&self, name: &str) -> zbus::Result<OwnedValue>;
}

impl BusObject for zbus::blocking::Proxy<'_> {
    fn property(&self, name: &str) -> zbus::Result<OwnedValue> {
        zbus::blocking::Proxy::get_property::<OwnedValue>(self, name)
    }
}

/// Extract the object paths held by `value`.
///
/// Only an array of object paths is accepted. A lone path or an array of
/// strings is rejected, not coerced.
pub fn paths_from_property(value: &Value<'_>) -> Result<Vec<OwnedObjectPath>> {
    let signature = value.value_signature();
    let array = match value {
        Value::Array(array) if signature.as_str() == OBJECT_PATH_ARRAY => array,
        _ => {
            tracing::debug!(%signature, "property is not an object path array");
            return Err(Error::InvalidProperty {
                found: signature.to_string(),
            });
        }
    };

    array
        .iter()
        .map(|v| match v {
            Value::ObjectPath(p) => Ok(OwnedObjectPath::from(p.clone())),
            other => Err(Error::InvalidProperty {
                found: other.value_signature().to_string(),
            }),
        })
        .collect()
}

/// Fetch property `name` from `object` and extract its object paths.
///
/// This is a single blocking round trip; any timeout is the transport's.
pub fn paths_from_object_property<O: BusObject + ?Sized>(
    object: &O,
    name: &str,
) -> Result<Vec<OwnedObjectPath>> {
    let value = object.property(name)?;
    let paths = paths_from_property(&value)?;
    tracing::trace!(property = name, count = paths.len(), "read object paths");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use zbus::zvariant::ObjectPath;

    fn path(s: &'static str) -> ObjectPath<'static> {
        ObjectPath::try_from(s).unwrap()
    }

    enum FakeObject {
        Holds(Value<'static>),
        Missing,
    }

    impl BusObject for FakeObject {
        fn property(&self, name: &str) -> zbus::Result<OwnedValue> {
            match self {
                FakeObject::Holds(v) => Ok(OwnedValue::try_from(v.try_clone().unwrap()).unwrap()),
                FakeObject::Missing => Err(zbus::fdo::Error::UnknownProperty(name.into()).into()),
            }
        }
    }

    #[test]
    fn test_paths_from_array() {
        let value = Value::from(vec![
            path("/org/freedesktop/secrets/collection/login"),
            path("/org/freedesktop/secrets/collection/session"),
        ]);
        let paths = paths_from_property(&value).unwrap();
        let names: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "/org/freedesktop/secrets/collection/login",
                "/org/freedesktop/secrets/collection/session",
            ]
        );
    }

    #[test]
    fn test_empty_path_array() {
        let value = Value::from(Vec::<ObjectPath<'static>>::new());
        assert!(paths_from_property(&value).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_other_shapes() {
        let single = Value::from(path("/org/freedesktop/secrets"));
        let string = Value::from("/org/freedesktop/secrets");
        let number = Value::from(7u32);
        let strings = Value::from(vec!["/a", "/b"]);
        let empty_strings = Value::from(Vec::<String>::new());

        for value in [single, string, number, strings, empty_strings] {
            let err = paths_from_property(&value).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::InvalidProperty));
        }
    }

    #[test]
    fn test_from_object() {
        let object = FakeObject::Holds(Value::from(vec![path(
            "/org/freedesktop/secrets/collection/login",
        )]));
        let paths = paths_from_object_property(&object, "Collections").unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_from_object_wrong_shape() {
        let object = FakeObject::Holds(Value::from("login"));
        let err = paths_from_object_property(&object, "Collections").unwrap_err();
        assert!(err.is_kind(ErrorKind::InvalidProperty));
    }

    #[test]
    fn test_from_object_passes_transport_error() {
        let object = FakeObject::Missing;
        match paths_from_object_property(&object, "Items") {
            Err(Error::Bus(zbus::Error::FDO(e))) => {
                assert!(matches!(*e, zbus::fdo::Error::UnknownProperty(_)))
            }
            other => panic!("expected bus error, got {other:?}"),
        }
    }
}
