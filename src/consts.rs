// SPDX-License-Identifier: MIT OR Apache-2.0

//! Well-known names of the freedesktop Secret Service API.

/// Bus name the Secret Service is reachable under.
pub const SERVICE_NAME: &str = "org.freedesktop.secrets";
/// Object path of the Service object.
pub const SERVICE_PATH: &str = "/org/freedesktop/secrets";
pub const COLLECTION_PREFIX: &str = "/org/freedesktop/secrets/collection/";
pub const ALIAS_PREFIX: &str = "/org/freedesktop/secrets/aliases/";
/// Every Prompt object lives under this prefix.
pub const PROMPT_PREFIX: &str = "/org/freedesktop/secrets/prompt/";

pub const SERVICE_INTERFACE: &str = "org.freedesktop.Secret.Service";
pub const COLLECTION_INTERFACE: &str = "org.freedesktop.Secret.Collection";
pub const ITEM_INTERFACE: &str = "org.freedesktop.Secret.Item";
pub const PROMPT_INTERFACE: &str = "org.freedesktop.Secret.Prompt";
pub const SESSION_INTERFACE: &str = "org.freedesktop.Secret.Session";

pub const COLLECTIONS_PROPERTY: &str = "Collections";
pub const ITEMS_PROPERTY: &str = "Items";
/// Item property missing from the legacy draft of the API.
pub const TYPE_PROPERTY: &str = "Type";

pub const UNKNOWN_PROPERTY_ERROR: &str = "org.freedesktop.DBus.Error.UnknownProperty";
