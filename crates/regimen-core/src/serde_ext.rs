//! Serde helpers shared by the draft and parameter types.

use serde::{Deserialize, Deserializer};

/// Deserializes a nullable field so that presence is observable.
///
/// Paired with `#[serde(default)]`: an absent field yields `None`, an explicit
/// `null` yields `Some(None)`, and a value yields `Some(Some(value))`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
