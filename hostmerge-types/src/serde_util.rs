use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as an absent field.
///
/// The Lair API server marshals empty slices as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
