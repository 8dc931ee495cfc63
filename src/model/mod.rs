pub mod api;
pub mod attendance;
pub mod class;
pub mod student;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default, same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
