//! The two JSON documents the site renders, and everything that can be
//! computed from them without a browser.

pub mod loader;
pub mod profile;
pub mod project;
pub mod text;

pub use loader::{ContentCache, LoadError, LoadToken, RawResponse, SectionState};
pub use profile::PersonalProfile;
pub use project::Project;
pub use text::{BilingualText, Localized};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as a missing key.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
