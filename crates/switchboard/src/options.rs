//! Generator configuration read from the host's build options.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Deserializer, Serialize};

/// Build option naming the exception type raised for unmatched messages.
pub const ERROR_CLASS_NAME_KEY: &str = "DispatcherErrorClassName";

/// Exception type raised for unmatched messages when none is configured.
pub const DEFAULT_ERROR_CLASS_NAME: &str = "DispatcherError";

/// Source of raw build option values.
pub trait OptionsProvider {
    /// Returns the raw value recorded under `key`.
    fn option(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> OptionsProvider for HashMap<String, String, S> {
    fn option(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl OptionsProvider for BTreeMap<String, String> {
    fn option(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Settings for one generation pass.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use switchboard::GeneratorOptions;
///
/// let mut raw = HashMap::new();
/// raw.insert("DispatcherErrorClassName".to_owned(), "RoutingError".to_owned());
/// let options = GeneratorOptions::from_provider(&raw);
/// assert_eq!(options.error_class_name(), "RoutingError");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    #[serde(
        rename = "DispatcherErrorClassName",
        deserialize_with = "deserialize_class_name"
    )]
    error_class_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            error_class_name: String::from(DEFAULT_ERROR_CLASS_NAME),
        }
    }
}

impl GeneratorOptions {
    /// Creates options with the given error class name. A blank name selects
    /// [`DEFAULT_ERROR_CLASS_NAME`].
    #[must_use]
    pub fn new(error_class_name: &str) -> Self {
        Self {
            error_class_name: class_name_or_default(error_class_name),
        }
    }

    /// Reads the options from raw build options. Missing or blank values fall
    /// back to the defaults.
    #[must_use]
    pub fn from_provider<P>(provider: &P) -> Self
    where
        P: OptionsProvider + ?Sized,
    {
        provider
            .option(ERROR_CLASS_NAME_KEY)
            .map_or_else(Self::default, Self::new)
    }

    /// Returns the exception type raised for unmatched messages.
    #[must_use]
    pub fn error_class_name(&self) -> &str {
        &self.error_class_name
    }
}

fn class_name_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        String::from(DEFAULT_ERROR_CLASS_NAME)
    } else {
        String::from(trimmed)
    }
}

fn deserialize_class_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(class_name_or_default(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "DispatcherError")]
    #[case(Some(""), "DispatcherError")]
    #[case(Some("   "), "DispatcherError")]
    #[case(Some("SomeDumbError"), "SomeDumbError")]
    #[case(Some(" Padded "), "Padded")]
    fn provider_values_fall_back_when_blank(#[case] raw: Option<&str>, #[case] expected: &str) {
        let mut provider = BTreeMap::new();
        if let Some(text) = raw {
            provider.insert(ERROR_CLASS_NAME_KEY.to_owned(), text.to_owned());
        }
        assert_eq!(
            GeneratorOptions::from_provider(&provider).error_class_name(),
            expected
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut provider = HashMap::new();
        provider.insert("SomethingElse".to_owned(), "Nope".to_owned());
        assert_eq!(
            GeneratorOptions::from_provider(&provider),
            GeneratorOptions::default()
        );
    }

    #[rstest]
    #[case("{}", "DispatcherError")]
    #[case(r#"{"DispatcherErrorClassName": ""}"#, "DispatcherError")]
    #[case(r#"{"DispatcherErrorClassName": "SomeDumbError"}"#, "SomeDumbError")]
    #[case(r#"{"Unrelated": true}"#, "DispatcherError")]
    fn deserializes_from_json(#[case] json: &str, #[case] expected: &str) {
        let options: GeneratorOptions = serde_json::from_str(json)
            .unwrap_or_else(|err| panic!("options should deserialize: {err}"));
        assert_eq!(options.error_class_name(), expected);
    }

    #[test]
    fn serializes_under_the_build_option_key() {
        let json = serde_json::to_string(&GeneratorOptions::new("SomeDumbError"))
            .unwrap_or_else(|err| panic!("options should serialize: {err}"));
        assert_eq!(json, r#"{"DispatcherErrorClassName":"SomeDumbError"}"#);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(GeneratorOptions::new("X"), GeneratorOptions::new(" X "));
        assert_ne!(GeneratorOptions::new("X"), GeneratorOptions::default());
    }
}
