//! Host-to-editor command payload: an untagged, partial view configuration.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Partial editor configuration merged into the inner view state.
///
/// Every field is optional; only the fields present in an inbound command
/// overwrite local state. Unknown keys are ignored, and so is a known key
/// whose value has the wrong type; the rest of the command still applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewOptions {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub preserve_whitespace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub formats: Option<Vec<String>>,
    /// Editor module options, passed through to the editor unmodified.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub modules: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub theme: Option<String>,
}

/// A value of the wrong shape reads as absent instead of failing the record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ViewOptions {
    /// Command replacing the live editor content.
    pub fn initial_value(value: impl Into<String>) -> Self {
        Self {
            initial_value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Overlay the fields present in `other` onto `self`.
    pub fn merge(&mut self, other: ViewOptions) {
        let ViewOptions {
            initial_value,
            read_only,
            placeholder,
            preserve_whitespace,
            formats,
            modules,
            theme,
        } = other;

        if initial_value.is_some() {
            self.initial_value = initial_value;
        }
        if read_only.is_some() {
            self.read_only = read_only;
        }
        if placeholder.is_some() {
            self.placeholder = placeholder;
        }
        if preserve_whitespace.is_some() {
            self.preserve_whitespace = preserve_whitespace;
        }
        if formats.is_some() {
            self.formats = formats;
        }
        if modules.is_some() {
            self.modules = modules;
        }
        if theme.is_some() {
            self.theme = theme;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ViewOptions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlays_only_present_fields() {
        let mut base = ViewOptions {
            initial_value: Some("old".into()),
            placeholder: Some("Write something".into()),
            read_only: Some(false),
            ..Default::default()
        };
        base.merge(ViewOptions::initial_value("new"));

        assert_eq!(base.initial_value.as_deref(), Some("new"));
        assert_eq!(base.placeholder.as_deref(), Some("Write something"));
        assert_eq!(base.read_only, Some(false));
    }

    #[test]
    fn merge_of_empty_is_noop() {
        let mut base = ViewOptions::initial_value("keep");
        let before = base.clone();
        base.merge(ViewOptions::default());
        assert_eq!(base, before);
    }

    #[test]
    fn serializes_camel_case_and_skips_absent() {
        let json = serde_json::to_string(&ViewOptions::initial_value("Hello")).unwrap();
        assert_eq!(json, r#"{"initialValue":"Hello"}"#);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let opts: ViewOptions =
            serde_json::from_str(r#"{"readOnly":true,"somethingElse":42}"#).unwrap();
        assert_eq!(opts.read_only, Some(true));
        assert!(opts.initial_value.is_none());
    }

    #[test]
    fn mistyped_field_is_dropped_alone() {
        let opts: ViewOptions = serde_json::from_str(
            r#"{"initialValue":"Hello","readOnly":"yes","formats":["bold",3],"theme":"bubble"}"#,
        )
        .unwrap();
        assert_eq!(opts.initial_value.as_deref(), Some("Hello"));
        assert_eq!(opts.read_only, None);
        assert_eq!(opts.formats, None);
        assert_eq!(opts.theme.as_deref(), Some("bubble"));
    }

    #[test]
    fn null_reads_as_absent() {
        let opts: ViewOptions =
            serde_json::from_str(r#"{"placeholder":null,"readOnly":true}"#).unwrap();
        assert!(opts.placeholder.is_none());
        assert_eq!(opts.read_only, Some(true));
    }

    #[test]
    fn default_is_empty() {
        assert!(ViewOptions::default().is_empty());
        assert!(!ViewOptions::initial_value("").is_empty());
    }
}
