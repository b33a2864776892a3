//! Switch style configuration.
//!
//! A [`SwitchStyle`] is a partial set of visual properties. Every field is
//! optional; [`crate::Switch::apply_style`] only replaces what is present.
//! Styles load from YAML or TOML, with colors written as `#rrggbb` or
//! `#rrggbbaa`:
//!
//! ```yaml
//! on_text: "I"
//! off_text: "O"
//! on_color: "#4cd964"
//! border_width: 1.5
//! font: { family: system, size: 13.0, weight: bold }
//! ```

use crate::error::StyleError;
use mhswitch_core::{Color, Font};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Partial set of switch visual properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchStyle {
    /// Label on the on side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_text: Option<String>,
    /// Label on the off side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_text: Option<String>,
    /// Track fill when on
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub on_color: Option<Color>,
    /// Track fill when off
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub off_color: Option<Color>,
    /// On label color
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub on_text_color: Option<Color>,
    /// Off label color
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub off_text_color: Option<Color>,
    /// Knob fill at rest
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub knob_color: Option<Color>,
    /// Knob fill while pressed
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub highlighted_knob_color: Option<Color>,
    /// Outline color
    #[serde(default, with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Outline width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Track and outline corner radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    /// Label font
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl SwitchStyle {
    /// Parse a YAML style document.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a TOML style document.
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a style file, choosing the format from its extension
    /// (`yaml`/`yml` or `toml`, case-insensitive).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, StyleError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml,
            Some("toml") => Self::from_toml,
            _ => return Err(StyleError::UnsupportedFormat { extension }),
        };

        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = parse(&source)?;
        tracing::debug!(path = %path.display(), "loaded switch style");
        Ok(style)
    }

    /// Serialize to YAML. Unset fields are omitted.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Overlay `other` onto `self`: fields set in `other` win.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        overlay!(
            on_text,
            off_text,
            on_color,
            off_color,
            on_text_color,
            off_text_color,
            knob_color,
            highlighted_knob_color,
            border_color,
            border_width,
            corner_radius,
            font
        );
        self
    }
}

/// Optional colors as hex strings.
mod hex_color {
    use mhswitch_core::Color;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        color: &Option<Color>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.serialize_some(&color.to_hex_with_alpha()),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|hex| {
            Color::from_hex(&hex).map_err(|e| D::Error::custom(format!("invalid color {hex:?}: {e}")))
        })
        .transpose()
    }
}
