//! Host-declared styling attributes.
//!
//! Attributes are read from a TOML table. Every key is optional:
//!
//! ```toml
//! week_day_text_size = "12sp"
//! day_text_size = "16sp"
//! text_color = "#212121"
//! accent_color = "#FF4081"
//! first_day_of_week = "Mon"
//! offscreen_page_limit = 2
//!
//! [selection_color]
//! default = "#00000000"
//! selected = "#3F51B5"
//! ```
//!
//! Colors are either a hex string or a table of per-state colors. Values are
//! validated while loading, so a loaded [`CarouselAttributes`] always applies
//! cleanly.

use std::path::Path;

use chrono::Weekday;
use light_calendar_core::logging::targets;
use light_calendar_core::{Color, StateColor};
use serde::Deserialize;

use crate::dimension::Dimension;
use crate::error::{Error, Result};

/// Validated styling attributes for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselAttributes {
    pub week_day_text_size: Option<Dimension>,
    pub day_text_size: Option<Dimension>,
    pub text_color: Option<StateColor>,
    pub selection_color: Option<StateColor>,
    pub accent_color: Option<StateColor>,
    pub first_day_of_week: Option<Weekday>,
    pub offscreen_page_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAttributes {
    week_day_text_size: Option<String>,
    day_text_size: Option<String>,
    text_color: Option<RawColor>,
    selection_color: Option<RawColor>,
    accent_color: Option<RawColor>,
    first_day_of_week: Option<String>,
    offscreen_page_limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Single(String),
    States {
        default: String,
        selected: Option<String>,
        pressed: Option<String>,
    },
}

impl RawColor {
    fn into_state_color(self) -> Result<StateColor> {
        match self {
            RawColor::Single(hex) => parse_color(&hex).map(StateColor::single),
            RawColor::States {
                default,
                selected,
                pressed,
            } => Ok(StateColor {
                default: parse_color(&default)?,
                selected: selected.as_deref().map(parse_color).transpose()?,
                pressed: pressed.as_deref().map(parse_color).transpose()?,
            }),
        }
    }
}

fn parse_color(value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| Error::invalid_color(value))
}

fn parse_weekday(value: &str) -> Result<Weekday> {
    value.trim().parse().map_err(|_| Error::InvalidWeekday {
        value: value.to_string(),
    })
}

impl CarouselAttributes {
    /// Parse attributes from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawAttributes = toml::from_str(text)?;
        let attributes = Self::try_from(raw)?;
        tracing::debug!(target: targets::ATTRIBUTES, ?attributes, "attributes loaded");
        Ok(attributes)
    }

    /// Read and parse an attribute file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

impl TryFrom<RawAttributes> for CarouselAttributes {
    type Error = Error;

    fn try_from(raw: RawAttributes) -> Result<Self> {
        Ok(Self {
            week_day_text_size: raw
                .week_day_text_size
                .as_deref()
                .map(str::parse::<Dimension>)
                .transpose()?,
            day_text_size: raw
                .day_text_size
                .as_deref()
                .map(str::parse::<Dimension>)
                .transpose()?,
            text_color: raw.text_color.map(RawColor::into_state_color).transpose()?,
            selection_color: raw.selection_color.map(RawColor::into_state_color).transpose()?,
            accent_color: raw.accent_color.map(RawColor::into_state_color).transpose()?,
            first_day_of_week: raw
                .first_day_of_week
                .as_deref()
                .map(parse_weekday)
                .transpose()?,
            offscreen_page_limit: raw.offscreen_page_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DimensionUnit;
    use std::io::Write;

    #[test]
    fn test_empty_table() {
        let attributes = CarouselAttributes::from_toml_str("").unwrap();
        assert_eq!(attributes, CarouselAttributes::default());
    }

    #[test]
    fn test_full_table() {
        let attributes = CarouselAttributes::from_toml_str(
            r##"
            week_day_text_size = "12sp"
            day_text_size = "8mm"
            text_color = "#212121"
            first_day_of_week = "monday"
            offscreen_page_limit = 2

            [selection_color]
            default = "#00000000"
            selected = "#3F51B5"
            "##,
        )
        .unwrap();

        assert_eq!(attributes.week_day_text_size, Some(Dimension::sp(12.0)));
        assert_eq!(
            attributes.day_text_size,
            Some(Dimension::new(8.0, DimensionUnit::Mm))
        );
        assert_eq!(
            attributes.text_color,
            Some(StateColor::single(Color::from_rgb8(0x21, 0x21, 0x21)))
        );
        assert_eq!(
            attributes.selection_color,
            Some(
                StateColor::single(Color::TRANSPARENT)
                    .with_selected(Color::from_rgb8(0x3F, 0x51, 0xB5))
            )
        );
        assert_eq!(attributes.accent_color, None);
        assert_eq!(attributes.first_day_of_week, Some(Weekday::Mon));
        assert_eq!(attributes.offscreen_page_limit, Some(2));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            CarouselAttributes::from_toml_str(r##"text_color = "#12""##),
            Err(Error::InvalidColor { .. })
        ));
        assert!(matches!(
            CarouselAttributes::from_toml_str(r#"day_text_size = "14em""#),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            CarouselAttributes::from_toml_str(r#"first_day_of_week = "someday""#),
            Err(Error::InvalidWeekday { .. })
        ));
        assert!(matches!(
            CarouselAttributes::from_toml_str("text_size = 3"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r##"accent_color = "#FF4081""##).unwrap();

        let attributes = CarouselAttributes::from_file(file.path()).unwrap();
        assert_eq!(
            attributes.accent_color,
            Some(StateColor::single(Color::from_rgb8(0xFF, 0x40, 0x81)))
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CarouselAttributes::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
