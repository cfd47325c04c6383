//! Length units and their conversion to device pixels.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Unit of a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DimensionUnit {
    /// Device pixels.
    #[default]
    Px,
    /// Density-independent pixels.
    Dp,
    /// Scale-independent pixels (density times the user's font scale).
    Sp,
    /// Points, 1/72 inch.
    Pt,
    /// Inches.
    In,
    /// Millimeters.
    Mm,
}

impl DimensionUnit {
    fn suffix(self) -> &'static str {
        match self {
            DimensionUnit::Px => "px",
            DimensionUnit::Dp => "dp",
            DimensionUnit::Sp => "sp",
            DimensionUnit::Pt => "pt",
            DimensionUnit::In => "in",
            DimensionUnit::Mm => "mm",
        }
    }
}

/// Screen metrics used to convert dimensions into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel.
    pub density: f32,
    /// Pixels per scale-independent pixel.
    pub scaled_density: f32,
    /// Physical pixels per inch along the x axis.
    pub xdpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl DisplayMetrics {
    /// Metrics for a screen at `density` with the default font scale.
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
            xdpi: 160.0 * density,
        }
    }

    /// Builder: apply a user font scale on top of the density.
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.scaled_density = self.density * scale;
        self
    }
}

/// A length with a unit, e.g. `14sp`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    pub value: f32,
    pub unit: DimensionUnit,
}

impl Dimension {
    /// Create a dimension.
    pub const fn new(value: f32, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    pub const fn dp(value: f32) -> Self {
        Self::new(value, DimensionUnit::Dp)
    }

    pub const fn sp(value: f32) -> Self {
        Self::new(value, DimensionUnit::Sp)
    }

    /// Convert to device pixels.
    pub fn to_px(self, metrics: &DisplayMetrics) -> f32 {
        match self.unit {
            DimensionUnit::Px => self.value,
            DimensionUnit::Dp => self.value * metrics.density,
            DimensionUnit::Sp => self.value * metrics.scaled_density,
            DimensionUnit::Pt => self.value * metrics.xdpi / 72.0,
            DimensionUnit::In => self.value * metrics.xdpi,
            DimensionUnit::Mm => self.value * metrics.xdpi / 25.4,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    /// Parse `"14sp"`, `"12.5dp"`, `"20px"` and so on. A bare number is
    /// taken as pixels.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        let (number, suffix) = trimmed.split_at(split);

        let unit = match suffix.to_ascii_lowercase().as_str() {
            "" | "px" => DimensionUnit::Px,
            "dp" | "dip" => DimensionUnit::Dp,
            "sp" => DimensionUnit::Sp,
            "pt" => DimensionUnit::Pt,
            "in" => DimensionUnit::In,
            "mm" => DimensionUnit::Mm,
            other => {
                return Err(Error::invalid_dimension(
                    s,
                    format!("unknown unit '{other}'"),
                ));
            }
        };

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| Error::invalid_dimension(s, "expected a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(Error::invalid_dimension(
                s,
                "must be a finite, non-negative number",
            ));
        }

        Ok(Self::new(value, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!("14sp".parse::<Dimension>().unwrap(), Dimension::sp(14.0));
        assert_eq!(" 12.5 dp ".parse::<Dimension>().unwrap(), Dimension::dp(12.5));
        assert_eq!("20".parse::<Dimension>().unwrap(), Dimension::px(20.0));
        assert_eq!(
            "1in".parse::<Dimension>().unwrap(),
            Dimension::new(1.0, DimensionUnit::In)
        );
    }

    #[test]
    fn test_parse_dimension_errors() {
        assert!(matches!(
            "14em".parse::<Dimension>(),
            Err(Error::InvalidDimension { .. })
        ));
        assert!("sp".parse::<Dimension>().is_err());
        assert!("-3dp".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_to_px() {
        let metrics = DisplayMetrics::with_density(2.0).with_font_scale(1.5);
        assert_eq!(Dimension::px(10.0).to_px(&metrics), 10.0);
        assert_eq!(Dimension::dp(10.0).to_px(&metrics), 20.0);
        assert_eq!(Dimension::sp(10.0).to_px(&metrics), 30.0);
        assert_eq!(Dimension::new(72.0, DimensionUnit::Pt).to_px(&metrics), 320.0);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let dim = Dimension::sp(14.0);
        assert_eq!(dim.to_string(), "14sp");
        assert_eq!(dim.to_string().parse::<Dimension>().unwrap(), dim);
    }
}
