//! Color types.
//!
//! [`Color`] is a plain 8-bit RGBA value. [`StateColor`] maps the interaction
//! state of a view ([`ViewState`]) to a color, falling back to a default when
//! no state-specific color is set.

use std::fmt;

/// An RGBA color with 8-bit channels (not premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    ///
    /// The optional fourth byte is alpha.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Whether the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const LIGHT_GRAY: Self = Self::from_rgb8(191, 191, 191);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Interaction state of a view, used to resolve a [`StateColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewState {
    /// The view is the current selection.
    pub selected: bool,
    /// A pointer is pressed on the view.
    pub pressed: bool,
}

impl ViewState {
    /// Neither selected nor pressed.
    pub fn normal() -> Self {
        Self::default()
    }

    /// Builder: set the selected flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Builder: set the pressed flag.
    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }
}

/// A color that depends on the [`ViewState`] it is drawn in.
///
/// Resolution order is pressed, selected, then the default color;
/// the first state that is both active and has a color set wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateColor {
    pub default: Color,
    pub selected: Option<Color>,
    pub pressed: Option<Color>,
}

impl StateColor {
    /// A state color that resolves to `color` in every state.
    pub const fn single(color: Color) -> Self {
        Self {
            default: color,
            selected: None,
            pressed: None,
        }
    }

    /// Builder: color used while selected.
    pub fn with_selected(mut self, color: Color) -> Self {
        self.selected = Some(color);
        self
    }

    /// Builder: color used while pressed.
    pub fn with_pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    /// Resolve the color for a view state.
    pub fn resolve(&self, state: ViewState) -> Color {
        if state.pressed {
            if let Some(color) = self.pressed {
                return color;
            }
        }
        if state.selected {
            if let Some(color) = self.selected {
                return color;
            }
        }
        self.default
    }

    /// Whether any state-specific color is set.
    pub fn is_stateful(&self) -> bool {
        self.selected.is_some() || self.pressed.is_some()
    }
}

impl From<Color> for StateColor {
    fn from(color: Color) -> Self {
        Self::single(color)
    }
}
