//! Backend-neutral painting.
//!
//! Widgets draw through the [`Painter`] trait. The host implements it on top
//! of its renderer; [`DisplayList`] records the calls instead, which is what
//! tests and headless hosts use.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Horizontal alignment of text inside its layout rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Drawing surface used by widgets.
pub trait Painter {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a single line of text vertically centered in `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, size: f32, color: Color, align: TextAlign);
}

/// A painter that offsets every call before forwarding it.
pub struct Translated<'a> {
    inner: &'a mut dyn Painter,
    dx: f32,
    dy: f32,
}

impl<'a> Translated<'a> {
    /// Wrap `inner`, shifting all geometry by `dx`, `dy`.
    pub fn new(inner: &'a mut dyn Painter, dx: f32, dy: f32) -> Self {
        Self { inner, dx, dy }
    }
}

impl Painter for Translated<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.inner.fill_rect(rect.translate(self.dx, self.dy), color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.inner
            .fill_circle(center.offset(self.dx, self.dy), radius, color);
    }

    fn draw_text(&mut self, text: &str, rect: Rect, size: f32, color: Color, align: TextAlign) {
        self.inner
            .draw_text(text, rect.translate(self.dx, self.dy), size, color, align);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        rect: Rect,
        size: f32,
        color: Color,
        align: TextAlign,
    },
}

/// A [`Painter`] that records draw calls in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Remove every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Iterate over recorded text commands as `(text, size, color)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text {
                text, size, color, ..
            } => Some((text.as_str(), *size, *color)),
            _ => None,
        })
    }

    /// Iterate over recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, size: f32, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            rect,
            size,
            color,
            align,
        });
    }
}
