//! Geometry and measurement types.
//!
//! [`Point`], [`Size`] and [`Rect`] describe layout in device pixels.
//! [`SizeHint`] is what a widget would like to be; [`MeasureSpec`] is what the
//! parent allows.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `dx`, `dy`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A size in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Rectangle with its top-left corner at (`x`, `y`).
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Midpoint; day cells center their text and selection circle here.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Check whether a point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive, so adjacent cells never both claim a point.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Return this rectangle moved by `dx`, `dy`.
    #[inline]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }
}

/// Size preferences reported by a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// Size the widget asks for when unconstrained.
    pub preferred: Size,

    /// The minimum acceptable size, if any.
    pub minimum: Option<Size>,

    /// The maximum size the widget should be, if any.
    pub maximum: Option<Size>,
}

impl Default for SizeHint {
    fn default() -> Self {
        Self {
            preferred: Size::ZERO,
            minimum: None,
            maximum: None,
        }
    }
}

impl SizeHint {
    /// Hint with only a preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Shorthand for [`SizeHint::new`] with a width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Builder: smallest size the widget still renders correctly at.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Some(Size::new(width, height));
        self
    }

    /// Builder: largest useful size.
    pub fn with_maximum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.maximum = Some(Size::new(width, height));
        self
    }

    /// Get the effective minimum size (zero if not set).
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }

    /// Get the effective maximum size (unbounded if not set).
    pub fn effective_maximum(&self) -> Size {
        self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX))
    }

    /// Constrain a size to be within the minimum and maximum bounds.
    ///
    /// NaN in `size` or in a bound is ignored: a NaN bound is no bound, and a
    /// NaN dimension becomes the minimum.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.effective_minimum();
        let max = self.effective_maximum();

        Size::new(
            constrain_axis(size.width, min.width, max.width),
            constrain_axis(size.height, min.height, max.height),
        )
    }
}

fn constrain_axis(value: f32, min: f32, max: f32) -> f32 {
    let min = if min.is_nan() { 0.0 } else { min };
    let max = if max.is_nan() { f32::MAX } else { max.max(min) };
    value.max(min).min(max)
}

/// A parent's constraint on one dimension of a child.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureSpec {
    /// The child must be exactly this size.
    Exactly(f32),
    /// The child may be as large as it wants, up to this size.
    AtMost(f32),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a desired size against this constraint.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }

    /// Whether the child is free to pick its own size along this axis.
    pub fn wraps_content(self) -> bool {
        !matches!(self, MeasureSpec::Exactly(_))
    }
}
