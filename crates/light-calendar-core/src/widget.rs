//! Widget trait and view identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{MeasureSpec, Size, SizeHint};
use crate::paint::Painter;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a view instance.
///
/// Two views compare equal only if they are the same instance; a view that is
/// destroyed and rebuilt for the same page gets a fresh id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocate a new id.
    pub fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({})", self.0)
    }
}

/// Common interface of every view in the toolkit.
pub trait Widget {
    /// The identity of this view instance.
    fn view_id(&self) -> ViewId;

    /// Preferred, minimum and maximum size.
    fn size_hint(&self) -> SizeHint;

    /// Compute the size this view takes under the given constraints.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let hint = self.size_hint();
        let size = Size::new(
            width.resolve(hint.preferred.width),
            height.resolve(hint.preferred.height),
        );
        hint.constrain(size)
    }

    /// Paint the view at its local origin.
    fn paint(&self, painter: &mut dyn Painter);
}
