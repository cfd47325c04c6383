//! Property system.
//!
//! [`Property<T>`] wraps a value behind a lock and reports whether an
//! assignment actually changed it. Owners decide what to do with that report;
//! the calendar settings log it and notify either way.
//!
//! # Example
//!
//! ```
//! use light_calendar_core::Property;
//!
//! let prop = Property::new(42);
//! assert_eq!(prop.get(), 42);
//!
//! // Setting the same value reports no change
//! assert!(!prop.set(42));
//!
//! assert!(prop.set(100));
//! assert_eq!(prop.get(), 100);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with change detection and interior mutability.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(1.5f32);
        assert!(!prop.set(1.5));
        assert!(prop.set(2.0));
        assert_eq!(prop.get(), 2.0);
    }

    #[test]
    fn test_property_shared_across_threads() {
        let prop = std::sync::Arc::new(Property::new(0u32));
        let writer = prop.clone();
        std::thread::spawn(move || writer.set(7)).join().unwrap();
        assert_eq!(prop.get(), 7);
    }
}
