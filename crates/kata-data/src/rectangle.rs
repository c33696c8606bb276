use serde::{Deserialize, Serialize};

/// A width × height pair.
///
/// Fields are public and `area` reads them on each call, so changing a
/// dimension after construction is reflected in the next `area`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// `width * height`, computed from the current fields.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Build a rectangle from its two dimensions, kept exactly as given.
#[must_use]
pub const fn build_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle { width, height }
}
