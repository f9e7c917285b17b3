//! Axis-aligned rectangles used by collision systems.

/// Axis-aligned collision rectangle in world coordinates.
///
/// The default box is empty and sits at the origin. Empty boxes never
/// collide with anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl BoundingBox {
    /// Creates a box from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Whether the box covers no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether the two boxes overlap. Touching edges do not count.
    ///
    /// # Examples
    /// ```
    /// use slither::BoundingBox;
    /// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    /// let b = BoundingBox::new(5.0, 5.0, 10.0, 10.0);
    /// let c = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
    /// assert!(a.collides(&b));
    /// assert!(!a.collides(&c));
    /// ```
    #[must_use]
    pub const fn collides(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}
