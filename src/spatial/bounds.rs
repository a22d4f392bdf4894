//! Axis-aligned boxes in world units

/// Axis-aligned box in world (pixel) units
///
/// `x`/`y` is the top-left corner; `y` grows downward like the tile rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl BoundingBox {
    /// Create a box from its corner and size
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Same box moved by `(dx, dy)`
    pub const fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Right edge
    pub const fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub const fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Centre point
    pub const fn center(&self) -> [f32; 2] {
        [self.x + self.w / 2.0, self.y + self.h / 2.0]
    }

    /// Check if a point lies inside the box, edges included
    pub const fn contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.x
            && point[0] <= self.right()
            && point[1] >= self.y
            && point[1] <= self.bottom()
    }

    /// Check if two boxes share any interior area
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Finite coordinates and a strictly positive size
    pub const fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0
    }
}
