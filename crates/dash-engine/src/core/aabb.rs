use glam::Vec2;

/// Axis-aligned bounding box. `pos` is the top-left corner (y-down world).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Overlap test. Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }

    /// Inset the box by `inset` on each side. Used for forgiving hitboxes
    /// that are smaller than the rendered sprite.
    pub fn shrink(&self, inset: Vec2) -> Aabb {
        Aabb {
            pos: self.pos + inset,
            size: (self.size - inset * 2.0).max(Vec2::ZERO),
        }
    }
}
