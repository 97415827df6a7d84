use bytemuck::{Pod, Zeroable};

/// What a [`DrawInstance`] represents. The rendering backend interprets
/// each kind with its own shader/path; the simulation never draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DrawKind {
    /// Full-screen vertical gradient: `color` at the top, `color2` at the horizon.
    Sky = 0,
    /// Sun or moon disc. `p0`: 1.0 = sun, 0.0 = moon.
    Celestial = 1,
    /// Parallax silhouette. `p0` = variant, `p1` = layer depth (0/1/2).
    Silhouette = 2,
    Cloud = 3,
    /// The ground strip. `color2` carries the dirt tone below the grass line.
    Ground = 4,
    /// The player sprite. `p0` = animation clip id.
    Player = 5,
    /// Obstacle. `p0` = obstacle kind (0/1/2).
    Obstacle = 6,
    Collectible = 7,
    /// One text glyph. `p0` = ASCII code.
    Glyph = 8,
}

impl DrawKind {
    pub fn as_f32(self) -> f32 {
        self as u32 as f32
    }
}

/// Per-instance draw data in a flat float buffer: 16 floats = 64 bytes
/// stride, suitable for zero-copy handoff to a canvas/GPU front-end.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DrawInstance {
    /// Numeric [`DrawKind`].
    pub kind: f32,
    /// Top-left corner in world space.
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Primary RGBA color.
    pub color: [f32; 4],
    /// Secondary RGBA color (gradients, accents).
    pub color2: [f32; 4],
    /// Kind-specific parameters.
    pub p0: f32,
    pub p1: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// The draw-command list: rebuilt from scratch each frame, back-to-front.
pub struct DrawList {
    instances: Vec<DrawInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[DrawInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_instance_is_16_floats() {
        assert_eq!(std::mem::size_of::<DrawInstance>(), 64);
        assert_eq!(DrawInstance::FLOATS, 16);
    }

    #[test]
    fn push_and_clear() {
        let mut list = DrawList::new();
        list.push(DrawInstance::default());
        list.push(DrawInstance::default());
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }
}
