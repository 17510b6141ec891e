use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict horizontal overlap; boxes that only touch do not overlap
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }
}

/// The play field. Width follows the container, height is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
        }
    }

    /// Recalculate the usable width, capped at the configured maximum
    pub fn resize(&mut self, container_width: f32, config: &Config) {
        if container_width.is_finite() && container_width > 0.0 {
            self.width = container_width.min(config.field_width);
        }
    }

    /// Left edge of the bird, which is centred horizontally
    pub fn bird_x(&self, config: &Config) -> f32 {
        self.width / 2.0 - config.bird_size / 2.0
    }

    /// Bird bounding box for a given top edge
    pub fn bird_box(&self, y: f32, config: &Config) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.bird_x(config), y),
            Vec2::splat(config.bird_size),
        )
    }
}
