/// Bird component - the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub y: f32,   // Top edge, px from the top of the field
    pub vel: f32, // px per tick, positive = down
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self { y, vel: 0.0 }
    }
}

/// Pipe component - one top/bottom pipe pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub seq: u32,     // Spawn order, oldest first
    pub x: f32,       // Left edge
    pub gap_top: f32, // Top of the gap
    pub scored: bool,
}

impl Pipe {
    pub fn new(seq: u32, x: f32, gap_top: f32) -> Self {
        Self {
            seq,
            x,
            gap_top,
            scored: false,
        }
    }

    /// Right (trailing) edge
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Bottom of the gap
    pub fn gap_bottom(&self, gap: f32) -> f32 {
        self.gap_top + gap
    }

    pub fn is_offscreen(&self, width: f32) -> bool {
        self.right(width) <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pipe_is_unscored() {
        let pipe = Pipe::new(0, 100.0, 80.0);
        assert!(!pipe.scored);
        assert_eq!(pipe.right(80.0), 180.0);
    }

    #[test]
    fn test_pipe_offscreen_edge() {
        assert!(Pipe::new(0, -80.0, 0.0).is_offscreen(80.0));
        assert!(!Pipe::new(0, -79.9, 0.0).is_offscreen(80.0));
    }
}
