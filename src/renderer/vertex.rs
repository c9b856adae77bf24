//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte distance between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.38, 0.65, 0.98, 1.0]; // Blue
    pub const PROJECTILE: [f32; 4] = [0.20, 0.83, 0.60, 1.0]; // Green
    pub const ENEMY: [f32; 4] = [0.97, 0.44, 0.44, 1.0]; // Red
    pub const GAME_OVER_TINT: [f32; 4] = [0.0, 0.0, 0.0, 0.75];
}
