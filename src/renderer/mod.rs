//! Render adapter
//!
//! Turns a [`Snapshot`] into a flat triangle list. Whatever owns the display
//! surface uploads the vertices; nothing here touches simulation state.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{BoundingBox, Snapshot};

/// Triangles for one display frame, in playfield pixel coordinates.
///
/// Draw order: projectiles, enemies, player, then a full-screen tint when the
/// round is over.
pub fn build_frame(snapshot: &Snapshot, playfield: BoundingBox) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        (snapshot.projectiles.len() * 6) + (snapshot.enemies.len() * 3) + 3 + 6,
    );

    for projectile in &snapshot.projectiles {
        vertices.extend(shapes::rect(projectile, colors::PROJECTILE));
    }
    for enemy in &snapshot.enemies {
        vertices.extend(shapes::ship(enemy, colors::ENEMY, false));
    }
    vertices.extend(shapes::ship(&snapshot.player, colors::PLAYER, true));

    if snapshot.game_over {
        vertices.extend(shapes::rect(&playfield, colors::GAME_OVER_TINT));
    }

    vertices
}

/// Raw bytes for a GPU vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
