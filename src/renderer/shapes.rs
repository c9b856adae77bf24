//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::BoundingBox;

/// Two triangles covering a box
pub fn rect(bounds: &BoundingBox, color: [f32; 4]) -> Vec<Vertex> {
    let min = bounds.min();
    let max = bounds.max();
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Ship triangle inscribed in a box.
/// Points up (nose at the top edge) or down for enemies.
pub fn ship(bounds: &BoundingBox, color: [f32; 4], nose_up: bool) -> Vec<Vertex> {
    let (nose_y, base_y) = if nose_up {
        (bounds.y, bounds.bottom())
    } else {
        (bounds.bottom(), bounds.y)
    };
    vec![
        Vertex::new(bounds.center_x(), nose_y, color),
        Vertex::new(bounds.right(), base_y, color),
        Vertex::new(bounds.x, base_y, color),
    ]
}

/// Map playfield pixels (y down) to clip space (-1..1, y up)
pub fn to_clip_space(vertices: &mut [Vertex], playfield: Vec2) {
    for v in vertices {
        let p = Vec2::from(v.position);
        let ndc = Vec2::new(p.x / playfield.x * 2.0 - 1.0, 1.0 - p.y / playfield.y * 2.0);
        v.position = ndc.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let b = BoundingBox::new(10.0, 20.0, 4.0, 10.0);
        let verts = rect(&b, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0] == 10.0 || v.position[0] == 14.0);
            assert!(v.position[1] == 20.0 || v.position[1] == 30.0);
        }
    }

    #[test]
    fn test_ship_nose_direction() {
        let b = BoundingBox::new(0.0, 0.0, 40.0, 40.0);
        let up = ship(&b, [1.0; 4], true);
        assert_eq!(up[0].position, [20.0, 0.0]);
        let down = ship(&b, [1.0; 4], false);
        assert_eq!(down[0].position, [20.0, 40.0]);
    }

    #[test]
    fn test_clip_space_corners() {
        let mut verts = [
            Vertex::new(0.0, 0.0, [1.0; 4]),
            Vertex::new(800.0, 600.0, [1.0; 4]),
        ];
        to_clip_space(&mut verts, Vec2::new(800.0, 600.0));
        assert_eq!(verts[0].position, [-1.0, 1.0]);
        assert_eq!(verts[1].position, [1.0, -1.0]);
    }
}
