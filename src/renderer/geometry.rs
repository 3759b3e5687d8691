//! Static vertex tables for the scene.
//!
//! The plane and cube share the interleaved [`Vertex`] layout. The cup and
//! monitor tables use a position + texcoord layout and are never uploaded;
//! the cup and monitor draws reuse the front of the cube table instead.

use super::vertex::Vertex;

/// Cube half-extent.
const H: f32 = 0.1;
/// The plane is nudged back along -Z so its edge does not coincide with the cube row.
const PLANE_Z: f32 = -0.05;

pub const PLANE_VERTEX_COUNT: i32 = 6;
pub const CUBE_VERTEX_COUNT: i32 = 36;
/// Vertex count used for the cup and monitor draws: the first three cube faces.
pub const PARTIAL_VERTEX_COUNT: i32 = 18;

const UP: [f32; 3] = [0.0, 1.0, 0.0];

#[rustfmt::skip]
pub const PLANE_VERTICES: [Vertex; PLANE_VERTEX_COUNT as usize] = [
    Vertex::new([-0.5, 0.0, -0.5 + PLANE_Z], [0.0, 1.0], UP),
    Vertex::new([ 0.5, 0.0, -0.5 + PLANE_Z], [1.0, 1.0], UP),
    Vertex::new([ 0.5, 0.0,  0.5 + PLANE_Z], [1.0, 0.0], UP),

    Vertex::new([-0.5, 0.0, -0.5 + PLANE_Z], [0.0, 1.0], UP),
    Vertex::new([ 0.5, 0.0,  0.5 + PLANE_Z], [1.0, 0.0], UP),
    Vertex::new([-0.5, 0.0,  0.5 + PLANE_Z], [0.0, 0.0], UP),
];

const BACK: [f32; 3] = [0.0, 0.0, -1.0];
const FRONT: [f32; 3] = [0.0, 0.0, 1.0];
const LEFT: [f32; 3] = [-1.0, 0.0, 0.0];
const RIGHT: [f32; 3] = [1.0, 0.0, 0.0];
const BOTTOM: [f32; 3] = [0.0, -1.0, 0.0];
const TOP: [f32; 3] = [0.0, 1.0, 0.0];

#[rustfmt::skip]
pub const CUBE_VERTICES: [Vertex; CUBE_VERTEX_COUNT as usize] = [
    // back
    Vertex::new([-H, -H, -H], [0.0, 0.0], BACK),
    Vertex::new([ H, -H, -H], [1.0, 0.0], BACK),
    Vertex::new([ H,  H, -H], [1.0, 1.0], BACK),
    Vertex::new([ H,  H, -H], [1.0, 1.0], BACK),
    Vertex::new([-H,  H, -H], [0.0, 1.0], BACK),
    Vertex::new([-H, -H, -H], [0.0, 0.0], BACK),
    // front
    Vertex::new([-H, -H,  H], [0.0, 0.0], FRONT),
    Vertex::new([ H, -H,  H], [1.0, 0.0], FRONT),
    Vertex::new([ H,  H,  H], [1.0, 1.0], FRONT),
    Vertex::new([ H,  H,  H], [1.0, 1.0], FRONT),
    Vertex::new([-H,  H,  H], [0.0, 1.0], FRONT),
    Vertex::new([-H, -H,  H], [0.0, 0.0], FRONT),
    // left
    Vertex::new([-H,  H,  H], [1.0, 0.0], LEFT),
    Vertex::new([-H,  H, -H], [1.0, 1.0], LEFT),
    Vertex::new([-H, -H, -H], [0.0, 1.0], LEFT),
    Vertex::new([-H, -H, -H], [0.0, 1.0], LEFT),
    Vertex::new([-H, -H,  H], [0.0, 0.0], LEFT),
    Vertex::new([-H,  H,  H], [1.0, 0.0], LEFT),
    // right
    Vertex::new([ H,  H,  H], [1.0, 0.0], RIGHT),
    Vertex::new([ H,  H, -H], [1.0, 1.0], RIGHT),
    Vertex::new([ H, -H, -H], [0.0, 1.0], RIGHT),
    Vertex::new([ H, -H, -H], [0.0, 1.0], RIGHT),
    Vertex::new([ H, -H,  H], [0.0, 0.0], RIGHT),
    Vertex::new([ H,  H,  H], [1.0, 0.0], RIGHT),
    // bottom
    Vertex::new([-H, -H, -H], [0.0, 1.0], BOTTOM),
    Vertex::new([ H, -H, -H], [1.0, 1.0], BOTTOM),
    Vertex::new([ H, -H,  H], [1.0, 0.0], BOTTOM),
    Vertex::new([ H, -H,  H], [1.0, 0.0], BOTTOM),
    Vertex::new([-H, -H,  H], [0.0, 0.0], BOTTOM),
    Vertex::new([-H, -H, -H], [0.0, 1.0], BOTTOM),
    // top
    Vertex::new([-H,  H, -H], [0.0, 1.0], TOP),
    Vertex::new([ H,  H, -H], [1.0, 1.0], TOP),
    Vertex::new([ H,  H,  H], [1.0, 0.0], TOP),
    Vertex::new([ H,  H,  H], [1.0, 0.0], TOP),
    Vertex::new([-H,  H,  H], [0.0, 0.0], TOP),
    Vertex::new([-H,  H, -H], [0.0, 1.0], TOP),
];

/// Position + texcoord, five floats per vertex.
pub type ShapeVertex = [f32; 5];

/// Coffee cup outline: a square base and an apex. Not drawn.
#[rustfmt::skip]
pub const COFFEE_CUP_VERTICES: [ShapeVertex; 5] = [
    [0.5, 0.0, 0.5,  0.0, 0.0],
    [0.7, 0.0, 0.5,  1.0, 0.0],
    [0.7, 0.0, 0.7,  1.0, 1.0],
    [0.5, 0.0, 0.7,  0.0, 1.0],
    [0.6, 0.1, 0.6,  0.5, 1.0],
];

/// Square monitor screen. Not drawn.
#[rustfmt::skip]
pub const MONITOR_VERTICES: [ShapeVertex; 4] = [
    [-0.25, 0.0,  0.25,  0.0, 0.0],
    [ 0.25, 0.0,  0.25,  1.0, 0.0],
    [ 0.25, 0.0, -0.25,  1.0, 1.0],
    [-0.25, 0.0, -0.25,  0.0, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn cube_is_closed_box_with_unit_normals() {
        for vertex in &CUBE_VERTICES {
            for c in vertex.position {
                assert!((c.abs() - H).abs() < 1e-6);
            }
            assert!((length(vertex.normal) - 1.0).abs() < 1e-6);
            // each vertex lies on the face its normal points at
            let dot: f32 = (0..3).map(|i| vertex.position[i] * vertex.normal[i]).sum();
            assert!((dot - H).abs() < 1e-6);
        }
    }

    #[test]
    fn partial_draw_stops_on_face_boundary() {
        assert_eq!(PARTIAL_VERTEX_COUNT % 6, 0);
        assert!(PARTIAL_VERTEX_COUNT < CUBE_VERTEX_COUNT);
        let faces: Vec<[f32; 3]> = CUBE_VERTICES[..PARTIAL_VERTEX_COUNT as usize]
            .chunks(6)
            .map(|face| face[0].normal)
            .collect();
        assert_eq!(faces, vec![BACK, FRONT, LEFT]);
    }

    #[test]
    fn plane_is_flat_and_faces_up() {
        assert_eq!(PLANE_VERTICES.len(), PLANE_VERTEX_COUNT as usize);
        for vertex in &PLANE_VERTICES {
            assert_eq!(vertex.position[1], 0.0);
            assert_eq!(vertex.normal, UP);
        }
    }

    #[test]
    fn unused_shapes_do_not_fit_partial_draw() {
        assert_ne!(COFFEE_CUP_VERTICES.len() as i32, PARTIAL_VERTEX_COUNT);
        assert_ne!(MONITOR_VERTICES.len() as i32, PARTIAL_VERTEX_COUNT);
    }
}
