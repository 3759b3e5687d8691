use nalgebra_glm as glm;

use super::camera::Camera;
use super::geometry::{CUBE_VERTEX_COUNT, PARTIAL_VERTEX_COUNT, PLANE_VERTEX_COUNT};

pub const LIGHT_POSITION: [f32; 3] = [1.0, 2.0, 2.0];

const PLANE_OFFSET: [f32; 3] = [0.0, -0.1, 0.0];
pub const CUBE_COUNT: usize = 5;
const CUBE_SPACING: f32 = 0.5;
const CUBE_ROW_START: [f32; 3] = [-0.5, 0.1, -0.5];
const CUP_OFFSET: [f32; 3] = [0.0, -0.1, 1.0];
const MONITOR_OFFSET: [f32; 3] = [0.0, 0.0, -1.0];

/// GPU mesh a draw reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshId {
    Plane,
    Cube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneObject {
    Plane,
    Cube(usize),
    Cup,
    Monitor,
}

#[derive(Debug, Clone)]
pub struct DrawCall {
    pub object: SceneObject,
    pub mesh: MeshId,
    pub vertex_count: i32,
    pub model: glm::Mat4,
}

/// Everything the GL submission needs for one frame.
#[derive(Debug, Clone)]
pub struct FramePlan {
    pub projection: glm::Mat4,
    pub view: glm::Mat4,
    pub light_position: glm::Vec3,
    pub view_position: glm::Vec3,
    pub draws: Vec<DrawCall>,
}

fn translation(offset: [f32; 3]) -> glm::Mat4 {
    glm::translation(&glm::make_vec3(&offset))
}

pub fn cube_offset(index: usize) -> [f32; 3] {
    [
        CUBE_ROW_START[0] + index as f32 * CUBE_SPACING,
        CUBE_ROW_START[1],
        CUBE_ROW_START[2],
    ]
}

/// Build the draw list: plane, the cube row, cup, monitor. Occlusion is left
/// to the depth test.
pub fn build_frame(camera: &Camera, projection: &glm::Mat4) -> FramePlan {
    let mut draws = Vec::with_capacity(CUBE_COUNT + 3);

    draws.push(DrawCall {
        object: SceneObject::Plane,
        mesh: MeshId::Plane,
        vertex_count: PLANE_VERTEX_COUNT,
        model: translation(PLANE_OFFSET),
    });

    for i in 0..CUBE_COUNT {
        draws.push(DrawCall {
            object: SceneObject::Cube(i),
            mesh: MeshId::Cube,
            vertex_count: CUBE_VERTEX_COUNT,
            model: translation(cube_offset(i)),
        });
    }

    // Cup and monitor have no meshes of their own and draw a slice of the cube.
    draws.push(DrawCall {
        object: SceneObject::Cup,
        mesh: MeshId::Cube,
        vertex_count: PARTIAL_VERTEX_COUNT,
        model: translation(CUP_OFFSET),
    });
    draws.push(DrawCall {
        object: SceneObject::Monitor,
        mesh: MeshId::Cube,
        vertex_count: PARTIAL_VERTEX_COUNT,
        model: translation(MONITOR_OFFSET),
    });

    FramePlan {
        projection: *projection,
        view: camera.view_matrix(),
        light_position: glm::make_vec3(&LIGHT_POSITION),
        view_position: camera.position,
        draws,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FramePlan {
        let camera = Camera::default();
        let projection = camera.projection_matrix(800.0 / 600.0);
        build_frame(&camera, &projection)
    }

    fn offset_of(model: &glm::Mat4) -> [f32; 3] {
        [model[(0, 3)], model[(1, 3)], model[(2, 3)]]
    }

    #[test]
    fn draw_order_is_fixed() {
        let objects: Vec<SceneObject> = plan().draws.iter().map(|d| d.object).collect();
        assert_eq!(
            objects,
            vec![
                SceneObject::Plane,
                SceneObject::Cube(0),
                SceneObject::Cube(1),
                SceneObject::Cube(2),
                SceneObject::Cube(3),
                SceneObject::Cube(4),
                SceneObject::Cup,
                SceneObject::Monitor,
            ]
        );
    }

    #[test]
    fn plane_precedes_every_cube_mesh_draw() {
        let plan = plan();
        assert_eq!(plan.draws[0].mesh, MeshId::Plane);
        assert!(plan.draws[1..].iter().all(|d| d.mesh == MeshId::Cube));
    }

    #[test]
    fn vertex_counts() {
        let counts: Vec<i32> = plan().draws.iter().map(|d| d.vertex_count).collect();
        assert_eq!(counts, vec![6, 36, 36, 36, 36, 36, 18, 18]);
    }

    #[test]
    fn model_translations() {
        let plan = plan();
        let offsets: Vec<[f32; 3]> = plan.draws.iter().map(|d| offset_of(&d.model)).collect();
        assert_eq!(offsets[0], [0.0, -0.1, 0.0]);
        assert_eq!(offsets[1], [-0.5, 0.1, -0.5]);
        assert_eq!(offsets[3], [0.5, 0.1, -0.5]);
        assert_eq!(offsets[5], [1.5, 0.1, -0.5]);
        assert_eq!(offsets[6], [0.0, -0.1, 1.0]);
        assert_eq!(offsets[7], [0.0, 0.0, -1.0]);
    }

    #[test]
    fn uniforms_follow_camera() {
        let mut camera = Camera::default();
        camera.position = glm::vec3(2.0, 1.0, -4.0);
        let projection = camera.projection_matrix(1.0);
        let plan = build_frame(&camera, &projection);
        assert_eq!(plan.view_position, camera.position);
        assert_eq!(plan.view, camera.view_matrix());
        assert_eq!(plan.projection, projection);
        assert_eq!(plan.light_position, glm::vec3(1.0, 2.0, 2.0));
    }
}
