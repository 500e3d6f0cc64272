mod body;
mod material;

pub use body::KinematicBody;
pub use material::{Light, LightingProducts, Material};

use glam::{Mat4, Vec3, Vec4};

use crate::input::{Axis, InputAction, AXIS_BUMP_DEGREES, IDLE_SPIN_DEGREES};
use crate::math::TransformStack;
use crate::mesh::PrimitiveKind;
use crate::traits::{DrawMode, MeshRenderer};

/// Camera offset; the scene is viewed from +Z looking down -Z.
const VIEWER_POSITION: Vec3 = Vec3::new(0.0, 0.0, 2.0);

/// Submissions one frame makes: the scripted figure plus the bodies.
pub const FIGURE_DRAWS: usize = 13;
pub const BODY_COUNT: usize = 10;
pub const DRAWS_PER_FRAME: usize = FIGURE_DRAWS + BODY_COUNT;

/// All ten bodies share one acceleration; their timesteps differ.
const BODY_ACCELERATION: Vec3 = Vec3::new(3.0, 9.0, 0.0);
const BODY_TIMESTEPS: [f32; BODY_COUNT] = [
    0.001, 0.003, 0.005, 0.007, 0.0001, 0.0003, 0.0005, 0.0009, 0.0009, 0.0009,
];

const fn mat(ambient: [f32; 4], diffuse: [f32; 4], specular: [f32; 4]) -> Material {
    Material::new(
        Vec4::from_array(ambient),
        Vec4::from_array(diffuse),
        Vec4::from_array(specular),
        100.0,
    )
}

// One material per distinct figure part. The component values are scripted
// content carried over from the scene's layout table.
const REAR_WHEEL: Material = mat(
    [0.2, 0.1, 1.0, 1.0],
    [1.0, 0.5, 0.5, 1.0],
    [1.0, 0.5, 0.5, 1.0],
);
const FRONT_WHEEL: Material = mat(
    [0.4, 0.3, 1.0, 1.0],
    [1.0, 0.5, 0.5, 1.0],
    [1.0, 0.5, 0.5, 1.0],
);
const HANDLEBAR_CROSS: Material = mat(
    [1.0, 0.411765, 0.705882, 1.0],
    [0.690196, 0.188235, 0.376471, 1.0],
    [0.6, 0.196078, 0.0, 1.0],
);
const HANDLEBAR_STEM: Material = mat(
    [1.0, 0.2, 1.0, 1.0],
    [1.0, 0.5, -0.5, 1.0],
    [1.0, 0.5, 0.5, 1.0],
);
const FRAME_BEAM: Material = mat(
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 0.8, 1.0],
    [1.0, 1.0, 0.8, 2.0],
);
const ARM_BEAM: Material = mat(
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.8, 0.0, 1.0],
    [1.0, 0.8, 0.0, 1.0],
);
const HEAD: Material = mat(
    [0.2, 0.3, 0.11222, 1.0],
    [0.803922, 0.803922, 0.756863, 1.0],
    [0.933333, 0.898039, 0.870588, 1.0],
);
const ORNAMENT: Material = mat(
    [1.0, 0.3, 2.0, 1.0],
    [0.3, 1.0, 1.0, 1.0],
    [0.5, -0.5, 0.0, 1.0],
);
const TORSO: Material = mat(
    [0.7, 1.7, 1.0, 1.0],
    [1.0, 0.7, 0.7, 1.0],
    [2.0, 0.7, 1.7, 1.0],
);
const LEG: Material = mat(
    [0.7, 0.7, 1.0, 2.0],
    [1.0, 1.7, 0.7, 1.0],
    [1.0, 0.7, 0.7, 1.0],
);

const BALL_MATERIALS: [Material; BODY_COUNT] = [
    mat(
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
    ),
    mat(
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
    ),
    mat(
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
    ),
    mat(
        [0.7, 0.2, 0.5, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
    ),
    mat(
        [0.3, 0.8, 0.3, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
    ),
    mat(
        [0.5, 0.5, 0.8, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [0.5, 0.0, 0.0, 1.0],
    ),
    mat(
        [0.1, 0.5, 0.3, 1.0],
        [0.7, 0.8, 0.3, 1.0],
        [1.0, 0.8, 0.0, 1.0],
    ),
    mat(
        [0.1, 0.3, 0.6, 1.0],
        [0.3, 0.2, 0.5, 1.0],
        [0.2, 0.1, 0.8, 1.0],
    ),
    mat(
        [0.1, 0.2, 0.3, 1.0],
        [0.1, 0.5, 0.9, 1.0],
        [0.4, 0.3, 0.6, 1.0],
    ),
    mat(
        [0.6, 1.0, 0.4, 1.0],
        [0.9, 0.1, 0.6, 1.0],
        [0.4, 0.3, 0.6, 1.0],
    ),
];

/// Beam dimensions shared by the frame tube, deck and arm parts.
const BEAM_HEIGHT: f32 = 5.0;
const BEAM_WIDTH: f32 = 0.5;

fn wrap_degrees(mut angle: f32) -> f32 {
    if angle > 360.0 {
        angle -= 360.0;
    }
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Translate-then-scale local transform, translate outermost.
fn place(translation: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(translation) * Mat4::from_scale(scale)
}

/// A unit cube stretched into a vertical beam sitting on its base.
fn vertical_beam(height: f32, width: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.5 * height, 0.0))
        * Mat4::from_scale(Vec3::new(width, height, width))
}

/// All mutable scene state: rotation angles, the active axis, the kinematic
/// bodies and the transform accumulator. Single-writer; the frame loop is
/// the only caller.
pub struct Scene {
    /// Rotation angles in degrees, one per axis, wrapped at 360.
    pub angles: [f32; 3],
    pub active_axis: Axis,
    /// False once a quit action has been handled.
    pub running: bool,
    bodies: Vec<KinematicBody>,
    stack: TransformStack,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            angles: [0.0; 3],
            active_axis: Axis::X,
            running: true,
            bodies: default_bodies(),
            stack: TransformStack::new(),
        }
    }

    pub fn bodies(&self) -> &[KinematicBody] {
        &self.bodies
    }

    /// Apply one discrete user action.
    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::BumpAxis(axis) => {
                let angle = &mut self.angles[axis.index()];
                *angle = wrap_degrees(*angle + AXIS_BUMP_DEGREES);
            }
            InputAction::SelectAxis(axis) => self.active_axis = axis,
            InputAction::BumpActive(degrees) => {
                let angle = &mut self.angles[self.active_axis.index()];
                *angle = wrap_degrees(*angle + degrees);
            }
            InputAction::Quit => self.running = false,
        }
    }

    /// Idle tick: advance the autonomous Z spin.
    pub fn tick(&mut self) {
        let z = &mut self.angles[Axis::Z.index()];
        *z = wrap_degrees(*z + IDLE_SPIN_DEGREES);
    }

    /// Integrate every kinematic body by its own timestep.
    pub fn update(&mut self) {
        for body in &mut self.bodies {
            body.integrate();
        }
    }

    fn view_transform(&self) -> Mat4 {
        Mat4::from_translation(-VIEWER_POSITION)
            * Mat4::from_rotation_x(self.angles[0].to_radians())
            * Mat4::from_rotation_y(self.angles[1].to_radians())
            * Mat4::from_rotation_z(self.angles[2].to_radians())
    }

    /// Assemble and submit one frame: reset the transform accumulator to the
    /// view transform, draw the figure, then the bodies. Every drawable is
    /// transient; nothing is retained between frames.
    pub fn render(&mut self, renderer: &mut dyn MeshRenderer) {
        self.stack.reset(self.view_transform());

        assemble_figure(&mut self.stack, renderer);

        for body in &self.bodies {
            self.stack.scoped(body.transform(), |stack| {
                renderer.draw_mesh(
                    PrimitiveKind::Sphere,
                    stack.current(),
                    &body.material,
                    DrawMode::Lines,
                );
            });
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

fn default_bodies() -> Vec<KinematicBody> {
    BODY_TIMESTEPS
        .iter()
        .zip(BALL_MATERIALS)
        .enumerate()
        .map(|(i, (&delta_t, material))| {
            let start = if i == 0 {
                Vec3::new(-3.0, 2.0, 0.0)
            } else {
                Vec3::new(-3.0, 1.0, 0.0)
            };
            KinematicBody::new(start, BODY_ACCELERATION, delta_t, material)
        })
        .collect()
}

/// One scoped compose+draw call for an independent figure part.
fn part(
    stack: &mut TransformStack,
    renderer: &mut dyn MeshRenderer,
    kind: PrimitiveKind,
    local: Mat4,
    material: &Material,
    mode: DrawMode,
) {
    stack.scoped(local, |stack| {
        renderer.draw_mesh(kind, stack.current(), material, mode);
    });
}

/// A beam part: the shared beam transform composed inside the part's own
/// placement, exercising a second composition level.
fn beam_part(
    stack: &mut TransformStack,
    renderer: &mut dyn MeshRenderer,
    placement: Mat4,
    material: &Material,
) {
    stack.scoped(placement, |stack| {
        stack.compose(vertical_beam(BEAM_HEIGHT, BEAM_WIDTH));
        renderer.draw_mesh(
            PrimitiveKind::Cube,
            stack.current(),
            material,
            DrawMode::Triangles,
        );
    });
}

/// The scripted bicycle-and-rider layout: a fixed sequence of scoped
/// compose+draw calls, each independent branch saved and restored around its
/// local transform.
fn assemble_figure(stack: &mut TransformStack, renderer: &mut dyn MeshRenderer) {
    // Wheels.
    part(
        stack,
        renderer,
        PrimitiveKind::Sphere,
        place(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(0.7, 0.7, 1.0)),
        &REAR_WHEEL,
        DrawMode::Lines,
    );
    part(
        stack,
        renderer,
        PrimitiveKind::Sphere,
        place(Vec3::new(-3.0, 3.0, 0.0), Vec3::new(0.7, 0.7, 1.0)),
        &FRONT_WHEEL,
        DrawMode::Lines,
    );

    // Handlebar lobes.
    part(
        stack,
        renderer,
        PrimitiveKind::Sphere,
        place(Vec3::new(-0.5, 0.1, 0.0), Vec3::new(1.5, 0.3, 1.0)),
        &HANDLEBAR_CROSS,
        DrawMode::Lines,
    );
    part(
        stack,
        renderer,
        PrimitiveKind::Sphere,
        place(Vec3::new(-0.5, 0.1, 0.0), Vec3::new(0.3, 1.5, 1.0)),
        &HANDLEBAR_STEM,
        DrawMode::Lines,
    );

    // Frame tube and deck.
    beam_part(
        stack,
        renderer,
        place(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(0.3, 0.7, 1.0)),
        &FRAME_BEAM,
    );
    beam_part(
        stack,
        renderer,
        place(Vec3::new(-2.0, -0.1, 0.0), Vec3::new(5.0, 0.05, 2.0)),
        &FRAME_BEAM,
    );

    // Rider arms.
    beam_part(
        stack,
        renderer,
        place(Vec3::new(-0.5, 1.0, 0.0), Vec3::new(0.5, 0.3, 1.0)),
        &ARM_BEAM,
    );
    beam_part(
        stack,
        renderer,
        place(Vec3::new(-0.1, 0.8, 0.0), Vec3::new(0.5, 0.3, 1.0)),
        &ARM_BEAM,
    );

    // Rider head and its wireframe ornament.
    part(
        stack,
        renderer,
        PrimitiveKind::Cone,
        place(Vec3::new(1.0, 2.2, 0.0), Vec3::ONE),
        &HEAD,
        DrawMode::Triangles,
    );
    part(
        stack,
        renderer,
        PrimitiveKind::Sphere,
        place(Vec3::new(1.3, 2.1, 0.0), Vec3::new(1.3, 1.3, 1.0)),
        &ORNAMENT,
        DrawMode::Lines,
    );

    // Torso and legs, rotated a quarter turn about Y.
    let quarter_turn = Mat4::from_rotation_y(90.0_f32.to_radians());
    part(
        stack,
        renderer,
        PrimitiveKind::Cube,
        Mat4::from_translation(Vec3::new(-0.8, 2.3, 0.0))
            * quarter_turn
            * Mat4::from_scale(Vec3::new(0.5, 1.0, 2.0)),
        &TORSO,
        DrawMode::Triangles,
    );
    part(
        stack,
        renderer,
        PrimitiveKind::Cube,
        Mat4::from_translation(Vec3::new(-2.1, 2.5, 0.0))
            * quarter_turn
            * Mat4::from_scale(Vec3::new(0.2, 0.3, 2.0)),
        &LEG,
        DrawMode::Triangles,
    );
    part(
        stack,
        renderer,
        PrimitiveKind::Cube,
        Mat4::from_translation(Vec3::new(-2.1, 2.0, 0.0))
            * quarter_turn
            * Mat4::from_scale(Vec3::new(0.2, 0.3, 2.0)),
        &LEG,
        DrawMode::Triangles,
    );
}
