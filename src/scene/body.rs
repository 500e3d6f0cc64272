use glam::{Mat4, Vec3};

use super::Material;

/// Persistent bouncing-sphere state, Euler-integrated once per frame with a
/// per-body timestep. Bodies deliberately use different constant timesteps
/// to vary their apparent speed; there is no collision and no containment.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub delta_t: f32,
    pub material: Material,
}

impl KinematicBody {
    pub fn new(position: Vec3, acceleration: Vec3, delta_t: f32, material: Material) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration,
            delta_t,
            material,
        }
    }

    /// Explicit Euler: velocity first, then position from the new velocity.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration * self.delta_t;
        self.position += self.velocity * self.delta_t;
    }

    /// Translate-by-position model transform.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn test_material() -> Material {
        Material::new(Vec4::ONE, Vec4::ONE, Vec4::ONE, 100.0)
    }

    #[test]
    fn one_euler_step_from_rest() {
        let p0 = Vec3::new(-3.0, 2.0, 0.0);
        let acceleration = Vec3::new(3.0, 9.0, 0.0);
        let dt = 0.001;

        let mut body = KinematicBody::new(p0, acceleration, dt, test_material());
        body.integrate();

        assert_eq!(body.velocity, acceleration * dt);
        assert_eq!(body.position, p0 + acceleration * dt * dt);
    }

    #[test]
    fn velocity_accumulates_across_steps() {
        let mut body = KinematicBody::new(
            Vec3::ZERO,
            Vec3::new(0.0, 9.0, 0.0),
            0.01,
            test_material(),
        );

        body.integrate();
        body.integrate();

        assert_eq!(body.velocity, Vec3::new(0.0, 0.18, 0.0));
    }
}
