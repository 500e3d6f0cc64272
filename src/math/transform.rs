use glam::Mat4;

/// Model-view accumulator with explicit save/restore around each independent
/// branch of the scene.
///
/// Matrices are copied by value on `save`, so composing any number of local
/// transforms and then calling `restore` reproduces the pre-save matrix
/// bit-for-bit.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::with_view(Mat4::IDENTITY)
    }

    pub fn with_view(view: Mat4) -> Self {
        Self {
            current: view,
            saved: Vec::new(),
        }
    }

    /// Drop any saved state and start the frame from the view transform.
    pub fn reset(&mut self, view: Mat4) {
        self.saved.clear();
        self.current = view;
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the most recently saved transform. Restoring without a
    /// matching save leaves the current value untouched.
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.pop() {
            self.current = saved;
        }
    }

    /// Right-multiply a local transform onto the current one:
    /// `current = current * local`.
    pub fn compose(&mut self, local: Mat4) {
        self.current = self.current * local;
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Save, compose `local`, run `f`, restore.
    pub fn scoped(&mut self, local: Mat4, f: impl FnOnce(&mut Self)) {
        self.save();
        self.compose(local);
        f(self);
        self.restore();
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn compose_multiplies_on_the_right() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
        let local = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));

        let mut stack = TransformStack::with_view(view);
        stack.compose(local);

        assert_eq!(stack.current(), view * local);
    }

    #[test]
    fn restore_is_bit_exact() {
        let view = Mat4::from_rotation_x(0.3) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let mut stack = TransformStack::with_view(view);
        let before = stack.current().to_cols_array();

        stack.save();
        stack.compose(Mat4::from_rotation_y(1.7));
        stack.compose(Mat4::from_scale(Vec3::splat(0.37)));
        stack.restore();

        assert_eq!(stack.current().to_cols_array(), before);
    }

    #[test]
    fn scoped_restores_after_closure() {
        let mut stack = TransformStack::new();
        let before = stack.current();

        stack.scoped(Mat4::from_translation(Vec3::X), |inner| {
            inner.compose(Mat4::from_scale(Vec3::splat(5.0)));
            assert_ne!(inner.current(), before);
        });

        assert_eq!(stack.current(), before);
    }

    #[test]
    fn restore_without_save_is_a_no_op() {
        let view = Mat4::from_translation(Vec3::Y);
        let mut stack = TransformStack::with_view(view);
        stack.restore();
        assert_eq!(stack.current(), view);
    }
}
