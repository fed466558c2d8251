use glam::{Mat4, Vec3};

/// Position, rotation (degrees) and uniform scale of the demo object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Model matrix: translate * rotate(x, y, z) * scale.
    ///
    /// Scale is applied to the vertex first and translation last. Swapping the
    /// order moves the object by a scaled offset, so keep it as is.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        let state = TransformState::new();
        assert!(state.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_scale_before_translate() {
        let state = TransformState {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Vec3::ZERO,
            scale: 2.0,
        };
        let p = state.model_matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        // scaled to 2, then moved by 1
        assert!((p - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotation_before_translate() {
        let state = TransformState {
            position: Vec3::new(0.5, 0.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, 90.0),
            scale: 1.0,
        };
        let p = state.model_matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.5, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_reset() {
        let mut state = TransformState {
            position: Vec3::new(0.3, -0.7, 2.0),
            rotation: Vec3::new(720.0, -45.0, 10.0),
            scale: 2.5,
        };
        state.reset();
        assert_eq!(state, TransformState::IDENTITY);
    }
}
