use glam::{Mat4, Vec3};

/// Fixed perspective camera looking down -Z from a set distance
pub struct Camera {
    pub eye_offset: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye_offset: Vec3::new(0.0, 0.0, -3.0),
            fov_y: 45f32.to_radians(),
            aspect: aspect_ratio(width, height),
            z_near: 0.1,
            z_far: 100.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) { self.aspect = aspect_ratio(width, height); }

    pub fn view(&self) -> Mat4 { Mat4::from_translation(self.eye_offset) }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * self.view()
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// How a demo maps model space onto the screen
pub enum Projection {
    /// Model space is clip space; the viewport spans [-1, 1] on both axes
    Flat,
    Perspective(Camera),
}

impl Projection {
    pub fn view_proj(&self) -> Mat4 {
        match self {
            Projection::Flat => Mat4::IDENTITY,
            Projection::Perspective(camera) => camera.view_proj(),
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if let Projection::Perspective(camera) = self {
            camera.set_aspect(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_is_identity() {
        assert_eq!(Projection::Flat.view_proj(), Mat4::IDENTITY);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let cam = Camera::new(800, 600);
        let clip = cam.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_zero_height_does_not_divide_by_zero() {
        let mut projection = Projection::Perspective(Camera::new(800, 600));
        projection.set_aspect(800, 0);
        assert!(projection.view_proj().is_finite());
    }
}
