use clap::ValueEnum;

use crate::controller::{AxisLimit, AxisRange, MotionConfig};
use crate::model::{Camera, Projection};
use crate::utils::{self, Mesh};

/// The demo programs this crate can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Textured quad moved with the arrow keys
    Quad,
    /// Brick-breaker paddle sliding along the bottom edge
    Paddle,
    /// Textured quad with 3D translation, rotation and scale
    #[value(name = "model3d")]
    Model3d,
    /// Static triangle with interpolated vertex colours
    Triangle,
}

impl DemoKind {
    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::Quad => "quad",
            DemoKind::Paddle => "paddle",
            DemoKind::Model3d => "model3d",
            DemoKind::Triangle => "triangle",
        }
    }
}

/// Everything that distinguishes one demo from another
pub struct Demo {
    pub kind: DemoKind,
    pub title: &'static str,
    pub mesh: Mesh,
    pub motion: MotionConfig,
    pub projection: Projection,
    pub clear_color: wgpu::Color,
    pub textured: bool,
}

impl Demo {
    pub fn new(kind: DemoKind, width: u32, height: u32) -> Self {
        match kind {
            DemoKind::Quad => {
                let mesh = utils::create_quad_mesh();
                let half = mesh.half_extents();
                Self {
                    kind,
                    title: "LearnOpenGL",
                    motion: MotionConfig {
                        move_speed: 0.5,
                        x: AxisLimit::Clamped(AxisRange::VIEWPORT.inset(half.x)),
                        y: AxisLimit::Clamped(AxisRange::VIEWPORT.inset(half.y)),
                        rotate: false,
                        scale: AxisLimit::Locked,
                        reset: false,
                        ..MotionConfig::default()
                    },
                    mesh,
                    projection: Projection::Flat,
                    clear_color: wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 },
                    textured: true,
                }
            }
            DemoKind::Paddle => {
                let mesh = utils::create_paddle_mesh();
                let half = mesh.half_extents();
                Self {
                    kind,
                    title: "Brick Breaker",
                    motion: MotionConfig {
                        move_speed: 0.5,
                        x: AxisLimit::Clamped(AxisRange::VIEWPORT.inset(half.x)),
                        y: AxisLimit::Locked,
                        rotate: false,
                        scale: AxisLimit::Locked,
                        reset: false,
                        ..MotionConfig::default()
                    },
                    mesh,
                    projection: Projection::Flat,
                    clear_color: wgpu::Color::BLACK,
                    textured: false,
                }
            }
            DemoKind::Model3d => Self {
                kind,
                title: "Movement3D",
                mesh: utils::create_model_mesh(),
                // origin clamped to the unit box, the mesh extent is not considered
                motion: MotionConfig {
                    move_speed: 2.0,
                    rotation_speed: 90.0,
                    scale_speed: 0.5,
                    ..MotionConfig::default()
                },
                projection: Projection::Perspective(Camera::new(width, height)),
                clear_color: wgpu::Color { r: 0.2, g: 0.3, b: 0.3, a: 1.0 },
                textured: true,
            },
            DemoKind::Triangle => Self {
                kind,
                title: "Interpolated Triangle",
                mesh: utils::create_triangle_mesh(),
                motion: MotionConfig::fixed(),
                projection: Projection::Flat,
                clear_color: wgpu::Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 },
                textured: false,
            },
        }
    }

    /// Control hints for the channels this demo lets the user drive
    pub fn controls(&self) -> Vec<&'static str> {
        let mut lines = Vec::new();
        match (self.motion.x.is_active(), self.motion.y.is_active()) {
            (true, true) => lines.push("Arrows - Move"),
            (true, false) => lines.push("Left/Right - Move"),
            (false, true) => lines.push("Up/Down - Move"),
            (false, false) => {}
        }
        if self.motion.rotate {
            lines.push("W/S - Tilt");
            lines.push("A/D - Rotate");
        }
        if self.motion.scale.is_active() {
            lines.push("=/- - Scale");
        }
        if self.motion.reset {
            lines.push("R - Reset");
        }
        lines.push("F3 - Toggle overlay");
        lines.push("Esc - Quit");
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamped(limit: AxisLimit) -> AxisRange {
        match limit {
            AxisLimit::Clamped(range) => range,
            other => panic!("expected a clamped axis, got {other:?}"),
        }
    }

    #[test]
    fn test_quad_bounds_follow_half_extent() {
        let demo = Demo::new(DemoKind::Quad, 800, 600);
        let x = clamped(demo.motion.x);
        let y = clamped(demo.motion.y);
        assert!((x.max - 0.9).abs() < 1e-6 && (x.min + 0.9).abs() < 1e-6);
        assert!((y.max - 0.9).abs() < 1e-6 && (y.min + 0.9).abs() < 1e-6);
        assert_eq!(demo.motion.scale, AxisLimit::Locked);
    }

    #[test]
    fn test_paddle_only_slides_horizontally() {
        let demo = Demo::new(DemoKind::Paddle, 800, 600);
        let x = clamped(demo.motion.x);
        assert!((x.max - 0.85).abs() < 1e-6);
        assert_eq!(demo.motion.y, AxisLimit::Locked);
        assert!(!demo.motion.rotate);
    }

    #[test]
    fn test_model3d_limits() {
        let demo = Demo::new(DemoKind::Model3d, 800, 600);
        assert_eq!(clamped(demo.motion.x), AxisRange::VIEWPORT);
        assert_eq!(clamped(demo.motion.scale), AxisRange::new(0.1, 3.0));
        assert_eq!(demo.motion.move_speed, 2.0);
        assert_eq!(demo.motion.rotation_speed, 90.0);
        assert!(demo.motion.reset);
        assert!(matches!(demo.projection, Projection::Perspective(_)));
    }

    #[test]
    fn test_triangle_is_fixed() {
        let demo = Demo::new(DemoKind::Triangle, 800, 600);
        assert_eq!(demo.motion, MotionConfig::fixed());
        assert_eq!(demo.controls(), vec!["F3 - Toggle overlay", "Esc - Quit"]);
    }

    #[test]
    fn test_controls_listed_for_active_channels() {
        let controls = Demo::new(DemoKind::Model3d, 800, 600).controls();
        assert!(controls.contains(&"=/- - Scale"));
        assert!(controls.contains(&"R - Reset"));
        let controls = Demo::new(DemoKind::Paddle, 800, 600).controls();
        assert_eq!(controls[0], "Left/Right - Move");
    }
}
