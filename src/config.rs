use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::controller::MotionConfig;
use crate::model::DemoKind;

/// Shortest frame step `--max-frame-delta` may cap to
pub const MIN_FRAME_DELTA: Duration = Duration::from_millis(1);

fn parse_speed(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("speed must be a finite number, got {s}"))
    }
}

fn parse_frame_delta(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("frame delta must be a positive number of seconds, got {s}"))
    }
}

/// Command-line options for a demo run
#[derive(Debug, Clone, Parser)]
#[command(name = "quadmotion", version, about = "Keyboard-driven transform demos on wgpu")]
pub struct DemoOptions {
    /// Which demo to run
    #[arg(value_enum)]
    pub demo: DemoKind,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Image used by textured demos; a checkerboard is drawn if it cannot be read
    #[arg(long, default_value = "texture.jpg")]
    pub texture: PathBuf,

    /// Override the translation speed (units per second)
    #[arg(long, value_parser = parse_speed)]
    pub move_speed: Option<f32>,

    /// Override the rotation speed (degrees per second)
    #[arg(long, value_parser = parse_speed)]
    pub rotation_speed: Option<f32>,

    /// Override the scaling speed (units per second)
    #[arg(long, value_parser = parse_speed)]
    pub scale_speed: Option<f32>,

    /// Longest frame step in seconds; longer stalls are shortened to this
    #[arg(long, default_value_t = 0.25, value_parser = parse_frame_delta)]
    pub max_frame_delta: f32,
}

impl DemoOptions {
    /// Apply speed overrides on top of a demo's preset.
    /// Negative speeds become 0; non-finite ones are ignored.
    pub fn apply(&self, motion: &mut MotionConfig) {
        let overrides = [
            (self.move_speed, &mut motion.move_speed),
            (self.rotation_speed, &mut motion.rotation_speed),
            (self.scale_speed, &mut motion.scale_speed),
        ];
        for (requested, speed) in overrides {
            match requested {
                Some(value) if value.is_finite() => *speed = value.max(0.0),
                Some(value) => tracing::warn!(value, "ignoring non-finite speed override"),
                None => {}
            }
        }
    }

    /// Cap on a single frame step, never shorter than [`MIN_FRAME_DELTA`]
    pub fn max_frame_delta(&self) -> Duration {
        if self.max_frame_delta.is_nan() || self.max_frame_delta <= 0.0 {
            tracing::warn!(value = self.max_frame_delta, "frame delta cap must be positive, using the minimum");
            return MIN_FRAME_DELTA;
        }
        Duration::try_from_secs_f32(self.max_frame_delta)
            .map_or(Duration::from_secs(1), |cap| cap.max(MIN_FRAME_DELTA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DemoOptions::try_parse_from(["quadmotion", "quad"]).unwrap();
        assert_eq!(options.demo, DemoKind::Quad);
        assert_eq!((options.width, options.height), (800, 600));
        assert_eq!(options.texture, PathBuf::from("texture.jpg"));
        assert_eq!(options.max_frame_delta(), Duration::from_millis(250));

        let mut motion = MotionConfig::default();
        options.apply(&mut motion);
        assert_eq!(motion, MotionConfig::default());
    }

    #[test]
    fn test_speed_overrides() {
        let options = DemoOptions::try_parse_from([
            "quadmotion", "model3d", "--move-speed", "1.5", "--rotation-speed", "45", "--scale-speed=-2",
        ])
        .unwrap();
        let mut motion = MotionConfig::default();
        options.apply(&mut motion);
        assert_eq!(motion.move_speed, 1.5);
        assert_eq!(motion.rotation_speed, 45.0);
        assert_eq!(motion.scale_speed, 0.0);
    }

    #[test]
    fn test_non_finite_speeds_rejected() {
        for value in ["inf", "-inf", "NaN"] {
            let flag = format!("--move-speed={value}");
            assert!(DemoOptions::try_parse_from(["quadmotion", "quad", flag.as_str()]).is_err());
        }
    }

    #[test]
    fn test_non_finite_override_keeps_preset() {
        let options = DemoOptions {
            move_speed: Some(f32::INFINITY),
            scale_speed: Some(f32::NAN),
            ..DemoOptions::try_parse_from(["quadmotion", "quad"]).unwrap()
        };
        let mut motion = MotionConfig::default();
        options.apply(&mut motion);
        assert_eq!(motion, MotionConfig::default());
    }

    #[test]
    fn test_frame_delta_must_be_positive() {
        for value in ["0", "-1", "NaN", "inf"] {
            let flag = format!("--max-frame-delta={value}");
            assert!(DemoOptions::try_parse_from(["quadmotion", "quad", flag.as_str()]).is_err());
        }
        let options = DemoOptions::try_parse_from(["quadmotion", "quad", "--max-frame-delta", "0.5"]).unwrap();
        assert_eq!(options.max_frame_delta(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_frame_delta_uses_minimum() {
        let mut options = DemoOptions::try_parse_from(["quadmotion", "quad"]).unwrap();
        for value in [0.0, -1.0, f32::NAN, 1e-9] {
            options.max_frame_delta = value;
            assert_eq!(options.max_frame_delta(), MIN_FRAME_DELTA);
        }
    }

    #[test]
    fn test_unknown_demo_rejected() {
        assert!(DemoOptions::try_parse_from(["quadmotion", "cube"]).is_err());
    }

    #[test]
    fn test_kebab_case_demo_names() {
        let options = DemoOptions::try_parse_from(["quadmotion", "model3d"]).unwrap();
        assert_eq!(options.demo, DemoKind::Model3d);
        assert_eq!(options.demo.name(), "model3d");
    }
}
