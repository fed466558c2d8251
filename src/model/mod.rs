// MODEL: Transform state, camera and demo definitions
pub mod transform;
pub mod camera;
pub mod demo;

pub use transform::TransformState;
pub use camera::{Camera, Projection};
pub use demo::{Demo, DemoKind};
