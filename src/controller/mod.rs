// CONTROLLER: Input, transform updates, and the per-frame loop
pub mod input;
pub mod transform_controller;
pub mod frame_loop;

pub use input::{Action, InputEvent, InputProcessor, InputSnapshot, InputState, KeyBindings};
pub use transform_controller::{AxisLimit, AxisRange, MotionConfig, TransformController};
pub use frame_loop::{FpsCounter, FrameClock, FrameLoopContext, FrameTime, TransformUniform};
