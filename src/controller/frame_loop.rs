use std::time::{Duration, Instant};

use crate::controller::input::{InputProcessor, InputSnapshot, InputState};
use crate::controller::transform_controller::TransformController;
use crate::model::{Projection, TransformState};

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub transform: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(projection: &Projection, state: &TransformState) -> Self {
        Self {
            transform: (projection.view_proj() * state.model_matrix()).to_cols_array_2d(),
        }
    }
}

/// Timing of one loop iteration
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Seconds since the previous tick, zero on the first
    pub dt: f32,
    pub frame_index: u64,
}

/// Monotonic clock sampled once per loop iteration
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    max_dt: Duration,
}

impl FrameClock {
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_max_dt(Self::DEFAULT_MAX_DT)
    }

    pub fn with_max_dt(max_dt: Duration) -> Self {
        Self { last: None, frame_index: 0, max_dt }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now`. Long stalls are capped at `max_dt`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).min(self.max_dt),
            None => Duration::ZERO,
        };
        self.last = Some(now);

        let time = FrameTime { dt: dt.as_secs_f32(), frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothed frames-per-second counter, refreshed once a second
#[derive(Debug, Default)]
pub struct FpsCounter {
    pub fps: f32,
    frame_count: u32,
    timer: f32,
}

impl FpsCounter {
    pub fn record(&mut self, dt: f32) {
        self.frame_count += 1;
        self.timer += dt;
        if self.timer >= 1.0 {
            self.fps = self.frame_count as f32 / self.timer;
            self.frame_count = 0;
            self.timer = 0.0;
        }
    }
}

/// Per-demo state carried from one frame to the next
pub struct FrameLoopContext {
    pub transform: TransformState,
    pub controller: TransformController,
    pub projection: Projection,
    pub input_state: InputState,
    pub input_processor: InputProcessor,
    pub clock: FrameClock,
    pub fps: FpsCounter,
    pub last_input: InputSnapshot,
}

impl FrameLoopContext {
    pub fn new(
        controller: TransformController,
        projection: Projection,
        input_processor: InputProcessor,
        clock: FrameClock,
    ) -> Self {
        Self {
            transform: TransformState::new(),
            controller,
            projection,
            input_state: InputState::new(),
            input_processor,
            clock,
            fps: FpsCounter::default(),
            last_input: InputSnapshot::default(),
        }
    }

    /// Sample time and input, advance the transform, and return the uniform to upload
    pub fn update(&mut self) -> (FrameTime, TransformUniform) {
        let time = self.clock.tick();
        self.step(time)
    }

    pub fn step(&mut self, time: FrameTime) -> (FrameTime, TransformUniform) {
        self.fps.record(time.dt);

        let input = self.input_processor.snapshot(&self.input_state);
        let before = self.transform;
        self.controller.update(&mut self.transform, &input, time.dt);

        if before != self.transform && self.transform == TransformState::IDENTITY {
            tracing::debug!(frame = time.frame_index, "transform reset");
        }
        self.last_input = input;

        (time, TransformUniform::new(&self.projection, &self.transform))
    }
}
