//! CorePlugin owns the frame clock that feeds explicit delta time to gameplay systems.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugFrameTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugFrameTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Per-frame delta handed to the camera and controller.
///
/// Gameplay systems read their delta from here instead of `Time` so the frame
/// step can be scaled or driven by hand in tests.
#[derive(Resource, Debug)]
pub struct FrameClock {
    time_scale: f32,
    delta: Duration,
    frames: u64,
}

impl FrameClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            delta: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Scaled delta of the current frame, in seconds.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Number of frames ticked so far.
    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances the clock by one frame of `real_delta`.
    pub fn tick(&mut self, real_delta: Duration) {
        self.delta = real_delta.mul_f32(self.time_scale);
        self.frames = self.frames.saturating_add(1);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers the frame clock.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    /// Creates a CorePlugin with the provided time-scale multiplier.
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FrameClock::new(self.time_scale))
            .add_systems(Startup, log_startup_time_scale)
            .add_systems(PreUpdate, tick_frame_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugFrameTimer::default())
                .add_systems(Update, log_frame_clock);
        }
    }
}

fn tick_frame_clock(mut clock: ResMut<FrameClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_time_scale(clock: Res<FrameClock>) {
    info!(
        "CorePlugin initialised with time scale: {:.3}",
        clock.time_scale()
    );
}

#[cfg(feature = "core_debug")]
fn log_frame_clock(mut timer: ResMut<DebugFrameTimer>, clock: Res<FrameClock>, time: Res<Time>) {
    if timer.timer.tick(time.delta()).just_finished() {
        info!(
            target: "core_debug",
            "Frame {} | scale: {:.3} | scaled dt: {:.4}s",
            clock.frames(),
            clock.time_scale(),
            clock.delta_secs(),
        );
    }
}
