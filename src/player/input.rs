//! Per-frame input sampling for the player controller.
use bevy::{ecs::message::MessageReader, input::mouse::MouseMotion, prelude::*};

use crate::{core::plugin::FrameClock, player::config::InputSettings};

const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const BACK_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];

/// Keyboard axis that eases toward the held direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualAxis {
    value: f32,
}

impl VirtualAxis {
    #[cfg(test)]
    pub fn at(value: f32) -> Self {
        Self {
            value: value.clamp(-1.0, 1.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advances the axis toward `raw` (-1, 0 or 1).
    pub fn step(&mut self, raw: f32, delta_secs: f32, settings: &InputSettings) {
        if raw != 0.0 {
            if settings.snap && self.value != 0.0 && raw.signum() != self.value.signum() {
                self.value = 0.0;
            }
            self.value = (self.value + raw * settings.sensitivity * delta_secs).clamp(-1.0, 1.0);
        } else {
            let fall = settings.gravity * delta_secs;
            self.value = if self.value.abs() <= fall {
                0.0
            } else {
                self.value - fall * self.value.signum()
            };
        }
    }
}

/// Input values the controller consumes this frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameInput {
    pub horizontal: VirtualAxis,
    pub vertical: VirtualAxis,
    /// Raw horizontal mouse delta, scaled but unsmoothed.
    pub mouse_x: f32,
}

impl FrameInput {
    pub fn h(&self) -> f32 {
        self.horizontal.value()
    }

    pub fn v(&self) -> f32 {
        self.vertical.value()
    }
}

fn raw_axis(keyboard: &ButtonInput<KeyCode>, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
    let mut raw = 0.0;
    if keyboard.any_pressed(positive.iter().copied()) {
        raw += 1.0;
    }
    if keyboard.any_pressed(negative.iter().copied()) {
        raw -= 1.0;
    }
    raw
}

/// Samples keyboard and mouse into `FrameInput`.
///
/// Mouse motion is dropped while the pointer is over a HUD button.
pub fn collect_frame_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut motion_events: MessageReader<MouseMotion>,
    interactions: Query<&Interaction>,
    clock: Res<FrameClock>,
    settings: Res<InputSettings>,
    mut input: ResMut<FrameInput>,
) {
    let delta_secs = clock.delta_secs();

    let horizontal = raw_axis(&keyboard, &RIGHT_KEYS, &LEFT_KEYS);
    let vertical = raw_axis(&keyboard, &FORWARD_KEYS, &BACK_KEYS);
    input.horizontal.step(horizontal, delta_secs, &settings);
    input.vertical.step(vertical, delta_secs, &settings);

    let mouse_dx: f32 = motion_events.read().map(|ev| ev.delta.x).sum();
    let over_hud = interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None);
    input.mouse_x = if over_hud {
        0.0
    } else {
        mouse_dx * settings.mouse_sensitivity
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const EPS: f32 = 1e-5;

    #[test]
    fn axis_reaches_full_after_one_over_sensitivity() {
        let settings = InputSettings::default();
        let mut axis = VirtualAxis::default();

        for _ in 0..10 {
            axis.step(1.0, 1.0 / 30.0, &settings);
        }
        assert!((axis.value() - 1.0).abs() < EPS);

        axis.step(1.0, 0.5, &settings);
        assert_eq!(axis.value(), 1.0);
    }

    #[test]
    fn axis_falls_back_under_gravity() {
        let settings = InputSettings::default();
        let mut axis = VirtualAxis::default();
        axis.step(1.0, 1.0, &settings);

        axis.step(0.0, 0.1, &settings);
        assert!((axis.value() - 0.7).abs() < EPS);

        axis.step(0.0, 1.0, &settings);
        assert_eq!(axis.value(), 0.0);
    }

    #[test]
    fn axis_snaps_on_reversal() {
        let settings = InputSettings::default();
        let mut axis = VirtualAxis::default();
        axis.step(1.0, 1.0, &settings);

        axis.step(-1.0, 0.1, &settings);
        assert!((axis.value() + 0.3).abs() < EPS);
    }

    #[test]
    fn axis_without_snap_eases_through_zero() {
        let settings = InputSettings {
            snap: false,
            ..Default::default()
        };
        let mut axis = VirtualAxis::default();
        axis.step(1.0, 1.0, &settings);

        axis.step(-1.0, 0.1, &settings);
        assert!((axis.value() - 0.7).abs() < EPS);
    }

    #[test]
    fn collects_keyboard_and_mouse() {
        let mut app = App::new();
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_millis(100));

        app.insert_resource(clock)
            .init_resource::<InputSettings>()
            .init_resource::<FrameInput>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_message::<MouseMotion>()
            .add_systems(Update, collect_frame_input);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.world_mut().write_message(MouseMotion {
            delta: Vec2::new(12.0, -4.0),
        });
        app.world_mut().write_message(MouseMotion {
            delta: Vec2::new(3.0, 0.0),
        });

        app.update();

        let input = app.world().resource::<FrameInput>();
        assert!((input.v() - 0.3).abs() < EPS);
        assert_eq!(input.h(), 0.0);
        assert!((input.mouse_x - 1.5).abs() < EPS);
    }

    #[test]
    fn mouse_motion_ignored_over_hud() {
        let mut app = App::new();
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_millis(100));

        app.insert_resource(clock)
            .init_resource::<InputSettings>()
            .init_resource::<FrameInput>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_message::<MouseMotion>()
            .add_systems(Update, collect_frame_input);

        let button = app.world_mut().spawn(Interaction::Hovered).id();
        app.world_mut().write_message(MouseMotion {
            delta: Vec2::new(20.0, 0.0),
        });
        app.update();
        assert_eq!(app.world().resource::<FrameInput>().mouse_x, 0.0);

        // Motion read while hovering is not replayed once the pointer leaves.
        app.world_mut()
            .entity_mut(button)
            .insert(Interaction::None);
        app.update();
        assert_eq!(app.world().resource::<FrameInput>().mouse_x, 0.0);

        app.world_mut().write_message(MouseMotion {
            delta: Vec2::new(10.0, 0.0),
        });
        app.update();
        assert!((app.world().resource::<FrameInput>().mouse_x - 1.0).abs() < EPS);
    }
}
