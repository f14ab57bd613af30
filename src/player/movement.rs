//! Movement strategies for the player controller.
//!
//! A frame's motion is planned once as a [`MoveIntent`] and then handed to the
//! [`Mover`] matching the controller's [`MoveMode`]. Nothing is carried between
//! frames, so switching modes starts from the current pose.
use bevy::prelude::*;

use crate::{
    core::heading::heading_rotation,
    physics::components::KinematicBody,
    player::{
        components::{MoveMode, MoveSpace, PlayerController},
        config::MovementSettings,
        input::FrameInput,
    },
};

/// Motion for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// Translation with `x` to the right and `-z` forward.
    pub translation: Vec3,
    pub space: MoveSpace,
    /// Heading change from the horizontal axis, in degrees.
    pub key_turn: Option<f32>,
    /// Heading change from mouse motion, in degrees.
    pub mouse_turn: Option<f32>,
}

impl MoveIntent {
    pub fn plan(
        controller: &PlayerController,
        settings: &MovementSettings,
        input: &FrameInput,
        delta_secs: f32,
    ) -> Self {
        let speed = settings.speed_for(controller.move_mode());
        let (h, v) = (input.h(), input.v());

        Self {
            translation: Vec3::new(h * speed * delta_secs, 0.0, -v * speed * delta_secs),
            space: controller.space(),
            key_turn: controller
                .allow_key_rotation()
                .then_some(h * settings.rotation_speed),
            mouse_turn: controller
                .allow_mouse_rotation()
                .then_some(input.mouse_x * settings.rotation_speed),
        }
    }
}

/// A way of applying a frame's motion to an entity.
pub trait Mover {
    fn translate(&mut self, delta: Vec3, space: MoveSpace);

    /// Turns by `degrees` of heading, composed onto the current rotation.
    fn turn(&mut self, degrees: f32);

    /// Applies translation, then key turn, then mouse turn.
    fn apply(&mut self, intent: &MoveIntent) {
        self.translate(intent.translation, intent.space);
        if let Some(degrees) = intent.key_turn {
            self.turn(degrees);
        }
        if let Some(degrees) = intent.mouse_turn {
            self.turn(degrees);
        }
    }
}

/// Writes the entity transform directly.
pub struct TransformMover<'a> {
    pub transform: &'a mut Transform,
}

impl Mover for TransformMover<'_> {
    fn translate(&mut self, delta: Vec3, space: MoveSpace) {
        let offset = match space {
            MoveSpace::World => delta,
            MoveSpace::Local => self.transform.rotation * delta,
        };
        self.transform.translation += offset;
    }

    fn turn(&mut self, degrees: f32) {
        let rotation = self.transform.rotation * heading_rotation(degrees);
        self.transform.rotation = rotation.normalize();
    }
}

/// Issues kinematic move requests; the physics step commits them.
pub struct BodyMover<'a> {
    pub body: &'a mut KinematicBody,
}

impl Mover for BodyMover<'_> {
    fn translate(&mut self, delta: Vec3, space: MoveSpace) {
        let offset = match space {
            MoveSpace::World => delta,
            MoveSpace::Local => self.body.rotation() * delta,
        };
        let target = self.body.position() + offset;
        self.body.move_position(target);
    }

    fn turn(&mut self, degrees: f32) {
        // Compose onto any rotation already requested this frame so key and
        // mouse turns both land.
        let rotation = self.body.target_rotation() * heading_rotation(degrees);
        self.body.move_rotation(rotation);
    }
}

/// Returns the mover for `mode`, or `None` when the mode needs a body the entity lacks.
pub fn mover_for<'a>(
    mode: MoveMode,
    transform: &'a mut Transform,
    body: Option<&'a mut KinematicBody>,
) -> Option<Box<dyn Mover + 'a>> {
    match mode {
        MoveMode::DirectTransform => {
            Some(Box::new(TransformMover { transform }) as Box<dyn Mover + 'a>)
        }
        MoveMode::PhysicsBody => {
            body.map(|body| Box::new(BodyMover { body }) as Box<dyn Mover + 'a>)
        }
    }
}
