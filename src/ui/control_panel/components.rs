// src/ui/control_panel/components.rs
//
// Components for the control panel buttons.

use bevy::prelude::*;

use crate::player::components::PlayerController;

/// Setting a control panel button changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    MoveMode,
    Space,
    MouseRotation,
    KeyRotation,
}

impl ControlKind {
    pub const ALL: [ControlKind; 4] = [
        ControlKind::MoveMode,
        ControlKind::Space,
        ControlKind::MouseRotation,
        ControlKind::KeyRotation,
    ];

    /// Button caption for the controller's current value.
    pub fn label(self, controller: &PlayerController) -> String {
        match self {
            Self::MoveMode => format!("Move: {}", controller.move_mode()),
            Self::Space => format!("Space: {}", controller.space()),
            Self::MouseRotation => {
                format!("Mouse Rot.: {}", on_off(controller.allow_mouse_rotation()))
            }
            Self::KeyRotation => format!("Key Rot.: {}", on_off(controller.allow_key_rotation())),
        }
    }

    /// Resolves the next value and hands it to the matching setter.
    pub fn advance(self, controller: &mut PlayerController) {
        match self {
            Self::MoveMode => {
                let next = controller.move_mode().next();
                controller.set_move_mode(next);
            }
            Self::Space => {
                let next = controller.space().next();
                controller.set_space(next);
            }
            Self::MouseRotation => {
                let next = !controller.allow_mouse_rotation();
                controller.set_mouse_rotation(next);
            }
            Self::KeyRotation => {
                let next = !controller.allow_key_rotation();
                controller.set_key_rotation(next);
            }
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}

/// Button that advances one controller setting when pressed.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControlButton(pub ControlKind);

/// Text node showing the current value for a setting.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControlLabel(pub ControlKind);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::components::{MoveMode, MoveSpace};

    #[test]
    fn advance_toggles_each_setting() {
        let mut controller = PlayerController::default();
        for kind in ControlKind::ALL {
            kind.advance(&mut controller);
        }

        assert_eq!(
            controller,
            PlayerController::new(MoveMode::PhysicsBody, MoveSpace::Local, false, true)
        );
    }

    #[test]
    fn labels_reflect_current_values() {
        let controller = PlayerController::default();
        assert_eq!(ControlKind::MoveMode.label(&controller), "Move: Transform");
        assert_eq!(ControlKind::Space.label(&controller), "Space: World");
        assert_eq!(ControlKind::MouseRotation.label(&controller), "Mouse Rot.: On");
        assert_eq!(ControlKind::KeyRotation.label(&controller), "Key Rot.: Off");
    }
}
