// src/ui/control_panel/systems.rs
//
// Systems for spawning the control panel and applying button presses.

use bevy::prelude::*;

use crate::player::{
    components::{Player, PlayerController},
    config::ControllerDefaults,
};

use super::components::{ControlButton, ControlKind, ControlLabel};

const PANEL_BACKGROUND: Color = Color::srgba(0.08, 0.08, 0.1, 0.85);
const BUTTON_BACKGROUND: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_BORDER: Color = Color::srgb(0.4, 0.4, 0.45);

/// Spawns the panel in the top-left corner, captioned with the startup flags.
pub fn spawn_control_panel(mut commands: Commands, defaults: Res<ControllerDefaults>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            Name::new("Control Panel"),
        ))
        .with_children(|parent| {
            for kind in ControlKind::ALL {
                parent
                    .spawn((
                        Node {
                            width: Val::Px(180.0),
                            padding: UiRect::all(Val::Px(6.0)),
                            border: UiRect::all(Val::Px(1.5)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        Button,
                        Interaction::None,
                        BackgroundColor(BUTTON_BACKGROUND),
                        BorderColor::from(BUTTON_BORDER),
                        ControlButton(kind),
                        Name::new(format!("Control Button {:?}", kind)),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(kind.label(&defaults.0)),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                            ControlLabel(kind),
                        ));
                    });
            }
        });
}

/// Applies pressed buttons to every player controller.
#[allow(clippy::type_complexity)]
pub fn handle_control_buttons(
    buttons: Query<(&Interaction, &ControlButton), (Changed<Interaction>, With<Button>)>,
    mut players: Query<&mut PlayerController, With<Player>>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        for mut controller in players.iter_mut() {
            button.0.advance(&mut controller);
        }
    }
}

/// Re-captions the buttons when a player controller changes.
pub fn refresh_control_labels(
    players: Query<&PlayerController, (With<Player>, Changed<PlayerController>)>,
    mut labels: Query<(&ControlLabel, &mut Text)>,
) {
    let Some(controller) = players.iter().next() else {
        return;
    };

    for (label, mut text) in labels.iter_mut() {
        let caption = label.0.label(controller);
        if text.0 != caption {
            text.0 = caption;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::components::MoveMode;

    #[test]
    fn pressed_button_advances_controller_and_caption() {
        let mut app = App::new();
        app.add_systems(
            Update,
            (handle_control_buttons, refresh_control_labels).chain(),
        );

        let player = app
            .world_mut()
            .spawn((Player, PlayerController::default()))
            .id();
        let button = app
            .world_mut()
            .spawn((Button, Interaction::None, ControlButton(ControlKind::MoveMode)))
            .id();
        let label = app
            .world_mut()
            .spawn((ControlLabel(ControlKind::MoveMode), Text::new("")))
            .id();

        app.update();
        assert_eq!(app.world().get::<Text>(label).unwrap().0, "Move: Transform");

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Pressed;
        app.update();

        let controller = app.world().get::<PlayerController>(player).unwrap();
        assert_eq!(controller.move_mode(), MoveMode::PhysicsBody);
        assert_eq!(app.world().get::<Text>(label).unwrap().0, "Move: Physics Body");
    }

    #[test]
    fn hovering_does_not_change_controller() {
        let mut app = App::new();
        app.add_systems(Update, handle_control_buttons);

        let player = app
            .world_mut()
            .spawn((Player, PlayerController::default()))
            .id();
        app.world_mut().spawn((
            Button,
            Interaction::Hovered,
            ControlButton(ControlKind::KeyRotation),
        ));

        app.update();

        let controller = app.world().get::<PlayerController>(player).unwrap();
        assert!(!controller.allow_key_rotation());
    }
}
