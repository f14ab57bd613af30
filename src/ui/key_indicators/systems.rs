// src/ui/key_indicators/systems.rs
//
// Systems for spawning and recoloring key indicators.

use bevy::prelude::*;

use super::components::{
    KeyIndicator, KeyIndicatorPanel, PRESSED_COLOR, TRACKED_KEYS, UNPRESSED_COLOR,
};

const CELL_SIZE: f32 = 44.0;
const CELL_GAP: f32 = 6.0;
const LABEL_COLOR: Color = Color::srgb(0.05, 0.05, 0.05);

/// Color an indicator should switch to this frame, if any.
///
/// A press and a release in the same frame end on the released color.
pub fn indicator_color(keyboard: &ButtonInput<KeyCode>, key: KeyCode) -> Option<Color> {
    if keyboard.just_released(key) {
        Some(UNPRESSED_COLOR)
    } else if keyboard.just_pressed(key) {
        Some(PRESSED_COLOR)
    } else {
        None
    }
}

/// Spawns the indicator grid in the bottom-left corner.
pub fn spawn_key_indicators(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                left: Val::Px(20.0),
                display: Display::Grid,
                grid_template_columns: RepeatedGridTrack::px(3, CELL_SIZE),
                grid_template_rows: RepeatedGridTrack::px(2, CELL_SIZE),
                column_gap: Val::Px(CELL_GAP),
                row_gap: Val::Px(CELL_GAP),
                ..default()
            },
            KeyIndicatorPanel,
            Name::new("Key Indicators"),
        ))
        .with_children(|parent| {
            for (key, label, column, row) in TRACKED_KEYS {
                parent
                    .spawn((
                        Node {
                            grid_column: GridPlacement::start(column as i16),
                            grid_row: GridPlacement::start(row as i16),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(UNPRESSED_COLOR),
                        KeyIndicator { key },
                        Name::new(format!("Key Indicator {}", label)),
                    ))
                    .with_children(|cell| {
                        cell.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: 20.0,
                                ..default()
                            },
                            TextColor(LABEL_COLOR),
                        ));
                    });
            }
        });
}

/// Recolors indicators on key press/release transitions.
pub fn update_key_indicators(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut indicators: Query<(&KeyIndicator, &mut BackgroundColor)>,
) {
    for (indicator, mut background) in indicators.iter_mut() {
        if let Some(color) = indicator_color(&keyboard, indicator.key) {
            background.0 = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, update_key_indicators);
        let entity = app
            .world_mut()
            .spawn((KeyIndicator { key: KeyCode::KeyW }, BackgroundColor(UNPRESSED_COLOR)))
            .id();
        (app, entity)
    }

    fn color_of(app: &App, entity: Entity) -> Color {
        app.world().get::<BackgroundColor>(entity).unwrap().0
    }

    #[test]
    fn press_then_release_cycles_colors() {
        let (mut app, entity) = indicator_app();
        assert_eq!(color_of(&app, entity), UNPRESSED_COLOR);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.update();
        assert_eq!(color_of(&app, entity), PRESSED_COLOR);

        // Holding the key does not re-trigger anything.
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert_eq!(color_of(&app, entity), PRESSED_COLOR);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::KeyW);
        app.update();
        assert_eq!(color_of(&app, entity), UNPRESSED_COLOR);
    }

    #[test]
    fn other_keys_leave_indicator_alone() {
        let (mut app, entity) = indicator_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.update();
        assert_eq!(color_of(&app, entity), UNPRESSED_COLOR);
    }

    #[test]
    fn pressed_color_matches_hud_palette() {
        let pressed = PRESSED_COLOR.to_srgba();
        assert!((pressed.red - 0.118).abs() < 1e-3);
        assert!((pressed.alpha - 0.392).abs() < 1e-3);

        let unpressed = UNPRESSED_COLOR.to_srgba();
        assert_eq!(unpressed.red, 1.0);
        assert!((unpressed.alpha - 0.392).abs() < 1e-3);
    }

    #[test]
    fn same_frame_press_and_release_ends_unpressed() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        keyboard.release(KeyCode::KeyA);
        assert_eq!(indicator_color(&keyboard, KeyCode::KeyA), Some(UNPRESSED_COLOR));
    }
}
