//! Interaction domain: the modal "Enter?" dialog overlay.

use bevy::prelude::*;

use crate::interaction::{DialogChoice, DoorInteraction};
use crate::scenes::SceneEntity;

const SELECTED_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const UNSELECTED_COLOR: Color = Color::WHITE;
const FONT_SIZE: f32 = 10.0;

/// Marker for the dialog root node
#[derive(Component, Debug)]
pub struct DoorDialogUI;

/// One selectable option inside the dialog
#[derive(Component, Debug)]
pub struct DialogOptionText(pub DialogChoice);

pub fn option_color(option: DialogChoice, selection: DialogChoice) -> Color {
    if option == selection {
        SELECTED_COLOR
    } else {
        UNSELECTED_COLOR
    }
}

/// Keeps the overlay in step with the interaction mode: spawned while a
/// dialog is open, highlight following the selection, gone otherwise.
pub(crate) fn sync_door_dialog(
    mut commands: Commands,
    interaction: Res<DoorInteraction>,
    existing: Query<Entity, With<DoorDialogUI>>,
    mut options: Query<(&DialogOptionText, &mut TextColor)>,
) {
    match interaction.selection() {
        Some(selection) => {
            if existing.is_empty() {
                spawn_door_dialog(&mut commands, selection);
                return;
            }
            for (option, mut color) in &mut options {
                let wanted = option_color(option.0, selection);
                if color.0 != wanted {
                    color.0 = wanted;
                }
            }
        }
        None => {
            for entity in &existing {
                commands.entity(entity).despawn();
            }
        }
    }
}

fn option_text(choice: DialogChoice, selection: DialogChoice) -> impl Bundle {
    (
        DialogOptionText(choice),
        Text::new(choice.label()),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(option_color(choice, selection)),
        Node {
            margin: UiRect::horizontal(Val::Px(10.0)),
            ..default()
        },
    )
}

fn spawn_door_dialog(commands: &mut Commands, selection: DialogChoice) {
    commands
        .spawn((
            SceneEntity,
            DoorDialogUI,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(100.0),
                        height: Val::Px(50.0),
                        flex_direction: FlexDirection::Column,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Enter?"),
                        TextFont {
                            font_size: FONT_SIZE,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        Node {
                            margin: UiRect::bottom(Val::Px(6.0)),
                            ..default()
                        },
                    ));
                    panel
                        .spawn(Node {
                            flex_direction: FlexDirection::Row,
                            ..default()
                        })
                        .with_children(|row| {
                            row.spawn(option_text(DialogChoice::Confirm, selection));
                            row.spawn(option_text(DialogChoice::Cancel, selection));
                        });
                });
        });
}
