mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod interaction;
mod map;
mod movement;
mod scenes;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(ImagePlugin::default_nearest())
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Tilewander".to_string(),
                    resolution: (960, 480).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
    )
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity::ZERO)
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        map::MapPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
        interaction::InteractionPlugin,
        scenes::ScenesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
