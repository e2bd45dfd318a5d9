//! Actor animation clips and playback.
//!
//! Two sprite sheets back the actor: a four-frame idle strip (one frame per
//! facing) and a 24-frame run strip (six frames per facing).

use bevy::prelude::*;

use crate::movement::{AnimationKey, Facing, Motion, Player};

/// Size of one actor frame in both sheets.
pub const ACTOR_FRAME: UVec2 = UVec2::new(16, 32);

const IDLE_SHEET_PATH: &str = "player/player_idle.png";
const RUN_SHEET_PATH: &str = "player/player_run.png";
const RUN_FRAMES: usize = 6;
/// Sheets are single-row strips of `ACTOR_FRAME` cells ordered right, up,
/// left, down: 64x32 for idle, 384x32 for run.
const IDLE_COLUMNS: u32 = 4;
const RUN_COLUMNS: u32 = RUN_FRAMES as u32 * 4;
const RUN_FPS: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorSheet {
    Idle,
    Run,
}

/// A contiguous frame range on one sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub sheet: ActorSheet,
    pub first: usize,
    pub frames: usize,
    pub fps: f32,
}

pub fn clip_for(key: AnimationKey) -> AnimationClip {
    match key.motion {
        Motion::Idle => AnimationClip {
            sheet: ActorSheet::Idle,
            first: match key.facing {
                Facing::Right => 0,
                Facing::Up => 1,
                Facing::Left => 2,
                Facing::Down => 3,
            },
            frames: 1,
            fps: 0.0,
        },
        Motion::Run => AnimationClip {
            sheet: ActorSheet::Run,
            first: match key.facing {
                Facing::Right => 0,
                Facing::Up => 6,
                Facing::Left => 12,
                Facing::Down => 18,
            },
            frames: RUN_FRAMES,
            fps: RUN_FPS,
        },
    }
}

/// Playback state for the actor. Clips loop until another one is played.
#[derive(Component, Debug)]
pub struct PlayerAnimation {
    key: AnimationKey,
    frame: usize,
    frame_timer: f32,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            key: AnimationKey::idle(Facing::Down),
            frame: 0,
            frame_timer: 0.0,
        }
    }
}

impl PlayerAnimation {
    pub fn key(&self) -> AnimationKey {
        self.key
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Switch clips. Playing the current clip again keeps its frame.
    pub fn play(&mut self, key: AnimationKey) {
        if self.key != key {
            self.key = key;
            self.frame = 0;
            self.frame_timer = 0.0;
        }
    }

    pub fn advance(&mut self, delta_secs: f32) {
        let clip = clip_for(self.key);
        if clip.frames <= 1 || clip.fps <= 0.0 {
            return;
        }

        let frame_duration = 1.0 / clip.fps;
        self.frame_timer += delta_secs;
        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.frame = (self.frame + 1) % clip.frames;
        }
    }

    pub fn sheet(&self) -> ActorSheet {
        clip_for(self.key).sheet
    }

    pub fn atlas_index(&self) -> usize {
        clip_for(self.key).first + self.frame
    }
}

/// Marker for the child entity drawing the actor.
#[derive(Component, Debug)]
pub struct ActorSprite;

/// Loaded actor sheets and their atlas layouts.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActorSheets {
    pub idle_image: Handle<Image>,
    pub idle_layout: Handle<TextureAtlasLayout>,
    pub run_image: Handle<Image>,
    pub run_layout: Handle<TextureAtlasLayout>,
}

impl ActorSheets {
    fn handles(&self, sheet: ActorSheet) -> (&Handle<Image>, &Handle<TextureAtlasLayout>) {
        match sheet {
            ActorSheet::Idle => (&self.idle_image, &self.idle_layout),
            ActorSheet::Run => (&self.run_image, &self.run_layout),
        }
    }

    pub fn sprite(&self, animation: &PlayerAnimation) -> Sprite {
        let (image, layout) = self.handles(animation.sheet());
        Sprite::from_atlas_image(
            image.clone(),
            TextureAtlas {
                layout: layout.clone(),
                index: animation.atlas_index(),
            },
        )
    }

    /// Point `sprite` at the animation's current frame, touching it only on change.
    pub fn apply(&self, animation: &PlayerAnimation, sprite: &mut Sprite) {
        let (image, layout) = self.handles(animation.sheet());
        let index = animation.atlas_index();

        let up_to_date = sprite.image == *image
            && sprite
                .texture_atlas
                .as_ref()
                .is_some_and(|atlas| atlas.layout == *layout && atlas.index == index);
        if up_to_date {
            return;
        }

        sprite.image = image.clone();
        sprite.texture_atlas = Some(TextureAtlas {
            layout: layout.clone(),
            index,
        });
    }
}

pub(crate) fn load_actor_sheets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let idle_layout = TextureAtlasLayout::from_grid(ACTOR_FRAME, IDLE_COLUMNS, 1, None, None);
    let run_layout = TextureAtlasLayout::from_grid(ACTOR_FRAME, RUN_COLUMNS, 1, None, None);

    commands.insert_resource(ActorSheets {
        idle_image: asset_server.load(IDLE_SHEET_PATH),
        idle_layout: layouts.add(idle_layout),
        run_image: asset_server.load(RUN_SHEET_PATH),
        run_layout: layouts.add(run_layout),
    });
}

/// Advance actor clips and push the current frame to the sprite child.
pub(crate) fn animate_actor_sprites(
    time: Res<Time>,
    sheets: Res<ActorSheets>,
    mut actors: Query<(&mut PlayerAnimation, &Children), With<Player>>,
    mut sprites: Query<&mut Sprite, With<ActorSprite>>,
) {
    for (mut animation, children) in &mut actors {
        animation.advance(time.delta_secs());

        for child in children.iter() {
            if let Ok(mut sprite) = sprites.get_mut(child) {
                sheets.apply(&animation, &mut sprite);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_table() {
        assert_eq!(clip_for(AnimationKey::idle(Facing::Right)).first, 0);
        assert_eq!(clip_for(AnimationKey::idle(Facing::Down)).first, 3);
        assert_eq!(clip_for(AnimationKey::run(Facing::Up)).first, 6);
        assert_eq!(clip_for(AnimationKey::run(Facing::Down)).first, 18);
        assert_eq!(clip_for(AnimationKey::run(Facing::Left)).frames, 6);
        assert_eq!(clip_for(AnimationKey::idle(Facing::Left)).sheet, ActorSheet::Idle);
    }

    #[test]
    fn test_every_clip_fits_its_strip() {
        for facing in Facing::PRIORITY {
            let idle = clip_for(AnimationKey::idle(facing));
            assert!(idle.first + idle.frames <= IDLE_COLUMNS as usize);
            let run = clip_for(AnimationKey::run(facing));
            assert!(run.first + run.frames <= RUN_COLUMNS as usize);
        }
        assert_eq!(RUN_COLUMNS, 24);
    }

    #[test]
    fn test_replaying_current_clip_keeps_frame() {
        let mut animation = PlayerAnimation::default();
        animation.play(AnimationKey::run(Facing::Left));
        animation.advance(0.3);
        assert_eq!(animation.frame(), 2);

        animation.play(AnimationKey::run(Facing::Left));
        assert_eq!(animation.frame(), 2);
        assert_eq!(animation.atlas_index(), 14);

        animation.play(AnimationKey::idle(Facing::Left));
        assert_eq!(animation.frame(), 0);
        assert_eq!(animation.atlas_index(), 2);
    }

    #[test]
    fn test_run_clip_loops() {
        let mut animation = PlayerAnimation::default();
        animation.play(AnimationKey::run(Facing::Right));
        // Seven frame durations at 8 fps wraps past the sixth frame
        animation.advance(7.0 / 8.0 + 0.01);
        assert_eq!(animation.frame(), 1);
    }

    #[test]
    fn test_idle_clip_does_not_advance() {
        let mut animation = PlayerAnimation::default();
        animation.advance(5.0);
        assert_eq!(animation.frame(), 0);
        assert_eq!(animation.atlas_index(), 3);
    }
}
