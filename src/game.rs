//! Game driver.
//!
//! [`Game`] owns one [`Scene`] and one [`FrameScheduler`]. Construction runs
//! the scene's `create` hook and schedules the first frame. Each frame
//! ([`Game::game_loop`]) cancels the current frame handle, advances world
//! time, applies host actions from the input state, updates and renders the
//! scene, then requests the next frame. Exactly one frame handle is live at a
//! time.
//!
//! The host drives the game by writing key state with [`Game::set_key`] and
//! calling [`Game::poll_frame`] whenever it can draw.

use std::time::Duration;

use log::{debug, info};

use crate::error::GameError;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputState, Key};
use crate::scene::Scene;
use crate::scheduler::{Clock, FrameHandle, FrameScheduler, SystemClock};
use crate::surface::DrawSurface;
use crate::systems::time::update_world_time;

pub struct Game<C: Clock = SystemClock> {
    scene: Scene,
    scheduler: FrameScheduler<C>,
    id: FrameHandle,
}

impl<C: Clock> Game<C> {
    /// Build the scene's level and schedule the first frame.
    pub fn new(mut scene: Scene, mut scheduler: FrameScheduler<C>) -> Result<Self, GameError> {
        scene.create()?;
        let id = scheduler.request_frame();
        info!("game started, first frame {:?}", id);
        Ok(Self {
            scene,
            scheduler,
            id,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn scheduler(&self) -> &FrameScheduler<C> {
        &self.scheduler
    }

    /// The current frame handle.
    pub fn frame_handle(&self) -> FrameHandle {
        self.id
    }

    /// Record the state of one key for the next frame.
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.scene
            .world_mut()
            .resource_mut::<InputState>()
            .set_key(key, down);
    }

    /// One frame: cancel the pending handle, update and render the scene,
    /// request the next handle.
    pub fn game_loop(&mut self, delta: Duration, surface: &mut dyn DrawSurface) {
        self.scheduler.cancel_frame(self.id);

        update_world_time(self.scene.world_mut(), delta.as_secs_f32());

        let toggle_debug = self.scene.world().resource::<InputState>().mode_debug.just_pressed;
        if toggle_debug {
            let world = self.scene.world_mut();
            world.trigger(SwitchDebugEvent {});
            world.flush();
        }

        self.scene.update();
        self.scene.render(surface);
        self.scene
            .world_mut()
            .resource_mut::<InputState>()
            .end_frame();

        self.id = self.scheduler.request_frame();
    }

    /// Run a frame if one is due. Returns whether a frame ran.
    pub fn poll_frame(&mut self, surface: &mut dyn DrawSurface) -> bool {
        match self.scheduler.poll() {
            Some(tick) => {
                self.game_loop(tick.delta, surface);
                true
            }
            None => false,
        }
    }

    /// Run exactly `frames` frames, calling `wait` with the remaining time
    /// whenever the next frame is not due yet.
    pub fn run_for(&mut self, frames: u64, surface: &mut dyn DrawSurface, mut wait: impl FnMut(Duration)) {
        let mut done = 0;
        while done < frames {
            if self.poll_frame(surface) {
                done += 1;
                continue;
            }
            let remaining = self.scheduler.time_until_due().unwrap_or(Duration::ZERO);
            wait(remaining);
        }
        debug!("ran {} frames", frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::debugmode::DebugMode;
    use crate::resources::screensize::ScreenSize;
    use crate::resources::worldtime::WorldTime;
    use crate::scheduler::ManualClock;
    use crate::surface::RecordingSurface;

    const FRAME: Duration = Duration::from_millis(16);

    fn make_game(clock: ManualClock) -> Game<ManualClock> {
        let scene = Scene::new(ScreenSize::new(640, 480));
        Game::new(scene, FrameScheduler::new(clock, FRAME)).unwrap()
    }

    #[test]
    fn test_construction_schedules_first_frame() {
        let game = make_game(ManualClock::new());
        assert_eq!(game.scheduler().pending(), Some(game.frame_handle()));
    }

    #[test]
    fn test_game_loop_replaces_handle() {
        let mut game = make_game(ManualClock::new());
        let before = game.frame_handle();
        let mut s = RecordingSurface::new();
        game.game_loop(FRAME, &mut s);
        let after = game.frame_handle();
        assert_ne!(before, after);
        assert_eq!(game.scheduler().pending(), Some(after));
        assert_eq!(game.scene().world().resource::<WorldTime>().frame_count, 1);
    }

    #[test]
    fn test_poll_frame_respects_pacing() {
        let clock = ManualClock::new();
        let mut game = make_game(clock.clone());
        let mut s = RecordingSurface::new();
        assert!(game.poll_frame(&mut s));
        assert!(!game.poll_frame(&mut s));
        clock.advance(FRAME);
        assert!(game.poll_frame(&mut s));
    }

    #[test]
    fn test_run_for_waits_between_frames() {
        let clock = ManualClock::new();
        let mut game = make_game(clock.clone());
        let mut s = RecordingSurface::new();
        let waiter = clock.clone();
        game.run_for(4, &mut s, |d| waiter.advance(d));
        assert_eq!(game.scene().world().resource::<WorldTime>().frame_count, 4);
        assert_eq!(clock.now(), FRAME * 3);
    }

    #[test]
    fn test_debug_key_toggles_overlay() {
        let mut game = make_game(ManualClock::new());
        let mut s = RecordingSurface::new();
        game.set_key(Key::F11, true);
        game.game_loop(FRAME, &mut s);
        assert!(game.scene().world().contains_resource::<DebugMode>());

        // held key does not toggle again
        game.set_key(Key::F11, true);
        game.game_loop(FRAME, &mut s);
        assert!(game.scene().is_debug());

        game.set_key(Key::F11, false);
        game.set_key(Key::F11, true);
        game.game_loop(FRAME, &mut s);
        assert!(!game.scene().is_debug());
    }

    #[test]
    fn test_single_key_event_toggles_once() {
        let mut game = make_game(ManualClock::new());
        let mut s = RecordingSurface::new();
        game.set_key(Key::F11, true);
        let states: Vec<bool> = (0..4)
            .map(|_| {
                game.game_loop(FRAME, &mut s);
                game.scene().is_debug()
            })
            .collect();
        assert_eq!(states, vec![true, true, true, true]);
    }
}
