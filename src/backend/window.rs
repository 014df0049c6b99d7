//! raylib window backend.
//!
//! Opens a window the size of the canvas, maps raylib key state into the
//! scene's [`InputState`] before every frame, and implements [`DrawSurface`]
//! on top of a raylib draw handle.

use log::info;
use raylib::prelude::*;

use crate::error::GameError;
use crate::game::Game;
use crate::level::SHIP_TEXTURE;
use crate::resources::input::{InputState, Key};
use crate::resources::texturestore::TextureStore;
use crate::scheduler::SystemClock;
use crate::surface::{self, DrawSurface};

const SHIP_TEXTURE_PATH: &str = "./assets/ship.png";

fn keyboard_key(key: Key) -> Option<KeyboardKey> {
    match key {
        Key::Null => None,
        Key::W => Some(KeyboardKey::KEY_W),
        Key::S => Some(KeyboardKey::KEY_S),
        Key::Up => Some(KeyboardKey::KEY_UP),
        Key::Down => Some(KeyboardKey::KEY_DOWN),
        Key::F11 => Some(KeyboardKey::KEY_F11),
    }
}

fn to_raylib(color: surface::Color) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

/// Read every bound key from raylib into the game's input state.
fn poll_input(rl: &RaylibHandle, game: &mut Game<SystemClock>) {
    let keys = game.scene().world().resource::<InputState>().bound_keys();
    for key in keys {
        let down = keyboard_key(key).is_some_and(|k| rl.is_key_down(k));
        game.set_key(key, down);
    }
}

/// [`DrawSurface`] over one frame's raylib draw handle.
pub struct RaylibSurface<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a TextureStore,
}

impl<'a, 'b> RaylibSurface<'a, 'b> {
    pub fn new(d: &'a mut RaylibDrawHandle<'b>, textures: &'a TextureStore) -> Self {
        Self { d, textures }
    }
}

impl DrawSurface for RaylibSurface<'_, '_> {
    fn clear(&mut self) {
        self.d.clear_background(Color::BLACK);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: surface::Color) {
        self.d.draw_rectangle(
            x as i32,
            y as i32,
            width as i32,
            height as i32,
            to_raylib(color),
        );
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
        color: surface::Color,
    ) {
        let rec = Rectangle {
            x,
            y,
            width,
            height,
        };
        self.d.draw_rectangle_lines_ex(rec, line_width, to_raylib(color));
    }

    fn draw_image(&mut self, key: &str, x: f32, y: f32, width: f32, height: f32) {
        let Some(tex) = self.textures.get(key) else {
            return;
        };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        };
        let dest = Rectangle {
            x,
            y,
            width,
            height,
        };
        self.d
            .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: surface::Color) {
        // raylib places text by its top-left corner; the position is the baseline
        self.d.draw_text(
            text,
            x as i32,
            (y - font_size) as i32,
            font_size as i32,
            to_raylib(color),
        );
    }
}

/// Open a window and run the game until it is closed.
///
/// raylib paces the window at `target_fps`; the game's scheduler should be
/// unpaced so that every window frame runs exactly one game frame.
pub fn run_window(mut game: Game<SystemClock>, title: &str, target_fps: u32) -> Result<(), GameError> {
    let screen = game.scene().screen();
    let (mut rl, thread) = raylib::init()
        .size(screen.w, screen.h)
        .title(title)
        .build();
    rl.set_target_fps(target_fps);

    let mut textures = TextureStore::new();
    textures
        .load(&mut rl, &thread, SHIP_TEXTURE, SHIP_TEXTURE_PATH)
        .map_err(GameError::Backend)?;
    info!("window opened: {}x{} at {} fps", screen.w, screen.h, target_fps);

    while !rl.window_should_close() {
        poll_input(&rl, &mut game);
        let mut d = rl.begin_drawing(&thread);
        let mut surface = RaylibSurface::new(&mut d, &textures);
        if !game.poll_frame(&mut surface) {
            game.scene().render(&mut surface);
        }
    }
    info!("window closed");
    Ok(())
}
