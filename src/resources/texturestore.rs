//! Loaded textures keyed by sprite texture key.
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture from disk and register it under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<(), String> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Failed to load texture {}: {}", path, e))?;
        self.map.insert(key.into(), texture);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
