//! Per-frame keyboard input resource.
//!
//! The host writes the state of every bound key into [`InputState`] once per
//! frame, before the scene updates; controllers read it during the update.
//! Defaults use WASD for the left player and arrow keys for the right one.
use bevy_ecs::prelude::*;

/// Keys the game knows about. Hosts map their native key codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Null,
    W,
    S,
    Up,
    Down,
    F11,
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound(key: Key) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }

    /// Record whether the key is down this frame, deriving the edge flags
    /// from the previous frame's state.
    pub fn set(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }

    /// Drop the edge flags once the frame that saw them has run.
    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// Fields are grouped by purpose: left player (W/S), right player (arrow
/// keys), and the debug overlay toggle.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_down: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub mode_debug: BoolState,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: Key::Null,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound(Key::W),
            maindirection_down: BoolState::bound(Key::S),
            // Arrow keys
            secondarydirection_up: BoolState::bound(Key::Up),
            secondarydirection_down: BoolState::bound(Key::Down),
            mode_debug: BoolState::bound(Key::F11),
        }
    }
}

impl InputState {
    fn states(&self) -> [&BoolState; 5] {
        [
            &self.maindirection_up,
            &self.maindirection_down,
            &self.secondarydirection_up,
            &self.secondarydirection_down,
            &self.mode_debug,
        ]
    }

    fn states_mut(&mut self) -> [&mut BoolState; 5] {
        [
            &mut self.maindirection_up,
            &mut self.maindirection_down,
            &mut self.secondarydirection_up,
            &mut self.secondarydirection_down,
            &mut self.mode_debug,
        ]
    }

    /// Every key with at least one binding.
    pub fn bound_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .states()
            .iter()
            .map(|s| s.key_binding)
            .filter(|k| *k != Key::Null)
            .collect();
        keys.dedup();
        keys
    }

    /// Update every state bound to `key`.
    pub fn set_key(&mut self, key: Key, down: bool) {
        for state in self.states_mut() {
            if state.key_binding == key {
                state.set(down);
            }
        }
    }

    /// Called after every frame. Key state carries over until the host
    /// reports a change; the edge flags do not.
    pub fn end_frame(&mut self) {
        for state in self.states_mut() {
            state.clear_edges();
        }
    }

    /// Whether any state bound to `key` is active this frame.
    pub fn is_down(&self, key: Key) -> bool {
        self.states()
            .iter()
            .any(|s| s.key_binding == key && s.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, Key::Null);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.maindirection_up.active);
        assert!(!input.maindirection_down.active);
        assert!(!input.secondarydirection_up.active);
        assert!(!input.secondarydirection_down.active);
        assert!(!input.mode_debug.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, Key::W);
        assert_eq!(input.maindirection_down.key_binding, Key::S);
        assert_eq!(input.secondarydirection_up.key_binding, Key::Up);
        assert_eq!(input.secondarydirection_down.key_binding, Key::Down);
        assert_eq!(input.mode_debug.key_binding, Key::F11);
    }

    #[test]
    fn test_set_key_tracks_edges() {
        let mut input = InputState::default();
        input.set_key(Key::F11, true);
        assert!(input.mode_debug.active);
        assert!(input.mode_debug.just_pressed);

        input.set_key(Key::F11, true);
        assert!(input.mode_debug.active);
        assert!(!input.mode_debug.just_pressed);

        input.set_key(Key::F11, false);
        assert!(!input.mode_debug.active);
        assert!(input.mode_debug.just_released);
    }

    #[test]
    fn test_end_frame_clears_edges_keeps_state() {
        let mut input = InputState::default();
        input.set_key(Key::F11, true);
        input.set_key(Key::Up, true);
        input.end_frame();
        assert!(input.mode_debug.active);
        assert!(!input.mode_debug.just_pressed);
        assert!(input.is_down(Key::Up));

        input.set_key(Key::F11, false);
        assert!(input.mode_debug.just_released);
        input.end_frame();
        assert!(!input.mode_debug.just_released);
    }

    #[test]
    fn test_is_down_only_for_pressed_key() {
        let mut input = InputState::default();
        input.set_key(Key::Up, true);
        assert!(input.is_down(Key::Up));
        assert!(!input.is_down(Key::W));
        assert!(!input.is_down(Key::Down));
    }

    #[test]
    fn test_bound_keys_excludes_null() {
        let input = InputState::default();
        let keys = input.bound_keys();
        assert_eq!(keys.len(), 5);
        assert!(!keys.contains(&Key::Null));
    }
}
