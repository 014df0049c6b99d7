use bevy_ecs::prelude::Resource;

/// Frame clock of the scene, advanced once per game-loop iteration.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds of wall time covered by the frames run so far.
    pub elapsed: f32,
    pub frame_count: u64,
}
