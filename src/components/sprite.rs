use bevy_ecs::prelude::Component;

/// Image drawn over the object's box. `tex_key` names an image the drawing
/// surface knows about; the image is scaled to the object's collider size.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }
}
