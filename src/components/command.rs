use bevy_ecs::prelude::Component;

/// Free-form tag some entities use to carry state between frames, e.g. the
/// side an asteroid entered from.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Command(pub String);

impl Command {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn is(&self, command: &str) -> bool {
        self.0 == command
    }
}
