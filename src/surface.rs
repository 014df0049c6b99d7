//! Drawing surface capability.
//!
//! The frame loop never talks to a window directly. Everything it draws goes
//! through a [`DrawSurface`], which the host provides each frame:
//! - [`RecordingSurface`] keeps the draw calls of the current frame in memory
//!   (headless runs and tests)
//! - the raylib window surface lives in `backend::raylib` behind the `raylib`
//!   feature
//!
//! Coordinates follow the canvas convention: origin top-left, y grows down,
//! text is anchored on its baseline.

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// The primitive operations the scene and its objects draw with.
pub trait DrawSurface {
    /// Wipe the whole surface.
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line_width: f32, color: Color);
    /// Blit the image registered under `key`, scaled to the destination box.
    fn draw_image(&mut self, key: &str, x: f32, y: f32, width: f32, height: f32);
    /// Draw `text` with its baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
        color: Color,
    },
    DrawImage {
        key: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    },
}

/// In-memory surface holding the draw calls since the last [`clear`].
///
/// A clear wipes what was recorded, the same way it wipes a canvas, so after a
/// full scene render [`commands`] is exactly what is on screen.
///
/// [`clear`]: DrawSurface::clear
/// [`commands`]: RecordingSurface::commands
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of images blitted with the given key.
    pub fn image_count(&self, key: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { key: k, .. } if k == key))
            .count()
    }

    /// Every text drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            line_width,
            color,
        });
    }

    fn draw_image(&mut self, key: &str, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::DrawImage {
            key: key.to_string(),
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut s = RecordingSurface::new();
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
        s.clear();
        assert_eq!(s.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_image_count_filters_by_key() {
        let mut s = RecordingSurface::new();
        s.draw_image("ship", 0.0, 0.0, 32.0, 32.0);
        s.draw_image("ship", 10.0, 0.0, 32.0, 32.0);
        s.draw_image("rock", 0.0, 0.0, 5.0, 5.0);
        assert_eq!(s.image_count("ship"), 2);
        assert_eq!(s.image_count("rock"), 1);
        assert_eq!(s.image_count("none"), 0);
    }

    #[test]
    fn test_texts_in_draw_order() {
        let mut s = RecordingSurface::new();
        s.fill_text("1", 0.0, 0.0, 48.0, Color::WHITE);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK);
        s.fill_text("2", 0.0, 0.0, 48.0, Color::WHITE);
        assert_eq!(s.texts(), vec!["1", "2"]);
    }
}
