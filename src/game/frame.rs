// Per-frame layout output
//
// Everything the renderer needs for one frame, already positioned. Built by
// the controller from the current node; holds no references into it.

use crate::assets::ImageId;
use crate::text::TextBounds;
use sdl2::rect::Rect;

pub const QUIT_LABEL: &str = "[Quit]";
pub const RESTART_LABEL: &str = "[Restart]";
pub const END_MARKER: &str = "--- The End ---";

/// A string with its top-left draw position and measured ink box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub bounds: TextBounds,
}

impl PlacedText {
    pub fn new(text: impl Into<String>, x: i32, y: i32, bounds: TextBounds) -> Self {
        PlacedText {
            text: text.into(),
            x,
            y,
            bounds,
        }
    }

    /// The glyph ink rectangle on screen
    pub fn ink_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.bounds.width.max(1), self.bounds.height.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameLayout {
    /// Illustration and where it's scaled to
    pub image: Option<(ImageId, Rect)>,
    pub quit: Option<PlacedText>,
    /// Wrapped story text, each line centred on its own
    pub lines: Vec<PlacedText>,
    /// Choice labels in choice order
    pub choices: Vec<PlacedText>,
    /// Only present on an ending
    pub end_marker: Option<PlacedText>,
    pub restart: Option<PlacedText>,
}

impl FrameLayout {
    pub fn is_ending(&self) -> bool {
        self.restart.is_some()
    }
}
