// Drawing a laid-out frame
//
// Pure output: reads a FrameLayout and issues SDL2 draw calls. Nothing
// drawn here is read back; hit regions come from the layout, not pixels.

use super::frame::{FrameLayout, PlacedText};
use crate::assets::ImageLibrary;
use crate::input_system::CursorShape;
use crate::text::BitmapFont;
use sdl2::mouse::{Cursor, SystemCursor};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Colors used for the story screen
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub choice: Color,
    pub control: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::RGB(0, 0, 0),
            text: Color::RGB(255, 255, 255),
            choice: Color::RGB(255, 255, 255),
            control: Color::RGB(200, 200, 210),
        }
    }
}

pub fn render_frame(
    canvas: &mut Canvas<Window>,
    frame: &FrameLayout,
    images: &ImageLibrary,
    font: &BitmapFont,
    palette: &Palette,
) -> Result<(), String> {
    canvas.set_draw_color(palette.background);
    canvas.clear();

    if let Some((id, rect)) = frame.image {
        if let Some(texture) = images.texture(id) {
            canvas.copy(texture, None, rect)?;
        }
    }

    if let Some(quit) = &frame.quit {
        draw_placed(canvas, font, quit, palette.control)?;
    }

    for line in &frame.lines {
        draw_placed(canvas, font, line, palette.text)?;
    }

    for choice in &frame.choices {
        draw_placed(canvas, font, choice, palette.choice)?;
    }

    if let Some(marker) = &frame.end_marker {
        draw_placed(canvas, font, marker, palette.text)?;
    }

    if let Some(restart) = &frame.restart {
        draw_placed(canvas, font, restart, palette.control)?;
    }

    Ok(())
}

fn draw_placed(
    canvas: &mut Canvas<Window>,
    font: &BitmapFont,
    placed: &PlacedText,
    color: Color,
) -> Result<(), String> {
    font.draw(canvas, &placed.text, placed.x, placed.y, color)
}

/// System cursors for hover feedback
///
/// SDL2 cursors must stay alive while set, so both are created once.
pub struct CursorSet {
    pointer: Cursor,
    default: Cursor,
    current: CursorShape,
}

impl CursorSet {
    pub fn new() -> Result<Self, String> {
        let default = Cursor::from_system(SystemCursor::Arrow)?;
        default.set();

        Ok(CursorSet {
            pointer: Cursor::from_system(SystemCursor::Hand)?,
            default,
            current: CursorShape::Default,
        })
    }

    /// Switches cursor only when the shape changes
    pub fn apply(&mut self, shape: CursorShape) {
        if shape == self.current {
            return;
        }

        match shape {
            CursorShape::Pointer => self.pointer.set(),
            CursorShape::Default => self.default.set(),
        }
        self.current = shape;
    }
}
