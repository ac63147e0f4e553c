//! Text wrapping and image fitting
//!
//! Pure layout helpers. Nothing here keeps state between calls.

use sdl2::rect::Rect;

/// Greedily wraps `text` into lines no wider than `max_width`
///
/// Words are split on any whitespace. A word is appended to the current line
/// (with one space) unless the result would measure wider than `max_width`,
/// in which case the current line is closed and the word starts the next.
/// A single word wider than `max_width` is never broken; it overflows on its
/// own line.
pub fn wrap_text<F>(text: &str, measure: F, max_width: u32) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut words = text.split_whitespace();
    let mut lines = Vec::new();

    let Some(first) = words.next() else {
        return lines;
    };

    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    lines.push(current);

    lines
}

/// Scales an image to fit a horizontal band, preserving aspect ratio
///
/// The scale is the smaller of the width and height ratios, and the result
/// is centred horizontally in the viewport with its top at `band_top`.
/// Returns `None` for degenerate sizes.
pub fn fit_image(
    image_width: u32,
    image_height: u32,
    viewport_width: u32,
    band_top: i32,
    band_height: u32,
) -> Option<Rect> {
    if image_width == 0 || image_height == 0 || viewport_width == 0 || band_height == 0 {
        return None;
    }

    let scale_x = viewport_width as f64 / image_width as f64;
    let scale_y = band_height as f64 / image_height as f64;
    let scale = scale_x.min(scale_y);

    let width = (image_width as f64 * scale).round().max(1.0) as u32;
    let height = (image_height as f64 * scale).round().max(1.0) as u32;
    let x = ((viewport_width as f64 - width as f64) / 2.0).round() as i32;

    Some(Rect::new(x, band_top, width, height))
}
