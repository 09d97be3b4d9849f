// SPDX-License-Identifier: MPL-2.0
//! Window icon rendered from the embedded brand mark.

use iced::window::{icon, Icon};
use resvg::usvg;

const BRAND_SVG: &[u8] = include_bytes!("../assets/branding/iced_login.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterizes the brand mark for the title bar.
///
/// Returns `None` when the SVG cannot be parsed or rendered; the window then
/// falls back to the platform default icon.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(BRAND_SVG, ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

/// Renders `svg` into a square RGBA buffer of `size` pixels, preserving the
/// aspect ratio and centering the drawing.
fn rasterize(svg: &[u8], size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default()).ok()?;
    let source = tree.size();

    let scale = (size as f32 / source.width()).min(size as f32 / source.height());
    let offset_x = (size as f32 - source.width() * scale) / 2.0;
    let offset_y = (size as f32 - source.height() * scale) / 2.0;
    let transform =
        tiny_skia::Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.take())
}
