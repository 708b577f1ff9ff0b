//! PNG export of mosaic layouts with transparent background

use crate::layout::{MosaicLayout, Rect};
use image::{Pixel, Rgba, RgbaImage};
use log::debug;

/// Rasterize a layout at one pixel per canvas unit
///
/// The container is transparent. Separator lines are painted opaque, then
/// cell rectangles are alpha-blended over them at their own opacity.
pub fn render_layout(layout: &MosaicLayout) -> RgbaImage {
    let mut img = RgbaImage::new(layout.width, layout.height);

    for line in &layout.lines.shapes {
        let [r, g, b] = line.color.to_rgb8();
        fill_rect(&mut img, &line.rect, Rgba([r, g, b, u8::MAX]));
    }

    for cell in &layout.cells.shapes {
        let [r, g, b] = cell.color.to_rgb8();
        let alpha = (cell.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        fill_rect(&mut img, &cell.rect, Rgba([r, g, b, alpha]));
    }

    img
}

// Pixels outside the image are skipped
fn fill_rect(img: &mut RgbaImage, rect: &Rect, color: Rgba<u8>) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                pixel.blend(&color);
            }
        }
    }
}

/// Export a layout as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    layout: &MosaicLayout,
    output_path: &str,
) -> crate::io::error::Result<()> {
    use crate::io::error::MosaicError;

    let img = render_layout(layout);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    debug!(
        "exported {}x{} mosaic to {output_path}",
        layout.width, layout.height
    );
    Ok(())
}
