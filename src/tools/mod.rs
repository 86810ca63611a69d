//! Renderers and output helpers
//!
//! Everything here is a thin consumer of the published grid: each renderer
//! iterates `(x, y)` over [`QrCode::module`] and draws, with optional
//! border and scale parameters. The encoder core itself performs no I/O.

use crate::models::QrCode;
use image::{GrayImage, Luma};
use std::fmt::Write as _;
use std::path::Path;

/// Render the symbol as text, two characters per module
///
/// Dark modules print as a full block pair, light ones as spaces. `border`
/// adds a quiet zone of the same width on all four sides.
pub fn to_text(qr: &QrCode, border: usize) -> String {
    let size = qr.size();
    let mut out = String::new();
    for y in 0..size + 2 * border {
        for x in 0..size + 2 * border {
            let dark = x >= border && y >= border && qr.module(x - border, y - border);
            out.push_str(if dark { "\u{2588}\u{2588}" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Serialize the symbol as an SVG document string
///
/// One unit per module; the viewBox includes the quiet zone so the
/// document scales losslessly.
pub fn to_svg(qr: &QrCode, border: usize) -> String {
    let size = qr.size();
    let dimension = size + 2 * border;

    let mut path = String::new();
    for y in 0..size {
        for x in 0..size {
            if qr.module(x, y) {
                if !path.is_empty() {
                    path.push(' ');
                }
                let _ = write!(path, "M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }

    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" ",
            "viewBox=\"0 0 {dim} {dim}\" stroke=\"none\">\n",
            "<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n",
            "<path d=\"{path}\" fill=\"#000000\"/>\n",
            "</svg>\n"
        ),
        dim = dimension,
        path = path
    )
}

/// Rasterize the symbol into a grayscale image
///
/// `scale` is the pixel width of one module, `border` the quiet zone in
/// modules.
pub fn render_image(qr: &QrCode, scale: u32, border: usize) -> GrayImage {
    let scale = scale.max(1);
    let dimension = (qr.size() + 2 * border) as u32 * scale;
    GrayImage::from_fn(dimension, dimension, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        let dark = x >= border && y >= border && qr.module(x - border, y - border);
        Luma([if dark { 0u8 } else { 255u8 }])
    })
}

/// Rasterize the symbol and write it as a PNG file
pub fn save_png<P: AsRef<Path>>(
    qr: &QrCode,
    scale: u32,
    border: usize,
    path: P,
) -> Result<(), image::ImageError> {
    render_image(qr, scale, border).save(path)
}
