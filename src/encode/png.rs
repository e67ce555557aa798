use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ToonError, ToonResult};
use crate::render::surface::FrameRGBA;

fn straight_image(frame: &FrameRGBA) -> ToonResult<image::RgbaImage> {
    image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba()).ok_or_else(
        || {
            ToonError::render(format!(
                "frame buffer holds {} bytes, expected {}x{}x4",
                frame.data.len(),
                frame.width,
                frame.height
            ))
        },
    )
}

/// Encode `frame` as PNG bytes (straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> ToonResult<Vec<u8>> {
    let img = straight_image(frame)?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write `frame` to `path` as PNG, creating parent directories as needed.
pub fn export_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> ToonResult<()> {
    let path = path.as_ref();
    let img = straight_image(frame)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
