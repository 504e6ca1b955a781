//! Image format conversion

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};

use crate::{Error, Result};

/// Input extensions the batch converter picks up.
pub const SUPPORTED_EXTENSIONS: [&str; 8] =
    ["png", "jpg", "jpeg", "gif", "bmp", "ico", "tiff", "webp"];

/// Resolve the target format from a path's extension.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    ImageFormat::from_extension(&extension).ok_or(Error::UnsupportedImageFormat { extension })
}

/// Convert one image to the format implied by `output`'s extension.
///
/// JPEG cannot store alpha, so translucent sources are composited onto a
/// white background instead of having their alpha channel dropped.
pub fn convert_image(input: &Path, output: &Path) -> Result<()> {
    let format = output_format(output)?;
    let img = image::open(input).map_err(|e| Error::Image {
        path: input.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| kit_fs::Error::io(parent, e))?;
        }
    }

    let img = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(flatten_onto_white(&img.to_rgba8())),
        _ => img,
    };
    img.save_with_format(output, format).map_err(|e| Error::Image {
        path: output.to_path_buf(),
        message: e.to_string(),
    })
}

fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let alpha = px[3] as u32;
        let blend = |c: u8| (((c as u32) * alpha + 255 * (255 - alpha)) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }
    out
}

/// Outcome of a batch conversion over a directory.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub converted: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchOutcome {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Convert every supported image in `input_dir` into `output_dir` with
/// the given target extension, continuing past per-file failures.
pub fn convert_dir(input_dir: &Path, output_dir: &Path, extension: &str) -> Result<BatchOutcome> {
    // Validate the target before touching any file
    ImageFormat::from_extension(extension).ok_or_else(|| Error::UnsupportedImageFormat {
        extension: extension.to_string(),
    })?;

    let mut outcome = BatchOutcome::default();
    let entries = fs::read_dir(input_dir).map_err(|e| kit_fs::Error::io(input_dir, e))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_supported(&path) {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let output = output_dir.join(stem).with_extension(extension);
        match convert_image(&path, &output) {
            Ok(()) => outcome.converted += 1,
            Err(err) => outcome.failures.push((path, err.to_string())),
        }
    }

    Ok(outcome)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.iter().any(|s| e.eq_ignore_ascii_case(s)))
}
