//! Chart image export
//!
//! The dependency boundary stays narrow: a captured `ColorImage` plus a
//! destination path go in, a PNG on disk or a typed failure comes out.
//! Failure classification is a substring heuristic over the reported
//! message.

use std::path::Path;

use egui::{Color32, ColorImage};
use thiserror::Error;
use tracing::debug;

/// Filename stem used when the chart title is blank.
pub const DEFAULT_FILE_STEM: &str = "chart";

/// Exported images are flattened onto a solid white background.
pub const EXPORT_BACKGROUND: Color32 = Color32::WHITE;

/// Failures an export attempt can surface. All are recoverable; the user
/// may retry immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Export was requested before any chart was rendered.
    #[error("no rendered chart is available to capture")]
    MissingRenderTarget,

    /// The capture, encode or write step failed.
    #[error("{0}")]
    Rasterization(String),
}

impl ExportError {
    /// User-facing message. Rasterization failures that mention an
    /// unreachable resource get a loading hint prefixed; everything else
    /// passes through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::MissingRenderTarget => self.to_string(),
            ExportError::Rasterization(message) => {
                if message.contains("Resource") {
                    format!(
                        "An external resource (e.g. an image) could not be loaded for the export. {message}"
                    )
                } else {
                    message.clone()
                }
            }
        }
    }
}

/// Filename stem synthesized from the chart title: whitespace runs become
/// underscores; a blank title falls back to the default stem.
pub fn file_stem(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_FILE_STEM.to_owned()
    } else {
        trimmed.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

pub fn export_file_name(title: &str) -> String {
    format!("{}.png", file_stem(title))
}

/// Flatten the capture onto an opaque background, returning RGBA bytes.
/// `Color32` pixels are premultiplied, so the source channels are already
/// scaled and the background contributes the remainder.
pub fn flatten_onto(capture: &ColorImage, background: Color32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(capture.pixels.len() * 4);
    for pixel in &capture.pixels {
        let inverse = 255 - pixel.a() as u32;
        bytes.push((pixel.r() as u32 + background.r() as u32 * inverse / 255) as u8);
        bytes.push((pixel.g() as u32 + background.g() as u32 * inverse / 255) as u8);
        bytes.push((pixel.b() as u32 + background.b() as u32 * inverse / 255) as u8);
        bytes.push(255);
    }
    bytes
}

/// Encode the capture as a PNG at `path`, flattened onto the export
/// background.
pub fn save_png(path: &Path, capture: &ColorImage) -> Result<(), ExportError> {
    debug!(path = %path.display(), "encoding chart capture");
    let pixels = flatten_onto(capture, EXPORT_BACKGROUND);
    image::save_buffer(
        path,
        &pixels,
        capture.width() as u32,
        capture.height() as u32,
        image::ColorType::Rgba8,
    )
    .map_err(|error| ExportError::Rasterization(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_replaces_whitespace() {
        assert_eq!(file_stem("My Chart!"), "My_Chart!");
        assert_eq!(file_stem("a  b\tc"), "a_b_c");
        assert_eq!(file_stem("  padded title  "), "padded_title");
    }

    #[test]
    fn test_file_stem_falls_back_when_blank() {
        assert_eq!(file_stem(""), "chart");
        assert_eq!(file_stem("   "), "chart");
    }

    #[test]
    fn test_export_file_name_appends_extension() {
        assert_eq!(export_file_name("My Chart!"), "My_Chart!.png");
        assert_eq!(export_file_name(""), "chart.png");
    }

    #[test]
    fn test_resource_failures_get_a_hint() {
        let error = ExportError::Rasterization("Resource at http://x could not be fetched".to_owned());
        let message = error.user_message();
        assert!(message.starts_with("An external resource"));
        assert!(message.contains("could not be fetched"));
    }

    #[test]
    fn test_generic_failures_pass_through() {
        let error = ExportError::Rasterization("permission denied".to_owned());
        assert_eq!(error.user_message(), "permission denied");
    }

    #[test]
    fn test_missing_render_target_message() {
        let error = ExportError::MissingRenderTarget;
        assert_eq!(error.user_message(), "no rendered chart is available to capture");
    }

    #[test]
    fn test_flatten_fills_transparency_with_background() {
        let capture = ColorImage {
            size: [2, 1],
            pixels: vec![Color32::TRANSPARENT, Color32::from_rgb(10, 20, 30)],
        };
        let bytes = flatten_onto(&capture, Color32::WHITE);
        assert_eq!(&bytes[..4], &[255, 255, 255, 255]);
        assert_eq!(&bytes[4..], &[10, 20, 30, 255]);
    }
}
