//! Export pipeline driver
//!
//! Drives the asynchronous capture: a short settle delay after focus is
//! released, a screenshot request, a crop to the chart rect, then a
//! background PNG encode whose completion is polled each frame. There is
//! no cancellation and no timeout; a failure is surfaced only when a
//! pipeline step itself fails.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::{ColorImage, Rect};
use parking_lot::Mutex;
use tracing::debug;

use ge_views::export::{self, ExportError};

/// Delay between surrendering focus and capturing, letting pending edit
/// commits settle before the frame is taken.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Settling { until: Instant },
    AwaitingCapture,
}

/// State machine for one export attempt.
pub struct ExportDriver {
    phase: Phase,
    /// Chart container rect recorded for the pending capture, in points.
    target: Option<Rect>,
    file_name: String,
    completion: Arc<Mutex<Option<Result<PathBuf, ExportError>>>>,
}

impl Default for ExportDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportDriver {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            target: None,
            file_name: String::new(),
            completion: Arc::new(Mutex::new(None)),
        }
    }

    /// Start an attempt. Fails up front when no chart has been rendered
    /// yet; otherwise arms the settle timer.
    pub fn begin(&mut self, target: Option<Rect>, title: &str) -> Result<(), ExportError> {
        let rect = target.ok_or(ExportError::MissingRenderTarget)?;
        self.target = Some(rect);
        self.file_name = export::export_file_name(title);
        self.phase = Phase::Settling {
            until: Instant::now() + SETTLE_DELAY,
        };
        debug!(file_name = %self.file_name, "export armed");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// True exactly once, when the settle delay has elapsed and the frame
    /// should request a screenshot.
    pub fn wants_capture(&mut self, now: Instant) -> bool {
        if let Phase::Settling { until } = self.phase {
            if now >= until {
                self.phase = Phase::AwaitingCapture;
                return true;
            }
        }
        false
    }

    /// Consume the screenshot delivered after a capture request: crop it
    /// to the chart rect, ask for a destination, then encode off-thread.
    /// A cancelled save dialog ends the attempt silently.
    pub fn on_capture(&mut self, screenshot: &ColorImage, pixels_per_point: f32) {
        if self.phase != Phase::AwaitingCapture {
            return;
        }
        self.phase = Phase::Idle;
        let Some(rect) = self.target.take() else {
            return;
        };

        let cropped = screenshot.region(&rect, Some(pixels_per_point));

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export chart as PNG")
            .add_filter("PNG Image", &["png"])
            .set_file_name(&self.file_name)
            .save_file()
        else {
            return;
        };

        let completion = self.completion.clone();
        std::thread::spawn(move || {
            let result = export::save_png(&path, &cropped).map(|()| path);
            *completion.lock() = Some(result);
        });
    }

    /// Poll for a finished background encode.
    pub fn take_completion(&mut self) -> Option<Result<PathBuf, ExportError>> {
        self.completion.lock().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_without_render_target_fails() {
        let mut driver = ExportDriver::new();
        let result = driver.begin(None, "My Chart");
        assert_eq!(result, Err(ExportError::MissingRenderTarget));
        assert!(!driver.is_active());
    }

    #[test]
    fn test_begin_arms_settle_timer() {
        let mut driver = ExportDriver::new();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 80.0));
        driver.begin(Some(rect), "My Chart").unwrap();

        assert!(driver.is_active());
        assert!(!driver.wants_capture(Instant::now()));
        assert!(driver.wants_capture(Instant::now() + SETTLE_DELAY + Duration::from_millis(10)));
        // Only one capture request per attempt.
        assert!(!driver.wants_capture(Instant::now() + SETTLE_DELAY + Duration::from_millis(20)));
        assert_eq!(driver.file_name, "My_Chart.png");
    }
}
