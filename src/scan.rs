//! The strategy runner: try each transform in schedule order, render then
//! decode, and stop at the first hit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::decode::{DecodeOptions, DecodeProvider};
use crate::models::{ScanOutcome, ScanTelemetry, SourceImage};
use crate::render::SurfaceProvider;
use crate::schedule::TransformSchedule;

/// Cooperative cancellation flag, checked between transform attempts.
///
/// Individual attempts are bounded and transient, so there is no forced
/// preemption; a cancelled scan finishes its current attempt and returns
/// [`ScanOutcome::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from another thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Iterates a [`TransformSchedule`] against one source image, rendering and
/// decoding each transform in order until the first success or exhaustion.
///
/// Providers are passed in explicitly; the scanner holds no ambient state
/// and nothing persists across invocations.
#[derive(Debug, Clone)]
pub struct Scanner<S, D> {
    surface: S,
    decoder: D,
    schedule: TransformSchedule,
    options: DecodeOptions,
}

impl<S: SurfaceProvider, D: DecodeProvider> Scanner<S, D> {
    /// Create a scanner from explicit providers and a schedule.
    pub fn new(surface: S, decoder: D, schedule: TransformSchedule) -> Self {
        Self {
            surface,
            decoder,
            schedule,
            options: DecodeOptions::default(),
        }
    }

    /// Override the decode options (default: both polarities).
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// The schedule this scanner iterates.
    pub fn schedule(&self) -> &TransformSchedule {
        &self.schedule
    }

    /// The rendering-surface provider.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The decode provider.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Run the full strategy against one source image.
    ///
    /// First match wins: the first transform whose rendered output decodes
    /// terminates the scan. A render failure on one transform is treated as
    /// "no code found" for that transform and iteration continues.
    pub fn scan(&self, source: &SourceImage) -> ScanOutcome {
        self.run(source, None).0
    }

    /// Like [`scan`](Self::scan), but also returns per-invocation counters.
    pub fn scan_with_telemetry(&self, source: &SourceImage) -> (ScanOutcome, ScanTelemetry) {
        self.run(source, None)
    }

    /// Like [`scan`](Self::scan), checking `cancel` between attempts.
    pub fn scan_with_cancel(&self, source: &SourceImage, cancel: &CancelToken) -> ScanOutcome {
        self.run(source, Some(cancel)).0
    }

    fn run(
        &self,
        source: &SourceImage,
        cancel: Option<&CancelToken>,
    ) -> (ScanOutcome, ScanTelemetry) {
        let mut telemetry = ScanTelemetry::default();

        for (idx, transform) in self.schedule.iter().enumerate() {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    debug!(attempt = idx + 1, "scan cancelled");
                    return (ScanOutcome::Cancelled, telemetry);
                }
            }

            telemetry.attempts += 1;
            let pixels = match self.surface.render(source, transform) {
                Ok(pixels) => pixels,
                Err(err) => {
                    debug!(attempt = idx + 1, %err, "render failed, skipping transform");
                    telemetry.render_failures += 1;
                    continue;
                }
            };

            if let Some(decoded) = self.decoder.decode(&pixels, &self.options) {
                debug!(attempt = idx + 1, "decode succeeded");
                return (ScanOutcome::Succeeded(decoded.payload), telemetry);
            }
        }

        debug!(attempts = telemetry.attempts, "schedule exhausted");
        (ScanOutcome::Exhausted, telemetry)
    }
}
