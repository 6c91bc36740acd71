/// Terminal result of one scan invocation.
///
/// `Exhausted` is a normal outcome of the search (no QR code detected in the
/// image), not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A transform produced pixels the decode provider could read.
    Succeeded(String),
    /// Every transform was attempted, none yielded a payload.
    Exhausted,
    /// The caller abandoned the scan between transform attempts.
    Cancelled,
}

impl ScanOutcome {
    /// The decoded payload, if the scan succeeded.
    pub fn payload(&self) -> Option<&str> {
        match self {
            ScanOutcome::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    /// Whether the scan found a QR code.
    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Succeeded(_))
    }
}

/// Stage-level counters for one scan invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTelemetry {
    /// Transforms attempted before the scan terminated.
    pub attempts: usize,
    /// Attempts skipped because rendering failed.
    pub render_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accessor() {
        let ok = ScanOutcome::Succeeded("https://example.com/doc.pdf".into());
        assert_eq!(ok.payload(), Some("https://example.com/doc.pdf"));
        assert!(ok.is_success());
        assert_eq!(ScanOutcome::Exhausted.payload(), None);
        assert!(!ScanOutcome::Cancelled.is_success());
    }
}
