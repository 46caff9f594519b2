//! Progress Bar
//!
//! Maps a value within bounds to a fill level and a severity tag.

use std::fmt;

/// Severity tag derived from the fill level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// Bucket a fill level. Boundaries are exclusive: exactly 0.5 is success.
    pub fn for_percent(percent: f64) -> Self {
        if percent > 0.9 {
            Severity::Danger
        } else if percent > 0.7 {
            Severity::Warning
        } else if percent > 0.5 {
            Severity::Info
        } else {
            Severity::Success
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress bar inputs plus the severity derived from them
///
/// The severity is recomputed by every setter, never lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    min: f64,
    max: f64,
    value: f64,
    severity: Severity,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0.0, 100.0, 25.0)
    }
}

impl Progress {
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        let mut progress = Self {
            min,
            max,
            value,
            severity: Severity::Success,
        };
        progress.recompute();
        progress
    }

    pub fn set_min(&mut self, min: f64) {
        self.min = min;
        self.recompute();
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = max;
        self.recompute();
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.recompute();
    }

    /// Fill level, `(value - min) / max`
    ///
    /// Divides by `max`, not by the span `max - min`; the two only agree when
    /// `min` is zero.
    pub fn percent(&self) -> f64 {
        (self.value - self.min) / self.max
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    fn recompute(&mut self) {
        self.severity = Severity::for_percent(self.percent());
    }

    /// Text bar such as `[#####---------------]  25% success`
    pub fn render(&self, width: usize) -> String {
        let percent = self.percent();
        let fill = if percent.is_finite() {
            percent.clamp(0.0, 1.0)
        } else if percent > 0.0 {
            1.0
        } else {
            0.0
        };
        let filled = (fill * width as f64).round() as usize;

        format!(
            "[{}{}] {:>3.0}% {}",
            "#".repeat(filled),
            "-".repeat(width - filled),
            fill * 100.0,
            self.severity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let progress = Progress::default();
        assert_eq!(progress.percent(), 0.25);
        assert_eq!(progress.severity(), Severity::Success);
    }

    #[test]
    fn test_value_at_min_is_success() {
        let progress = Progress::new(10.0, 100.0, 10.0);
        assert_eq!(progress.severity(), Severity::Success);
    }

    #[test]
    fn test_buckets() {
        let mut progress = Progress::default();

        progress.set_value(50.0);
        assert_eq!(progress.severity(), Severity::Success);

        progress.set_value(51.0);
        assert_eq!(progress.severity(), Severity::Info);

        progress.set_value(70.0);
        assert_eq!(progress.severity(), Severity::Info);

        progress.set_value(71.0);
        assert_eq!(progress.severity(), Severity::Warning);

        progress.set_value(90.0);
        assert_eq!(progress.severity(), Severity::Warning);

        progress.set_value(91.0);
        assert_eq!(progress.severity(), Severity::Danger);
    }

    #[test]
    fn test_denominator_is_max() {
        // (60 - 20) / 80 = 0.5, success; the span would give 40 / 60 = 0.67
        let mut progress = Progress::new(20.0, 80.0, 60.0);
        assert_eq!(progress.percent(), 0.5);
        assert_eq!(progress.severity(), Severity::Success);

        // (65 - 20) / 80 = 0.5625
        progress.set_value(65.0);
        assert_eq!(progress.severity(), Severity::Info);

        progress.set_min(0.0);
        assert_eq!(progress.severity(), Severity::Warning);
    }

    #[test]
    fn test_set_max_recomputes() {
        let mut progress = Progress::new(0.0, 100.0, 80.0);
        assert_eq!(progress.severity(), Severity::Warning);

        progress.set_max(200.0);
        assert_eq!(progress.severity(), Severity::Success);
    }

    #[test]
    fn test_render() {
        let progress = Progress::new(0.0, 100.0, 50.0);
        assert_eq!(progress.render(10), "[#####-----]  50% success");

        let full = Progress::new(0.0, 10.0, 25.0);
        assert_eq!(full.render(4), "[####] 100% danger");
    }

    #[test]
    fn test_zero_max() {
        let progress = Progress::new(0.0, 0.0, 0.0);
        assert!(progress.percent().is_nan());
        assert_eq!(progress.severity(), Severity::Success);
        assert_eq!(progress.render(4), "[----]   0% success");
    }
}
