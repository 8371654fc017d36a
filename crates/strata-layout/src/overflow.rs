//! Overflow decision for the horizontal tab strip

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::Result;

/// Rendered sizes of the horizontal strip, as measured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripMetrics {
    /// Width of the strip container
    pub strip_width: f64,
    /// Width of each rendered tab, display order
    pub tab_widths: Vec<f64>,
}

impl StripMetrics {
    pub fn new(strip_width: f64, tab_widths: Vec<f64>) -> Self {
        Self {
            strip_width,
            tab_widths,
        }
    }

    /// `count` tabs of the same width.
    pub fn uniform(strip_width: f64, count: usize, tab_width: f64) -> Self {
        Self::new(strip_width, vec![tab_width; count])
    }

    fn validate(&self) -> Result<()> {
        check("strip width", self.strip_width)?;
        for width in &self.tab_widths {
            check("tab width", *width)?;
        }
        Ok(())
    }
}

/// Spacing rules applied when measuring the strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverflowPolicy {
    /// Gap allowance added per tab
    pub tab_gap: f64,
    /// Strip width reserved for padding and the new-tab control
    pub reserved_width: f64,
}

impl OverflowPolicy {
    pub fn new(tab_gap: f64, reserved_width: f64) -> Result<Self> {
        check("tab gap", tab_gap)?;
        check("reserved width", reserved_width)?;
        Ok(Self {
            tab_gap,
            reserved_width,
        })
    }

    /// Width the tabs need, gaps included.
    pub fn required_width(&self, metrics: &StripMetrics) -> f64 {
        metrics
            .tab_widths
            .iter()
            .map(|width| width + self.tab_gap)
            .sum()
    }

    /// Width left for tabs once the reserved space is taken out.
    pub fn available_width(&self, metrics: &StripMetrics) -> f64 {
        metrics.strip_width - self.reserved_width
    }

    /// True when the tabs don't fit the strip.
    pub fn overflows(&self, metrics: &StripMetrics) -> Result<bool> {
        metrics.validate()?;
        Ok(self.required_width(metrics) > self.available_width(metrics))
    }
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self {
            tab_gap: 4.0,
            reserved_width: 40.0,
        }
    }
}

fn check(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidMeasurement { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_width_includes_gaps() {
        let policy = OverflowPolicy::default();
        let metrics = StripMetrics::new(500.0, vec![100.0, 120.0]);
        assert_eq!(policy.required_width(&metrics), 228.0);
        assert_eq!(policy.available_width(&metrics), 460.0);
    }

    #[test]
    fn test_overflow_boundary() {
        let policy = OverflowPolicy::default();

        // 3 * (148 + 4) = 456 against 500 - 40 = 460
        assert!(!policy.overflows(&StripMetrics::uniform(500.0, 3, 148.0)).unwrap());
        // Exactly full still fits
        assert!(!policy.overflows(&StripMetrics::uniform(496.0, 3, 148.0)).unwrap());
        assert!(policy.overflows(&StripMetrics::uniform(495.0, 3, 148.0)).unwrap());
    }

    #[test]
    fn test_narrow_strip_overflows_with_any_tab() {
        let policy = OverflowPolicy::default();
        assert!(policy.overflows(&StripMetrics::uniform(30.0, 1, 0.0)).unwrap());
        assert!(!policy.overflows(&StripMetrics::uniform(40.0, 0, 0.0)).unwrap());
    }

    #[test]
    fn test_invalid_measurements() {
        let policy = OverflowPolicy::default();
        assert!(policy
            .overflows(&StripMetrics::new(f64::NAN, vec![]))
            .is_err());
        assert!(policy
            .overflows(&StripMetrics::new(100.0, vec![-1.0]))
            .is_err());
        assert!(OverflowPolicy::new(-4.0, 40.0).is_err());
    }
}
