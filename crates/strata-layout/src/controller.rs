//! Layout controller
//!
//! Owns the layout mode and the vertical strip view. Overflow can only push
//! the layout to vertical; going back to horizontal takes an explicit
//! toggle.

use crate::mode::LayoutMode;
use crate::overflow::{OverflowPolicy, StripMetrics};
use crate::vertical::{StripItem, VerticalStrip};
use crate::Result;

#[derive(Debug, Clone)]
pub struct LayoutController {
    mode: LayoutMode,
    policy: OverflowPolicy,
    vertical: Option<VerticalStrip>,
    revision: u64,
}

impl LayoutController {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self {
            mode: LayoutMode::Horizontal,
            policy,
            vertical: None,
            revision: 0,
        }
    }

    /// Switch to vertical when the measured tabs overflow the strip.
    /// Returns true when the mode changed.
    pub fn check_overflow(&mut self, metrics: &StripMetrics) -> Result<bool> {
        if !self.policy.overflows(metrics)? {
            return Ok(false);
        }

        if self.mode.is_vertical() {
            return Ok(false);
        }

        tracing::info!(
            required = self.policy.required_width(metrics),
            available = self.policy.available_width(metrics),
            "Tab strip overflow, switching to vertical tabs"
        );
        self.mode = LayoutMode::Vertical;
        Ok(true)
    }

    /// Flip the layout mode. Returns the new mode.
    pub fn toggle(&mut self) -> LayoutMode {
        self.mode = self.mode.toggled();
        tracing::info!(mode = %self.mode, "Toggled tab layout");
        self.mode
    }

    /// Re-derive the vertical view from the current tab list. In horizontal
    /// mode the vertical view is dropped.
    pub fn update(&mut self, items: impl IntoIterator<Item = StripItem>) {
        if self.mode.is_vertical() {
            self.revision += 1;
            self.vertical = Some(VerticalStrip::build(items, self.revision));
        } else {
            self.vertical = None;
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn policy(&self) -> &OverflowPolicy {
        &self.policy
    }

    /// The vertical list is shown exactly when the mode is vertical.
    pub fn is_vertical_visible(&self) -> bool {
        self.mode.is_vertical()
    }

    pub fn vertical_strip(&self) -> Option<&VerticalStrip> {
        self.vertical.as_ref()
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}
