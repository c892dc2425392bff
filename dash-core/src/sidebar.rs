//! Sidebar expand/collapse state machine.
//!
//! Two states, one `toggle` transition in each direction, initial state
//! `Expanded`. Width and label visibility are a pure function of the state;
//! [`SidebarTransition`] only describes how the displayed width moves between
//! the two widths and carries no state of its own.

use crate::config::SidebarConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    /// Flip between `Expanded` and `Collapsed`.
    ///
    /// ```
    /// use dash_core::sidebar::SidebarState;
    ///
    /// let mut state = SidebarState::default();
    /// state.toggle();
    /// assert_eq!(state, SidebarState::Collapsed);
    /// state.toggle();
    /// assert_eq!(state, SidebarState::Expanded);
    /// ```
    pub fn toggle(&mut self) {
        *self = self.toggled();
        log::debug!("sidebar toggled to {:?}", self);
    }

    pub const fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, SidebarState::Expanded)
    }

    /// Labels are shown next to icons only when expanded.
    pub const fn labels_visible(self) -> bool {
        self.is_expanded()
    }

    /// Resting width for this state.
    pub fn width(self, config: &SidebarConfig) -> f64 {
        match self {
            SidebarState::Expanded => config.expanded_width,
            SidebarState::Collapsed => config.collapsed_width,
        }
    }
}

/// Width animation toward a target state.
///
/// `from` is whatever width is on screen when the toggle happens, so a toggle
/// in the middle of an animation reverses smoothly from the current width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarTransition {
    target: SidebarState,
    from: f64,
    to: f64,
    duration_ms: f64,
    label_delay_ms: f64,
    label_fade_ms: f64,
}

impl SidebarTransition {
    pub fn start(target: SidebarState, current_width: f64, config: &SidebarConfig) -> Self {
        Self {
            target,
            from: current_width,
            to: target.width(config),
            duration_ms: config.transition_ms.max(0.0),
            label_delay_ms: config.label_delay_ms.max(0.0),
            label_fade_ms: config.label_fade_ms.max(0.0),
        }
    }

    pub fn target(&self) -> SidebarState {
        self.target
    }

    /// Linear progress of the width animation in `[0, 1]`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn width_at(&self, elapsed_ms: f64) -> f64 {
        let t = ease_in_out(self.progress(elapsed_ms));
        self.from + (self.to - self.from) * t
    }

    /// Label opacity: fades in after a delay when expanding, hidden when collapsing.
    pub fn label_opacity_at(&self, elapsed_ms: f64) -> f64 {
        if !self.target.labels_visible() {
            return 0.0;
        }
        let shown_for = elapsed_ms - self.label_delay_ms;
        if shown_for < 0.0 {
            0.0
        } else if self.label_fade_ms <= 0.0 {
            1.0
        } else {
            (shown_for / self.label_fade_ms).min(1.0)
        }
    }

    /// Time until both the width and the label fade have settled.
    pub fn total_ms(&self) -> f64 {
        if self.target.labels_visible() {
            self.duration_ms.max(self.label_delay_ms + self.label_fade_ms)
        } else {
            self.duration_ms
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms()
    }
}

/// Quadratic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded() {
        assert_eq!(SidebarState::default(), SidebarState::Expanded);
        assert!(SidebarState::default().is_expanded());
    }

    #[test]
    fn toggle_parity() {
        for clicks in 0..10 {
            let mut state = SidebarState::default();
            for _ in 0..clicks {
                state.toggle();
            }
            assert_eq!(state.is_expanded(), clicks % 2 == 0, "after {clicks} clicks");
        }
    }

    #[test]
    fn width_and_labels_follow_state() {
        let config = SidebarConfig::default();
        assert_eq!(SidebarState::Expanded.width(&config), 256.0);
        assert!(SidebarState::Expanded.labels_visible());
        assert_eq!(SidebarState::Collapsed.width(&config), 80.0);
        assert!(!SidebarState::Collapsed.labels_visible());
    }

    #[test]
    fn transition_endpoints() {
        let config = SidebarConfig::default();
        let collapse = SidebarTransition::start(SidebarState::Collapsed, 256.0, &config);
        assert_eq!(collapse.width_at(0.0), 256.0);
        assert_eq!(collapse.width_at(300.0), 80.0);
        assert_eq!(collapse.width_at(10_000.0), 80.0);
        assert_eq!(collapse.width_at(-50.0), 256.0);
        assert!(collapse.is_finished(300.0));
        assert!(!collapse.is_finished(299.0));
    }

    #[test]
    fn transition_is_monotone() {
        let config = SidebarConfig::default();
        let expand = SidebarTransition::start(SidebarState::Expanded, 80.0, &config);
        let mut last = expand.width_at(0.0);
        for ms in (0..=300).step_by(10) {
            let width = expand.width_at(ms as f64);
            assert!(width >= last, "width shrank at {ms}ms");
            last = width;
        }
        assert_eq!(last, 256.0);
    }

    #[test]
    fn reversal_starts_from_displayed_width() {
        let config = SidebarConfig::default();
        let collapse = SidebarTransition::start(SidebarState::Collapsed, 256.0, &config);
        let midway = collapse.width_at(150.0);
        assert!(midway < 256.0 && midway > 80.0);

        let expand = SidebarTransition::start(SidebarState::Expanded, midway, &config);
        assert_eq!(expand.width_at(0.0), midway);
        assert_eq!(expand.width_at(300.0), 256.0);
    }

    #[test]
    fn labels_fade_in_after_delay() {
        let config = SidebarConfig::default();
        let expand = SidebarTransition::start(SidebarState::Expanded, 80.0, &config);
        assert_eq!(expand.label_opacity_at(0.0), 0.0);
        assert_eq!(expand.label_opacity_at(300.0), 0.0);
        assert!((expand.label_opacity_at(400.0) - 0.5).abs() < 1e-9);
        assert_eq!(expand.label_opacity_at(500.0), 1.0);
        assert_eq!(expand.total_ms(), 500.0);

        let collapse = SidebarTransition::start(SidebarState::Collapsed, 256.0, &config);
        assert_eq!(collapse.label_opacity_at(0.0), 0.0);
        assert_eq!(collapse.total_ms(), 300.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let config = SidebarConfig {
            transition_ms: 0.0,
            label_delay_ms: 0.0,
            label_fade_ms: 0.0,
            ..SidebarConfig::default()
        };
        let expand = SidebarTransition::start(SidebarState::Expanded, 80.0, &config);
        assert_eq!(expand.width_at(0.0), 256.0);
        assert_eq!(expand.label_opacity_at(0.0), 1.0);
        assert!(expand.is_finished(0.0));
    }
}
