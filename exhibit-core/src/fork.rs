//! Three-way fork mini game gating progress along the sketch map.
//!
//! The gate accepts one direction at a time. While the walk animation is in
//! flight, or while navigation is disabled by the caller, further choices are
//! ignored. Once the reset deadline passes the character returns to the
//! junction and the gate reopens.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Left,
    Straight,
    Right,
}

impl NavDirection {
    pub const ALL: [Self; 3] = [Self::Left, Self::Straight, Self::Right];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Straight => "straight",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Left => "fork.left",
            Self::Straight => "fork.straight",
            Self::Right => "fork.right",
        }
    }
}

impl fmt::Display for NavDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character position as percentages of the 320×200 sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForkPosition {
    pub left_pct: u8,
    pub top_pct: u8,
}

impl ForkPosition {
    #[must_use]
    pub const fn new(left_pct: u8, top_pct: u8) -> Self {
        Self { left_pct, top_pct }
    }

    /// Inline CSS placing the character marker.
    #[must_use]
    pub fn css(self) -> String {
        format!("left: {}%; top: {}%;", self.left_pct, self.top_pct)
    }
}

const fn default_reset_delay_ms() -> u64 {
    800
}

/// Tunables for the fork gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkConfig {
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    pub center: ForkPosition,
    pub left: ForkPosition,
    pub straight: ForkPosition,
    pub right: ForkPosition,
}

impl Default for ForkConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            center: ForkPosition::new(47, 46),
            left: ForkPosition::new(14, 30),
            straight: ForkPosition::new(47, 4),
            right: ForkPosition::new(78, 30),
        }
    }
}

impl ForkConfig {
    #[must_use]
    pub const fn position_for(&self, direction: NavDirection) -> ForkPosition {
        match direction {
            NavDirection::Left => self.left,
            NavDirection::Straight => self.straight,
            NavDirection::Right => self.right,
        }
    }
}

/// Cooldown gate for the fork choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkGate {
    config: ForkConfig,
    can_navigate: bool,
    animating: Option<NavDirection>,
    position: ForkPosition,
    reset_at_ms: Option<u64>,
}

impl Default for ForkGate {
    fn default() -> Self {
        Self::new(ForkConfig::default())
    }
}

impl ForkGate {
    #[must_use]
    pub const fn new(config: ForkConfig) -> Self {
        Self {
            position: config.center,
            config,
            can_navigate: true,
            animating: None,
            reset_at_ms: None,
        }
    }

    #[must_use]
    pub const fn with_navigation(mut self, can_navigate: bool) -> Self {
        self.can_navigate = can_navigate;
        self
    }

    pub const fn set_navigation(&mut self, can_navigate: bool) {
        self.can_navigate = can_navigate;
    }

    #[must_use]
    pub const fn config(&self) -> &ForkConfig {
        &self.config
    }

    #[must_use]
    pub const fn position(&self) -> ForkPosition {
        self.position
    }

    #[must_use]
    pub const fn animating(&self) -> Option<NavDirection> {
        self.animating
    }

    #[must_use]
    pub const fn reset_at_ms(&self) -> Option<u64> {
        self.reset_at_ms
    }

    /// Whether a choice made now would be accepted.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.can_navigate && self.animating.is_none()
    }

    /// Try to walk down `direction`. Returns the direction to report, or
    /// `None` when the gate is closed (state unchanged).
    pub fn choose(&mut self, direction: NavDirection, now_ms: u64) -> Option<NavDirection> {
        if !self.is_open() {
            log::debug!("fork choice {direction} ignored while gate is closed");
            return None;
        }
        self.animating = Some(direction);
        self.position = self.config.position_for(direction);
        self.reset_at_ms = Some(now_ms.saturating_add(self.config.reset_delay_ms));
        Some(direction)
    }

    /// Advance the clock. Returns `true` when the pending reset fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.reset_at_ms {
            Some(deadline) if now_ms >= deadline => {
                self.settle();
                true
            }
            _ => false,
        }
    }

    /// Return to the junction and reopen the gate immediately.
    pub const fn settle(&mut self) {
        self.animating = None;
        self.position = self.config.center;
        self.reset_at_ms = None;
    }
}
