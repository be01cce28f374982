//! Map transparency demo: the visitor judges their readiness before and after
//! seeing an improved map, and the first judgement survives reloads within
//! the session.

use crate::settings::{Setting, SettingsStore, StoredLiteral};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STORAGE_KEY: &str = "map-transparency-decision";

const DECISION: Setting<Decision> = Setting::new(STORAGE_KEY);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Safe,
    Unsure,
    Unprepared,
}

impl Decision {
    pub const ALL: [Self; 3] = [Self::Safe, Self::Unsure, Self::Unprepared];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Unsure => "unsure",
            Self::Unprepared => "unprepared",
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Safe => "transparency.decision.safe",
            Self::Unsure => "transparency.decision.unsure",
            Self::Unprepared => "transparency.decision.unprepared",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StoredLiteral for Decision {
    fn to_literal(&self) -> &'static str {
        self.as_str()
    }

    fn from_literal(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Incomplete,
    Improved,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapTransparencyFlow {
    step: Step,
    decision: Option<Decision>,
}

impl MapTransparencyFlow {
    /// Start at the incomplete map with the session's earlier decision, if any.
    ///
    /// A read failure is logged and the flow starts without a decision.
    #[must_use]
    pub fn restore<S: SettingsStore>(store: &S) -> Self {
        let decision = DECISION.load(store).unwrap_or_else(|err| {
            log::warn!("could not read {STORAGE_KEY}: {err}");
            None
        });
        Self {
            step: Step::Incomplete,
            decision,
        }
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn decision(&self) -> Option<Decision> {
        self.decision
    }

    /// Record `decision`, persist it and move on to the improved map.
    ///
    /// The in-memory state advances even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write is rejected.
    pub fn decide<S: SettingsStore>(
        &mut self,
        decision: Decision,
        store: &S,
    ) -> Result<(), S::Error> {
        self.decision = Some(decision);
        self.step = Step::Improved;
        DECISION.save(store, &decision)
    }

    pub const fn compare(&mut self) {
        self.step = Step::Comparison;
    }

    /// Decision shown on the comparison screen.
    #[must_use]
    pub fn comparison_decision(&self) -> Decision {
        self.decision.unwrap_or(Decision::Unsure)
    }
}
