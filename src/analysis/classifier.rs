//! Bucketing of continuous sentiment scores into ordered labels.
//!
//! Each score kind has a fixed table of rules evaluated top-down; the first
//! matching rule wins and the residual label covers whatever is left. Bounds
//! are strict, so the residual bucket is closed at the center.

use crate::domain::{PolarityClass, ScoreKind, SubjectivityClass};
use crate::errors::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Matches values strictly greater than the limit
    Above(f64),
    /// Matches values strictly less than the limit
    Below(f64),
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
        }
    }
}

#[derive(Debug)]
pub struct ThresholdTable<L: 'static> {
    pub kind: ScoreKind,
    pub rules: &'static [(Bound, L)],
    pub residual: L,
}

impl<L: Copy> ThresholdTable<L> {
    pub fn classify(&self, value: f64) -> DashboardResult<L> {
        let (low, high) = self.kind.domain();
        if !value.is_finite() || value < low || value > high {
            return Err(DashboardError::InvalidScore {
                kind: self.kind,
                value,
            });
        }

        Ok(self
            .rules
            .iter()
            .find(|(bound, _)| bound.matches(value))
            .map(|(_, label)| *label)
            .unwrap_or(self.residual))
    }
}

pub static POLARITY_THRESHOLDS: ThresholdTable<PolarityClass> = ThresholdTable {
    kind: ScoreKind::Polarity,
    rules: &[
        (Bound::Above(0.75), PolarityClass::ExtremelyPositive),
        (Bound::Above(0.5), PolarityClass::SignificantlyPositive),
        (Bound::Above(0.3), PolarityClass::FairlyPositive),
        (Bound::Above(0.1), PolarityClass::SlightlyPositive),
        (Bound::Below(-0.75), PolarityClass::ExtremelyNegative),
        (Bound::Below(-0.5), PolarityClass::SignificantlyNegative),
        (Bound::Below(-0.3), PolarityClass::FairlyNegative),
        (Bound::Below(-0.1), PolarityClass::SlightlyNegative),
    ],
    residual: PolarityClass::Neutral,
};

pub static SUBJECTIVITY_THRESHOLDS: ThresholdTable<SubjectivityClass> = ThresholdTable {
    kind: ScoreKind::Subjectivity,
    rules: &[
        (Bound::Above(0.75), SubjectivityClass::ExtremelySubjective),
        (Bound::Above(0.5), SubjectivityClass::FairlySubjective),
        (Bound::Above(0.3), SubjectivityClass::ModeratelySubjective),
        (Bound::Above(0.1), SubjectivityClass::SlightlySubjective),
    ],
    residual: SubjectivityClass::Objective,
};

pub fn classify_polarity(value: f64) -> DashboardResult<PolarityClass> {
    POLARITY_THRESHOLDS.classify(value)
}

pub fn classify_subjectivity(value: f64) -> DashboardResult<SubjectivityClass> {
    SUBJECTIVITY_THRESHOLDS.classify(value)
}

/// Label text for `value` interpreted as a score of `kind`
pub fn classify(value: f64, kind: ScoreKind) -> DashboardResult<&'static str> {
    match kind {
        ScoreKind::Polarity => classify_polarity(value).map(|c| c.as_str()),
        ScoreKind::Subjectivity => classify_subjectivity(value).map(|c| c.as_str()),
    }
}
