use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Which of the two sentiment scores a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Polarity,
    Subjectivity,
}

impl ScoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Polarity => "polarity",
            ScoreKind::Subjectivity => "subjectivity",
        }
    }

    /// Closed range of valid values for this kind of score
    pub fn domain(&self) -> (f64, f64) {
        match self {
            ScoreKind::Polarity => (-1.0, 1.0),
            ScoreKind::Subjectivity => (0.0, 1.0),
        }
    }

    pub fn domain_label(&self) -> &'static str {
        match self {
            ScoreKind::Polarity => "[-1, 1]",
            ScoreKind::Subjectivity => "[0, 1]",
        }
    }
}

impl std::str::FromStr for ScoreKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polarity" => Ok(ScoreKind::Polarity),
            "subjectivity" => Ok(ScoreKind::Subjectivity),
            _ => Err(DashboardError::InvalidInput(format!(
                "Unknown score kind: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PolarityClass {
    #[serde(rename = "Extremely negative")]
    ExtremelyNegative,
    #[serde(rename = "Significantly negative")]
    SignificantlyNegative,
    #[serde(rename = "Fairly negative")]
    FairlyNegative,
    #[serde(rename = "Slightly negative")]
    SlightlyNegative,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Slightly positive")]
    SlightlyPositive,
    #[serde(rename = "Fairly positive")]
    FairlyPositive,
    #[serde(rename = "Significantly positive")]
    SignificantlyPositive,
    #[serde(rename = "Extremely positive")]
    ExtremelyPositive,
}

impl PolarityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarityClass::ExtremelyNegative => "Extremely negative",
            PolarityClass::SignificantlyNegative => "Significantly negative",
            PolarityClass::FairlyNegative => "Fairly negative",
            PolarityClass::SlightlyNegative => "Slightly negative",
            PolarityClass::Neutral => "Neutral",
            PolarityClass::SlightlyPositive => "Slightly positive",
            PolarityClass::FairlyPositive => "Fairly positive",
            PolarityClass::SignificantlyPositive => "Significantly positive",
            PolarityClass::ExtremelyPositive => "Extremely positive",
        }
    }
}

impl std::fmt::Display for PolarityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectivityClass {
    #[serde(rename = "Objective")]
    Objective,
    #[serde(rename = "Slightly subjective")]
    SlightlySubjective,
    #[serde(rename = "Moderately subjective")]
    ModeratelySubjective,
    #[serde(rename = "Fairly subjective")]
    FairlySubjective,
    #[serde(rename = "Extremely subjective")]
    ExtremelySubjective,
}

impl SubjectivityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectivityClass::Objective => "Objective",
            SubjectivityClass::SlightlySubjective => "Slightly subjective",
            SubjectivityClass::ModeratelySubjective => "Moderately subjective",
            SubjectivityClass::FairlySubjective => "Fairly subjective",
            SubjectivityClass::ExtremelySubjective => "Extremely subjective",
        }
    }
}

impl std::fmt::Display for SubjectivityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw output of a sentiment scorer, before classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_kind_from_str() {
        assert_eq!("polarity".parse::<ScoreKind>().unwrap(), ScoreKind::Polarity);
        assert_eq!(
            "Subjectivity".parse::<ScoreKind>().unwrap(),
            ScoreKind::Subjectivity
        );
        assert!(matches!(
            "valence".parse::<ScoreKind>(),
            Err(DashboardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&PolarityClass::SignificantlyPositive).unwrap();
        assert_eq!(json, "\"Significantly positive\"");

        let json = serde_json::to_string(&SubjectivityClass::Objective).unwrap();
        assert_eq!(json, "\"Objective\"");

        assert_eq!(PolarityClass::SlightlyNegative.to_string(), "Slightly negative");
    }
}
