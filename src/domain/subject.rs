use serde::{Deserialize, Serialize};

/// Public figure whose press coverage is analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Trump,
    Harris,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::Trump, Subject::Harris];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Trump => "trump",
            Subject::Harris => "harris",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Trump => "Trump",
            Subject::Harris => "Harris",
        }
    }

    /// Guardian content API section holding this subject's coverage
    pub fn section(&self) -> &'static str {
        match self {
            Subject::Trump => "us-news/donaldtrump",
            Subject::Harris => "us-news/kamala-harris",
        }
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trump" | "donald" | "donaldtrump" => Ok(Subject::Trump),
            "harris" | "kamala" | "kamalaharris" => Ok(Subject::Harris),
            _ => Err(format!("Unknown subject: {}", s)),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_from_str() {
        assert_eq!("Trump".parse::<Subject>().unwrap(), Subject::Trump);
        assert_eq!("harris".parse::<Subject>().unwrap(), Subject::Harris);
        assert!("biden".parse::<Subject>().is_err());
    }

    #[test]
    fn test_sections() {
        assert_eq!(Subject::Harris.section(), "us-news/kamala-harris");
        assert_eq!(Subject::Trump.section(), "us-news/donaldtrump");
    }
}
