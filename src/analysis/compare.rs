use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{Subject, SubjectReport};

/// Words that appear in only one of the two corpora, as `(a_only, b_only)`
pub fn unique_words<S: AsRef<str>>(a: &[S], b: &[S]) -> (BTreeSet<String>, BTreeSet<String>) {
    let words_a = vocabulary(a);
    let words_b = vocabulary(b);

    let a_only = words_a.difference(&words_b).cloned().collect();
    let b_only = words_b.difference(&words_a).cloned().collect();
    (a_only, b_only)
}

fn vocabulary<S: AsRef<str>>(texts: &[S]) -> BTreeSet<String> {
    texts
        .iter()
        .flat_map(|t| t.as_ref().split_whitespace())
        .map(str::to_string)
        .collect()
}

/// Most frequent tokens, by count descending then alphabetically
pub fn word_frequencies<S: AsRef<str>>(texts: &[S], max_words: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in texts.iter().flat_map(|t| t.as_ref().split_whitespace()) {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);
    ranked
}

/// Count of articles per label
pub fn label_distribution<I, L>(labels: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = L>,
    L: std::fmt::Display,
{
    let mut distribution = BTreeMap::new();
    for label in labels {
        *distribution.entry(label.to_string()).or_insert(0) += 1;
    }
    distribution
}

/// Five-number summary plus mean of a score series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ScoreSummary {
    /// `None` for an empty series. NaN values are ignored.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Some(Self {
            count,
            mean,
            min: sorted[0],
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q3: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub subject: Subject,
    pub articles: usize,
    pub polarity: Option<ScoreSummary>,
    pub subjectivity: Option<ScoreSummary>,
    pub polarity_labels: BTreeMap<String, usize>,
    pub subjectivity_labels: BTreeMap<String, usize>,
    pub top_words: Vec<(String, usize)>,
}

impl SubjectStats {
    pub fn from_report(report: &SubjectReport, max_words: usize) -> Self {
        Self {
            subject: report.subject,
            articles: report.articles.len(),
            polarity: ScoreSummary::from_values(&report.polarities()),
            subjectivity: ScoreSummary::from_values(&report.subjectivities()),
            polarity_labels: label_distribution(report.articles.iter().map(|a| a.polarity_class)),
            subjectivity_labels: label_distribution(
                report.articles.iter().map(|a| a.subjectivity_class),
            ),
            top_words: word_frequencies(&report.cleaned, max_words),
        }
    }
}

/// Side-by-side statistics of two subjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: SubjectStats,
    pub right: SubjectStats,
    pub left_only_words: BTreeSet<String>,
    pub right_only_words: BTreeSet<String>,
}

impl Comparison {
    pub fn build(left: &SubjectReport, right: &SubjectReport, max_words: usize) -> Self {
        let (left_only_words, right_only_words) = unique_words(&left.cleaned, &right.cleaned);

        Self {
            left: SubjectStats::from_report(left, max_words),
            right: SubjectStats::from_report(right, max_words),
            left_only_words,
            right_only_words,
        }
    }

    /// Top words of one side that the other side never uses
    pub fn highlighted(stats: &SubjectStats, unique: &BTreeSet<String>) -> Vec<String> {
        stats
            .top_words
            .iter()
            .filter(|(word, _)| unique.contains(word))
            .map(|(word, _)| word.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::TextNormalizer;
    use crate::domain::{Article, ExtractedArticle, PolarityClass, SentimentScore};

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_unique_words() {
        let a = vec!["border wall rally", "rally tariff"];
        let b = vec!["rally abortion", "border policy"];

        let (a_only, b_only) = unique_words(&a, &b);
        assert_eq!(a_only, set(&["tariff", "wall"]));
        assert_eq!(b_only, set(&["abortion", "policy"]));
    }

    #[test]
    fn test_unique_words_is_symmetric() {
        let a = vec!["economy inflation"];
        let b = vec!["economy healthcare"];

        let (a_only, b_only) = unique_words(&a, &b);
        let (b_only_swapped, a_only_swapped) = unique_words(&b, &a);
        assert_eq!(a_only, a_only_swapped);
        assert_eq!(b_only, b_only_swapped);
    }

    #[test]
    fn test_unique_words_with_itself_is_empty() {
        let a = vec!["economy inflation", "rally"];
        let (a_only, b_only) = unique_words(&a, &a);
        assert!(a_only.is_empty());
        assert!(b_only.is_empty());
    }

    #[test]
    fn test_word_frequencies_ranking() {
        let texts = vec!["vote vote rally", "rally vote debate", "ballot"];
        let ranked = word_frequencies(&texts, 3);

        assert_eq!(
            ranked,
            vec![
                ("vote".to_string(), 3),
                ("rally".to_string(), 2),
                ("ballot".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_score_summary() {
        let summary = ScoreSummary::from_values(&[0.4, -0.2, 0.1, 0.3]).unwrap();

        assert_eq!(summary.count, 4);
        assert!((summary.mean - 0.15).abs() < 1e-12);
        assert_eq!(summary.min, -0.2);
        assert_eq!(summary.max, 0.4);
        assert!((summary.median - 0.2).abs() < 1e-12);
        assert!((summary.q1 - 0.025).abs() < 1e-12);
        assert!((summary.q3 - 0.325).abs() < 1e-12);
    }

    #[test]
    fn test_score_summary_of_empty_series() {
        assert_eq!(ScoreSummary::from_values(&[]), None);
    }

    #[test]
    fn test_label_distribution() {
        let distribution = label_distribution([
            PolarityClass::Neutral,
            PolarityClass::SlightlyPositive,
            PolarityClass::Neutral,
        ]);

        assert_eq!(distribution.get("Neutral"), Some(&2));
        assert_eq!(distribution.get("Slightly positive"), Some(&1));
    }

    fn report(subject: Subject, contents: &[(&str, f64)]) -> SubjectReport {
        let articles = contents
            .iter()
            .map(|(content, polarity)| {
                Article::classified(
                    ExtractedArticle::new(
                        "https://example.com".to_string(),
                        "Title".to_string(),
                        content.to_string(),
                    ),
                    SentimentScore::new(*polarity, 0.5),
                )
                .unwrap()
            })
            .collect();
        SubjectReport::new(subject, articles, &TextNormalizer::default())
    }

    #[test]
    fn test_comparison_build() {
        let trump = report(
            Subject::Trump,
            &[("Tariffs and the border wall", 0.2), ("The rally in Ohio", -0.4)],
        );
        let harris = report(Subject::Harris, &[("Abortion rights and the border", 0.6)]);

        let comparison = Comparison::build(&trump, &harris, 10);

        assert_eq!(comparison.left.articles, 2);
        assert_eq!(comparison.right.articles, 1);
        assert_eq!(comparison.left_only_words, set(&["ohio", "rally", "tariff", "wall"]));
        assert_eq!(comparison.right_only_words, set(&["abortion", "right"]));
        assert_eq!(comparison.left.polarity_labels.get("Fairly negative"), Some(&1));
        assert_eq!(
            comparison.right.subjectivity_labels.get("Moderately subjective"),
            Some(&1)
        );

        let highlighted = Comparison::highlighted(&comparison.right, &comparison.right_only_words);
        assert_eq!(highlighted, vec!["abortion", "right"]);
    }
}
