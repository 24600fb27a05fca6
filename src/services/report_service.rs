use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::compare::{Comparison, ScoreSummary, SubjectStats};
use crate::domain::SubjectReport;
use crate::errors::DashboardResult;

/// Everything a presentation layer needs to draw the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub subjects: Vec<SubjectReport>,
    pub comparison: Option<Comparison>,
}

impl Dashboard {
    pub fn new(subjects: Vec<SubjectReport>, comparison: Option<Comparison>) -> Self {
        Self {
            generated_at: Utc::now(),
            subjects,
            comparison,
        }
    }
}

/// Plain-text rendering of reports and comparisons
pub struct ReportService {
    title_width: usize,
}

impl ReportService {
    pub fn new(title_width: usize) -> Self {
        Self { title_width }
    }

    /// Article table: title, polarity score and label, subjectivity score and label
    pub fn article_table(&self, report: &SubjectReport) -> String {
        let mut out = String::new();
        let width = self.title_width;

        let _ = writeln!(
            out,
            "{:<width$}  {:>14}  {:<22}  {:>18}  {:<21}",
            "Article Title", "Polarity Score", "Polarity", "Subjectivity Score", "Subjectivity",
        );
        let _ = writeln!(out, "{}", "-".repeat(width + 2 + 14 + 2 + 22 + 2 + 18 + 2 + 21));

        for article in &report.articles {
            let _ = writeln!(
                out,
                "{:<width$}  {:>14.3}  {:<22}  {:>18.3}  {:<21}",
                truncate_title(&article.title, width),
                article.polarity,
                article.polarity_class.as_str(),
                article.subjectivity,
                article.subjectivity_class.as_str(),
            );
        }

        out
    }

    pub fn top_words(&self, words: &[(String, usize)]) -> String {
        if words.is_empty() {
            return "  (no words)\n".to_string();
        }

        let mut out = String::new();
        for (word, count) in words {
            let _ = writeln!(out, "  {:<20} {}", word, count);
        }
        out
    }

    /// Summaries, label distributions and distinctive words of both sides
    pub fn comparison(&self, comparison: &Comparison, sample: usize) -> String {
        let mut out = String::new();
        let left = comparison.left.subject.display_name();
        let right = comparison.right.subject.display_name();

        let _ = writeln!(out, "Comparing sentiment between {} and {} articles\n", left, right);

        let _ = writeln!(out, "Polarity");
        write_summary_row(&mut out, left, comparison.left.polarity.as_ref());
        write_summary_row(&mut out, right, comparison.right.polarity.as_ref());
        let _ = writeln!(out);

        let _ = writeln!(out, "Subjectivity");
        write_summary_row(&mut out, left, comparison.left.subjectivity.as_ref());
        write_summary_row(&mut out, right, comparison.right.subjectivity.as_ref());
        let _ = writeln!(out);

        for stats in [&comparison.left, &comparison.right] {
            write_distribution(&mut out, stats);
        }

        for (stats, unique) in [
            (&comparison.left, &comparison.left_only_words),
            (&comparison.right, &comparison.right_only_words),
        ] {
            let highlighted = Comparison::highlighted(stats, unique);
            let _ = writeln!(
                out,
                "Words only in {} coverage ({} total): {}",
                stats.subject.display_name(),
                unique.len(),
                if highlighted.is_empty() {
                    "-".to_string()
                } else {
                    highlighted.into_iter().take(sample).collect::<Vec<_>>().join(", ")
                }
            );
        }

        out
    }

    pub fn to_json(&self, dashboard: &Dashboard) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(dashboard)?)
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(60)
    }
}

fn write_summary_row(out: &mut String, name: &str, summary: Option<&ScoreSummary>) {
    let _ = match summary {
        Some(s) => writeln!(
            out,
            "  {:<8} n={:<3} mean={:>6.3}  min={:>6.3}  q1={:>6.3}  median={:>6.3}  q3={:>6.3}  max={:>6.3}",
            name, s.count, s.mean, s.min, s.q1, s.median, s.q3, s.max
        ),
        None => writeln!(out, "  {:<8} no articles", name),
    };
}

fn write_distribution(out: &mut String, stats: &SubjectStats) {
    let _ = writeln!(out, "{} labels", stats.subject.display_name());
    for (label, count) in stats.polarity_labels.iter().chain(stats.subjectivity_labels.iter()) {
        let _ = writeln!(out, "  {:<24} {}", label, count);
    }
    let _ = writeln!(out);
}

/// Shorten to `width` characters, marking the cut with "..."
fn truncate_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut truncated: String = title.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextNormalizer;
    use crate::domain::{Article, ExtractedArticle, SentimentScore, Subject};

    fn report(subject: Subject, rows: &[(&str, &str, f64, f64)]) -> SubjectReport {
        let articles = rows
            .iter()
            .map(|(title, content, polarity, subjectivity)| {
                Article::classified(
                    ExtractedArticle::new(
                        "https://example.com".to_string(),
                        title.to_string(),
                        content.to_string(),
                    ),
                    SentimentScore::new(*polarity, *subjectivity),
                )
                .unwrap()
            })
            .collect();
        SubjectReport::new(subject, articles, &TextNormalizer::default())
    }

    #[test]
    fn test_article_table_rows() {
        let report = report(
            Subject::Harris,
            &[("Harris visits Michigan", "rally", 0.12345, 0.6)],
        );
        let table = ReportService::new(30).article_table(&report);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Article Title"));
        assert!(lines[2].starts_with("Harris visits Michigan"));
        assert!(lines[2].contains("0.123"));
        assert!(lines[2].contains("Slightly positive"));
        assert!(lines[2].contains("0.600"));
        assert!(lines[2].contains("Fairly subjective"));
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("short", 10), "short");
        assert_eq!(truncate_title("a much longer headline", 10), "a much ...");
    }

    #[test]
    fn test_top_words() {
        let service = ReportService::default();
        let text = service.top_words(&[("vote".to_string(), 3)]);
        assert!(text.contains("vote"));
        assert!(text.contains('3'));
        assert_eq!(service.top_words(&[]), "  (no words)\n");
    }

    #[test]
    fn test_comparison_text() {
        let trump = report(Subject::Trump, &[("T", "Tariffs and the border wall", 0.2, 0.3)]);
        let harris = report(Subject::Harris, &[("H", "Abortion rights and the border", -0.2, 0.0)]);
        let comparison = Comparison::build(&trump, &harris, 50);

        let text = ReportService::default().comparison(&comparison, 5);

        assert!(text.contains("Comparing sentiment between Trump and Harris articles"));
        assert!(text.contains("Slightly negative"));
        assert!(text.contains("Words only in Trump coverage (2 total): tariff, wall"));
        assert!(text.contains("Words only in Harris coverage (2 total): abortion, right"));
    }

    #[test]
    fn test_comparison_text_with_empty_side() {
        let trump = report(Subject::Trump, &[]);
        let harris = report(Subject::Harris, &[("H", "Rally", 0.0, 0.0)]);
        let comparison = Comparison::build(&trump, &harris, 50);

        let text = ReportService::default().comparison(&comparison, 5);
        assert!(text.contains("Trump    no articles"));
    }

    #[test]
    fn test_dashboard_json() {
        let harris = report(Subject::Harris, &[("H", "Rally", 0.0, 0.0)]);
        let dashboard = Dashboard::new(vec![harris], None);

        let json = ReportService::default().to_json(&dashboard).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["subjects"][0]["subject"], "harris");
        assert_eq!(value["subjects"][0]["articles"][0]["polarity_class"], "Neutral");
        assert_eq!(value["subjects"][0]["cleaned"][0], "rally");
        assert!(value["comparison"].is_null());
    }
}
