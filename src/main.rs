use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentiment_compare::analysis::{
    classify, word_frequencies, Comparison, ScoreSummary, TextNormalizer,
};
use sentiment_compare::cli::{Cli, Commands};
use sentiment_compare::config::Config;
use sentiment_compare::domain::{Article, ScoreKind, Subject};
use sentiment_compare::errors::{DashboardError, DashboardResult};
use sentiment_compare::scoring::{LexiconScorer, SentimentScorer};
use sentiment_compare::services::{AnalysisService, Dashboard, ReportService};
use sentiment_compare::sources::GuardianSource;

/// Distinctive words listed per subject in the comparison summary
const HIGHLIGHT_SAMPLE: usize = 15;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> DashboardResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { text } => cmd_normalize(&text),
        Commands::Classify { value, kind } => cmd_classify(value, &kind),
        Commands::Score { text } => cmd_score(&text),
        Commands::Analyze { subject, top } => {
            let subject = subject
                .parse::<Subject>()
                .map_err(DashboardError::InvalidInput)?;
            cmd_analyze(subject, top)
        }
        Commands::Compare { top } => cmd_compare(top),
        Commands::Export { output, top } => cmd_export(output, top),
    }
}

fn build_service() -> DashboardResult<AnalysisService<GuardianSource, LexiconScorer>> {
    // Load configuration
    let config = Config::from_env()?;
    let source = GuardianSource::new(&config)?;

    Ok(AnalysisService::new(
        source,
        LexiconScorer::new(),
        TextNormalizer::default(),
    ))
}

fn cmd_normalize(text: &str) -> DashboardResult<()> {
    match TextNormalizer::default().normalize(text) {
        Some(cleaned) => println!("{}", cleaned),
        None => println!("(no usable content)"),
    }
    Ok(())
}

fn cmd_classify(value: f64, kind: &str) -> DashboardResult<()> {
    let kind: ScoreKind = kind.parse()?;
    println!("{}", classify(value, kind)?);
    Ok(())
}

fn cmd_score(text: &str) -> DashboardResult<()> {
    let score = LexiconScorer::new().score(text)?;

    println!(
        "Polarity:     {:>6.3}  {}",
        score.polarity,
        classify(score.polarity, ScoreKind::Polarity)?
    );
    println!(
        "Subjectivity: {:>6.3}  {}",
        score.subjectivity,
        classify(score.subjectivity, ScoreKind::Subjectivity)?
    );
    Ok(())
}

fn cmd_analyze(subject: Subject, top: usize) -> DashboardResult<()> {
    let service = build_service()?;
    let reports = ReportService::default();

    println!("Analyzing {} articles...\n", subject);

    let report = service.analyze_subject(subject)?;

    if report.is_empty() {
        println!("No articles could be analyzed.");
        return Ok(());
    }

    println!("{} Articles\n", subject);
    print!("{}", reports.article_table(&report));
    println!();

    print_average(&report.articles);

    println!("\nMost frequent words:");
    let words = word_frequencies(&report.cleaned, top);
    print!("{}", reports.top_words(&words));

    Ok(())
}

fn print_average(articles: &[Article]) {
    let polarity: Vec<f64> = articles.iter().map(|a| a.polarity).collect();
    let subjectivity: Vec<f64> = articles.iter().map(|a| a.subjectivity).collect();

    if let (Some(p), Some(s)) = (
        ScoreSummary::from_values(&polarity),
        ScoreSummary::from_values(&subjectivity),
    ) {
        println!(
            "Average polarity: {:.3}  Average subjectivity: {:.3}  ({} articles)",
            p.mean, s.mean, p.count
        );
    }
}

fn cmd_compare(top: usize) -> DashboardResult<()> {
    let service = build_service()?;

    println!("Comparing Trump and Harris articles...\n");

    let subjects = service.analyze_subjects(&Subject::ALL)?;
    let comparison = Comparison::build(&subjects[0], &subjects[1], top);

    print!(
        "{}",
        ReportService::default().comparison(&comparison, HIGHLIGHT_SAMPLE)
    );
    Ok(())
}

fn cmd_export(output: Option<String>, top: usize) -> DashboardResult<()> {
    let service = build_service()?;

    let subjects = service.analyze_subjects(&Subject::ALL)?;
    let comparison = Comparison::build(&subjects[0], &subjects[1], top);
    let dashboard = Dashboard::new(subjects, Some(comparison));
    let json = ReportService::default().to_json(&dashboard)?;

    match output {
        Some(path) => {
            fs::write(&path, &json)?;
            println!("Exported dashboard to {}", path);
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
