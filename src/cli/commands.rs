use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sentiment-compare")]
#[command(about = "Compare the sentiment of news coverage about two political figures")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize text the way article contents are cleaned for word clouds
    Normalize {
        /// Raw text to normalize
        text: String,
    },

    /// Classify a polarity or subjectivity score into its label
    Classify {
        /// Score to classify
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Kind of score: polarity or subjectivity
        #[arg(short, long, default_value = "polarity")]
        kind: String,
    },

    /// Score raw text with the built-in lexicon and classify the result
    Score {
        /// Text to score
        text: String,
    },

    /// Fetch and analyze the coverage of one subject (trump or harris)
    Analyze {
        /// Subject to analyze
        subject: String,

        /// Number of most frequent words to show
        #[arg(long, default_value_t = 50)]
        top: usize,
    },

    /// Fetch both subjects and compare their coverage
    Compare {
        /// Number of most frequent words considered per subject
        #[arg(long, default_value_t = 50)]
        top: usize,
    },

    /// Export the full dashboard data as JSON
    Export {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Number of most frequent words kept per subject
        #[arg(long, default_value_t = 50)]
        top: usize,
    },
}
