//! Tweet Sentiment - Lexicon-Based Tweet Classification
//!
//! Command line entry point that trains a classifier on labeled tweets,
//! predicts labels for a test set, and scores the predictions against a
//! truth file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use tweet_sentiment::{DataLoader, Evaluator, SentimentClassifier};

#[derive(Parser)]
#[command(name = "tweet_sentiment")]
#[command(about = "Lexicon-based sentiment classification for tweets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on labeled tweets, predict the test set and score the result
    Run {
        /// Labeled training data (label,id,date,query,user,text)
        train_file: PathBuf,

        /// Unlabeled test data (id,date,query,user,text)
        test_file: PathBuf,

        /// True labels for the test data (label,id)
        truth_file: PathBuf,

        /// Where to write the predicted labels
        predictions_file: PathBuf,

        /// Where to write the accuracy report
        accuracy_file: PathBuf,
    },

    /// Train on labeled tweets and print the score breakdown for one text
    Analyze {
        /// Labeled training data (label,id,date,query,user,text)
        #[arg(short = 'f', long)]
        train_file: PathBuf,

        /// Text to classify
        #[arg(short, long)]
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run {
            train_file,
            test_file,
            truth_file,
            predictions_file,
            accuracy_file,
        } => {
            info!("Training classifier on {:?}", train_file);

            let tweets = DataLoader::load_training(&train_file)?;
            info!("Loaded {} labeled tweets", tweets.len());

            let mut classifier = SentimentClassifier::new();
            classifier.train(&tweets);

            let stats = classifier.lexicon().stats();
            info!(
                "Lexicon holds {} positive and {} negative entries",
                stats.positive_entries, stats.negative_entries
            );

            info!("Making predictions for {:?}", test_file);
            let test_tweets = DataLoader::load_test(&test_file)?;
            let predictions = classifier.predict_batch(&test_tweets);

            DataLoader::save_predictions(&predictions, &predictions_file)?;
            info!(
                "Wrote {} predictions to {:?}",
                predictions.len(),
                predictions_file
            );

            info!("Evaluating results against {:?}", truth_file);
            let truth = DataLoader::load_truth(&truth_file)?;
            let predicted = DataLoader::load_predictions(&predictions_file)?;

            let report = Evaluator::evaluate(&truth, &predicted)?;
            DataLoader::save_report(&report, &accuracy_file)?;
            info!("Saved report to {:?}", accuracy_file);

            report.summary();
        }

        Commands::Analyze { train_file, text } => {
            info!("Training classifier on {:?}", train_file);

            let tweets = DataLoader::load_training(&train_file)?;
            let mut classifier = SentimentClassifier::new();
            classifier.train(&tweets);

            let score = classifier.score(&text);

            println!("\nSentiment Breakdown");
            println!("===================");
            println!("Text:           {}", text);
            println!("Label:          {:?}", score.label);
            println!("Positive score: {:.3}", score.positive);
            println!("Negative score: {:.3}", score.negative);
            println!("Scored words:   {}", score.scored_words);

            if score.strong_positive {
                println!("Strong positive cue present");
            }
            if score.strong_negative {
                println!("Strong negative cue present");
            }
        }
    }

    Ok(())
}
