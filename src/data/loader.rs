//! Data loading and saving utilities
//!
//! Reads the delimited tweet files and the two-column label files, and
//! writes the predictions and accuracy report artifacts.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use super::types::{LabelRecord, LabeledTweet, Prediction, Sentiment, TestTweet};
use crate::error::{Error, Result};
use crate::eval::EvaluationReport;

/// File reader and writer for every pipeline artifact
pub struct DataLoader;

impl DataLoader {
    /// Load labeled training records
    ///
    /// Columns are label, id, date, query, user, text; the text column is
    /// the rest of the line and may itself contain commas. The header row
    /// is skipped, missing fields read as empty, and one wrapping quote
    /// pair around the text is removed.
    pub fn load_training<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledTweet>> {
        let reader = open_buffered(path.as_ref())?;
        let mut tweets = Vec::new();

        for line in reader.lines().skip(1) {
            let line = line?;
            let mut fields = line.splitn(6, ',');
            let label = fields.next().unwrap_or("");
            let id = fields.next().unwrap_or("");
            // skip date, query and user
            let text = fields.nth(3).unwrap_or("");

            tweets.push(LabeledTweet::new(
                id,
                strip_wrapping_quotes(text),
                Sentiment::from_label(label),
            ));
        }

        Ok(tweets)
    }

    /// Load unlabeled test records
    ///
    /// Same layout as the training file without the label column:
    /// id, date, query, user, text.
    pub fn load_test<P: AsRef<Path>>(path: P) -> Result<Vec<TestTweet>> {
        let reader = open_buffered(path.as_ref())?;
        let mut tweets = Vec::new();

        for line in reader.lines().skip(1) {
            let line = line?;
            let mut fields = line.splitn(5, ',');
            let id = fields.next().unwrap_or("");
            // skip date, query and user
            let text = fields.nth(3).unwrap_or("");

            tweets.push(TestTweet::new(id, strip_wrapping_quotes(text)));
        }

        Ok(tweets)
    }

    /// Load ground-truth label rows, skipping the header row
    pub fn load_truth<P: AsRef<Path>>(path: P) -> Result<Vec<LabelRecord>> {
        load_label_rows(path.as_ref(), true)
    }

    /// Load previously written prediction rows, which carry no header
    pub fn load_predictions<P: AsRef<Path>>(path: P) -> Result<Vec<LabelRecord>> {
        load_label_rows(path.as_ref(), false)
    }

    /// Write predictions as `label,id` rows with no header
    pub fn save_predictions<P: AsRef<Path>>(predictions: &[Prediction], path: P) -> Result<()> {
        let file = create_file(path.as_ref())?;
        let mut writer = Writer::from_writer(file);

        for prediction in predictions {
            writer.write_record(&[prediction.label.code().to_string(), prediction.id.clone()])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the accuracy report
    ///
    /// First line is the accuracy as a fixed 3-decimal fraction, then one
    /// `predicted,actual,id` line per misclassified row.
    pub fn save_report<P: AsRef<Path>>(report: &EvaluationReport, path: P) -> Result<()> {
        let file = create_file(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{:.3}", report.accuracy)?;
        for error in &report.errors {
            writeln!(writer, "{},{},{}", error.predicted, error.actual, error.id)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Read a two-column label file into records
fn load_label_rows(path: &Path, skip_header: bool) -> Result<Vec<LabelRecord>> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<LabelRecord>().enumerate() {
        if skip_header && index == 0 {
            continue;
        }
        rows.push(result?);
    }

    Ok(rows)
}

/// Open a file for reading, attaching the path to any failure
fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Create an output file, attaching the path to any failure
fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove one leading and one trailing quote character, when present
fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
