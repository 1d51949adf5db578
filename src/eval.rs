//! # Evaluation
//!
//! Pairwise comparison of predicted labels against ground truth.

use serde::{Deserialize, Serialize};

use crate::data::LabelRecord;
use crate::error::{Error, Result};

/// Prediction quality calculator
pub struct Evaluator;

impl Evaluator {
    /// Compare predictions against truth row by row
    ///
    /// Rows pair up positionally; when one side is shorter, the extra rows
    /// on the other are ignored. Labels compare as trimmed strings and only
    /// parse as integers once a pair disagrees.
    pub fn evaluate(
        truth: &[LabelRecord],
        predictions: &[LabelRecord],
    ) -> Result<EvaluationReport> {
        let mut correct = 0usize;
        let mut total = 0usize;
        let mut errors = Vec::new();

        for (truth_row, prediction_row) in truth.iter().zip(predictions.iter()) {
            let truth_label = truth_row.label.trim();
            let predicted_label = prediction_row.label.trim();

            if truth_label == predicted_label {
                correct += 1;
            } else {
                let predicted = parse_label(predicted_label)?;
                let actual = parse_label(truth_label)?;
                errors.push(Misclassification {
                    id: truth_row.id.clone(),
                    predicted,
                    actual,
                });
            }
            total += 1;
        }

        if total == 0 {
            return Err(Error::NoData);
        }

        Ok(EvaluationReport {
            accuracy: correct as f64 / total as f64,
            errors,
        })
    }
}

/// Outcome of one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Fraction of rows predicted correctly
    pub accuracy: f64,
    /// Mismatched rows, in row order
    pub errors: Vec<Misclassification>,
}

impl EvaluationReport {
    /// Print a short console summary
    pub fn summary(&self) {
        println!("\nEvaluation Results");
        println!("==================");
        println!("Accuracy:      {:.3}", self.accuracy);
        println!("Misclassified: {}", self.errors.len());
    }
}

/// One mismatched row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Misclassification {
    /// Identifier taken from the truth row
    pub id: String,
    /// Label the classifier produced
    pub predicted: i32,
    /// Label the truth file holds
    pub actual: i32,
}

/// Parse a trimmed label field as an integer
fn parse_label(label: &str) -> Result<i32> {
    label
        .parse()
        .map_err(|_| Error::ParseLabel(label.to_string()))
}
