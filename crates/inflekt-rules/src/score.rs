// Exact-match evaluation under canonical normalization.

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Error raised when the prediction and gold sequences differ in length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("prediction/gold length mismatch: {predictions} predictions, {golds} gold forms")]
    LengthMismatch { predictions: usize, golds: usize },
}

/// Fraction of predictions that exactly match their gold form after NFC
/// normalization of both sides. An empty evaluation set scores 0.
pub fn exact_match(gold: &[String], predictions: &[String]) -> Result<f64, ScoreError> {
    if gold.len() != predictions.len() {
        return Err(ScoreError::LengthMismatch {
            predictions: predictions.len(),
            golds: gold.len(),
        });
    }
    if gold.is_empty() {
        return Ok(0.0);
    }
    let hits = gold
        .iter()
        .zip(predictions)
        .filter(|(g, p)| nfc(g) == nfc(p))
        .count();
    Ok(hits as f64 / gold.len() as f64)
}

fn nfc(s: &str) -> String {
    s.nfc().collect()
}
