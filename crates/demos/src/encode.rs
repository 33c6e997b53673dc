//! Categorical encoders for the encoding visualization

use crate::errors::{DemoError, Result};

/// Label-encode values in first-appearance order
///
/// Returns the code per input value together with the vocabulary, whose
/// index is the code.
pub fn label_encode<S: AsRef<str>>(values: &[S]) -> (Vec<usize>, Vec<String>) {
    let mut vocabulary: Vec<String> = Vec::new();
    let codes = values
        .iter()
        .map(|value| {
            let value = value.as_ref();
            match vocabulary.iter().position(|seen| seen == value) {
                Some(code) => code,
                None => {
                    vocabulary.push(value.to_string());
                    vocabulary.len() - 1
                }
            }
        })
        .collect();
    (codes, vocabulary)
}

/// Encode values by their position in an explicit ordering
///
/// # Errors
/// [`DemoError::UnknownCategory`] for any value absent from `order`.
pub fn ordinal_encode<S: AsRef<str>>(values: &[S], order: &[&str]) -> Result<Vec<usize>> {
    values
        .iter()
        .map(|value| {
            let value = value.as_ref();
            order
                .iter()
                .position(|level| *level == value)
                .ok_or_else(|| DemoError::UnknownCategory {
                    value: value.to_string(),
                })
        })
        .collect()
}

/// Encode Yes/No answers as 1/0
///
/// # Errors
/// [`DemoError::UnknownCategory`] for anything other than "Yes" or "No".
pub fn binary_encode<S: AsRef<str>>(values: &[S]) -> Result<Vec<u8>> {
    values
        .iter()
        .map(|value| match value.as_ref() {
            "Yes" => Ok(1),
            "No" => Ok(0),
            other => Err(DemoError::UnknownCategory {
                value: other.to_string(),
            }),
        })
        .collect()
}
