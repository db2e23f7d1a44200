//! Text ingest and tokenization.
//!
//! The estimator only ever sees an ordered token sequence. This module turns a text
//! source (file, stdin, or the bundled demo passage) into that sequence by splitting
//! on whitespace. Punctuation is left attached to its word.

use std::collections::HashSet;
use std::fs;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::domain::TextSource;
use crate::error::AppError;

/// Short narrative passage used by `--demo`.
pub const DEMO_TEXT: &str = "\
Once there was a kind man. He had a wife and a daughter. His wife loved him very much, and so did his daughter. One day the man's wife died. He was very, very sad.
The man wanted a new wife. His next wife was not kind at all. She was very cruel. She had two ugly daughters who were also very mean.
Once there was a kind man. He had a wife and a daughter. His wife loved him very much, and so did his daughter. One day the man's wife died. He was very, very sad.
The man wanted a new wife. His next wife was not kind at all. She was very cruel. She had two ugly daughters who were also very mean.
Once there was a kind man. He had a very loving wife. He had a young daughter who was also just like her mother. One day the man's wife died, and he was very sad.
The wife did not like her new daughter, who was kind and pretty. So she made her work hard. The girl scrubbed dishes. She scrubbed floors. She cleaned the fireplaces. Her sisters made fun of her and called her 'ash girl', or Cinderella.
Cinderella's sisters had fine rooms with soft beds. But Cinderella had a cold room in the attic, and her bed was made of straw.
";

/// Summary of a loaded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub tokens: usize,
    pub types: usize,
}

/// A tokenized text ready for estimation.
#[derive(Debug, Clone)]
pub struct LoadedText {
    pub source: TextSource,
    pub tokens: Vec<String>,
    pub stats: TextStats,
}

impl LoadedText {
    pub fn from_text(source: TextSource, text: &str) -> Self {
        let tokens = tokenize(text);
        let stats = text_stats(&tokens);
        Self { source, tokens, stats }
    }
}

/// Split on Unicode whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

pub fn text_stats(tokens: &[String]) -> TextStats {
    let types: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    TextStats {
        tokens: tokens.len(),
        types: types.len(),
    }
}

/// Read and tokenize a text source.
pub fn load_text(source: &TextSource) -> Result<LoadedText, AppError> {
    let text = match source {
        TextSource::File(path) => fs::read_to_string(path)
            .map_err(|e| AppError::new(2, format!("Failed to read text '{}': {e}", path.display())))?,
        TextSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::new(2, format!("Failed to read stdin: {e}")))?;
            buf
        }
        TextSource::Demo => DEMO_TEXT.to_string(),
    };

    let loaded = LoadedText::from_text(source.clone(), &text);
    if loaded.tokens.is_empty() {
        return Err(AppError::new(3, format!("No tokens in '{}'.", source.label())));
    }

    tracing::info!(
        source = %source.label(),
        tokens = loaded.stats.tokens,
        types = loaded.stats.types,
        "Loaded text"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        let tokens = tokenize("  the cat\tsat\n\non  the mat. ");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat."]);
        assert_eq!(text_stats(&tokens), TextStats { tokens: 6, types: 5 });
    }

    #[test]
    fn demo_text_is_long_enough_for_default_range() {
        let loaded = load_text(&TextSource::Demo).unwrap();
        assert!(loaded.stats.tokens > 50);
        assert!(loaded.stats.types < loaded.stats.tokens);
    }

    #[test]
    fn loads_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one two two three").unwrap();
        let loaded = load_text(&TextSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(loaded.tokens, vec!["one", "two", "two", "three"]);
        assert_eq!(loaded.stats.types, 3);
    }

    #[test]
    fn missing_and_empty_files_fail() {
        let err = load_text(&TextSource::File("/definitely/not/here.txt".into())).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_text(&TextSource::File(file.path().to_path_buf())).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
