//! # Tokenizer
//!
//! Splits a raw message into word tokens while keeping emoticons and
//! multi-character punctuation runs as tokens of their own.

/// Character scanner producing ordered message tokens
#[derive(Debug, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a message
    ///
    /// Whitespace and commas separate tokens. Two-character emoticons such
    /// as `:)` or `=D` come out as single tokens, and runs of `!`, `?` and
    /// `.` come out as one token when at least two characters long; a lone
    /// punctuation mark is dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() || c == ',' {
                Self::flush(&mut current, &mut tokens);
                i += 1;
            } else if is_emoticon_eye(c) && i + 1 < chars.len() && is_emoticon_mouth(chars[i + 1]) {
                Self::flush(&mut current, &mut tokens);
                tokens.push(chars[i..i + 2].iter().collect());
                i += 2;
            } else if is_run_mark(c) {
                Self::flush(&mut current, &mut tokens);
                let start = i;
                while i < chars.len() && is_run_mark(chars[i]) {
                    i += 1;
                }
                if i - start >= 2 {
                    tokens.push(chars[start..i].iter().collect());
                }
            } else {
                current.push(c);
                i += 1;
            }
        }

        Self::flush(&mut current, &mut tokens);
        tokens
    }

    /// Emit the buffered word, if any
    fn flush(current: &mut String, tokens: &mut Vec<String>) {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// First character of a two-character emoticon
fn is_emoticon_eye(c: char) -> bool {
    matches!(c, ':' | '=' | ';')
}

/// Second character of a two-character emoticon
fn is_emoticon_mouth(c: char) -> bool {
    matches!(c, ')' | '(' | 'D' | 'P')
}

/// Member of a punctuation run
fn is_run_mark(c: char) -> bool {
    matches!(c, '!' | '?' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_basic_split() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("a b"), vec!["a", "b"]);
        assert_eq!(tokenizer.tokenize("hello,world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_single_word_passthrough() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("word"), vec!["word"]);
    }

    #[test]
    fn test_emoticons_and_runs() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize(":) great!!!"), vec![":)", "great", "!!!"]);
    }

    #[test]
    fn test_emoticon_splits_adjacent_word() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("yay:Dwow"), vec!["yay", ":D", "wow"]);
        assert_eq!(tokenizer.tokenize("sad=("), vec!["sad", "=("]);
    }

    #[test]
    fn test_lone_punctuation_dropped() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("done."), vec!["done"]);
        assert_eq!(tokenizer.tokenize("really?!"), vec!["really", "?!"]);
        assert!(tokenizer.tokenize(". ! ?").is_empty());
    }

    #[test]
    fn test_trailing_eye_stays_in_word() {
        let tokenizer = Tokenizer::new();
        // no mouth character follows, so the colon is ordinary text
        assert_eq!(tokenizer.tokenize("time: 10"), vec!["time:", "10"]);
    }
}
