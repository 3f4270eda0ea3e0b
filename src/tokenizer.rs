//! Whitespace tokenizer with character-wise punctuation stripping.
//!
//! Each whitespace-delimited token is lowercased and every character found in
//! [`PUNCTUATION`] is removed. A token made only of punctuation becomes an
//! empty word and is still kept, so word counts line up with token counts.

/// Characters stripped from every token.
pub const PUNCTUATION: &str = r#"!()-[]{;}:'"\,<>./?@#$%^&*_~"#;

/// Lowercase a raw token and drop its punctuation characters.
pub fn clean_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect()
}

/// Tokenize a single line into cleaned words.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(clean_token).collect()
}

/// Tokenize lines into one word sequence, in line order then token order.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| tokenize_line(line.as_ref()))
        .collect()
}

/// Whether a raw token closes a sentence.
pub fn ends_sentence(token: &str) -> bool {
    token.ends_with('.')
}

/// Count sentence-closing tokens across lines, never reporting fewer than one.
pub fn sentence_count<S: AsRef<str>>(lines: &[S]) -> usize {
    let count = lines
        .iter()
        .flat_map(|line| line.as_ref().split_whitespace())
        .filter(|token| ends_sentence(token))
        .count();

    count.max(1)
}
