use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

use crate::document::Document;
use crate::similarity;
use crate::tokenizer;

/// Word statistics over a single [`Document`].
///
/// The word sequence is tokenized once at construction; every accessor is a
/// pure derivation from it, so repeated calls return identical results.
#[derive(Debug, Clone)]
pub struct TextStats {
    document: Document,
    words: Vec<String>,
}

/// Headline numbers for one document, as printed by the CLI and exported as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub filepath: String,
    pub unique_words: usize,
    pub total_words: usize,
    pub sentence_count: usize,
    pub most_common_word: Option<String>,
    pub most_common_count: usize,
}

impl TextStats {
    /// Opens and tokenizes `filepath` relative to the configured base directory.
    pub fn open(filepath: &str) -> Result<Self> {
        Ok(Self::new(Document::open(filepath)?))
    }

    pub fn new(document: Document) -> Self {
        let words = tokenizer::tokenize(document.lines());
        debug!(
            filepath = document.filepath(),
            words = words.len(),
            "tokenized document"
        );
        if words.is_empty() {
            warn!(filepath = document.filepath(), "document has no words");
        }

        TextStats { document, words }
    }

    pub fn filepath(&self) -> &str {
        self.document.filepath()
    }

    /// Cleaned words in line order, empty words from punctuation-only tokens included.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of raw tokens ending in `.`, or 1 when there are none.
    pub fn sentence_count(&self) -> usize {
        tokenizer::sentence_count(self.document.lines())
    }

    /// Distinct words sorted ascending.
    pub fn vocabulary(&self) -> Vec<String> {
        self.words
            .iter()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Word → number of occurrences.
    pub fn frequencies(&self) -> HashMap<String, usize> {
        let mut freqs: HashMap<String, usize> = HashMap::new();
        for word in &self.words {
            *freqs.entry(word.clone()).or_insert(0) += 1;
        }
        freqs
    }

    /// Occurrences of an already-cleaned word; 0 when absent.
    ///
    /// The query is matched exactly and is not lowercased or stripped.
    pub fn frequency_of(&self, word: &str) -> usize {
        self.words.iter().filter(|w| w.as_str() == word).count()
    }

    /// Word → share of the total word count in `[0, 1]`.
    ///
    /// Empty for a document without words.
    pub fn percent_frequencies(&self) -> HashMap<String, f64> {
        let total = self.word_count();
        if total == 0 {
            return HashMap::new();
        }

        self.frequencies()
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total as f64))
            .collect()
    }

    /// The most frequent word and its count.
    ///
    /// Among words tied for the maximum, the one occurring first in the text
    /// wins. `None` when the document has no words.
    pub fn most_common(&self) -> Option<(String, usize)> {
        let freqs = self.frequencies();
        let mut best: Option<(&String, usize)> = None;

        for word in &self.words {
            let count = freqs[word];
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((word, count));
            }
        }

        best.map(|(word, count)| (word.clone(), count))
    }

    /// Cosine similarity of the two documents' frequency vectors.
    pub fn similarity_with(&self, other: &TextStats) -> f64 {
        similarity::cosine(&self.frequencies(), &other.frequencies())
    }

    pub fn summary(&self) -> Summary {
        let most_common = self.most_common();
        Summary {
            filepath: self.filepath().to_string(),
            unique_words: self.vocabulary().len(),
            total_words: self.word_count(),
            sentence_count: self.sentence_count(),
            most_common_count: most_common.as_ref().map_or(0, |(_, count)| *count),
            most_common_word: most_common.map(|(word, _)| word),
        }
    }
}
