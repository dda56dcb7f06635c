use std::collections::{HashMap, HashSet};

use crate::error::{AppError, AppResult};
use crate::similarity::stopwords::ENGLISH_STOP_WORDS;

/// Default vocabulary cap, sized for a catalog of a few thousand movies
/// with short tag blobs
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Bag-of-words vectorizer: learns a frequency-capped vocabulary from a
/// corpus and turns each document into a vector of term counts.
///
/// Tokens are lowercase alphanumeric runs; English stop words are dropped
/// before counting.
#[derive(Debug, Clone)]
pub struct BagOfWords {
    max_features: usize,
    stop_words: HashSet<&'static str>,
    vocabulary: HashMap<String, usize>,
}

impl BagOfWords {
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            vocabulary: HashMap::new(),
        }
    }

    /// Sets the maximum vocabulary size
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Learned vocabulary size (zero before `fit`)
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .filter(|t| !self.stop_words.contains(t.as_str()))
            .collect()
    }

    /// Learns the vocabulary from the corpus: terms ranked by total
    /// frequency, highest first, capped at `max_features`. Equal
    /// frequencies break alphabetically so the vocabulary is deterministic.
    pub fn fit(&mut self, corpus: &[String]) -> AppResult<()> {
        if corpus.is_empty() {
            return Err(AppError::InvalidInput(
                "cannot fit a vectorizer on an empty corpus".to_string(),
            ));
        }

        let mut term_freq: HashMap<String, usize> = HashMap::new();
        for doc in corpus {
            for token in self.tokens(doc) {
                *term_freq.entry(token).or_insert(0) += 1;
            }
        }

        if term_freq.is_empty() {
            return Err(AppError::InvalidInput(
                "corpus produced an empty vocabulary".to_string(),
            ));
        }

        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        if ranked.is_empty() {
            return Err(AppError::InvalidInput(
                "vocabulary cap left no terms to count".to_string(),
            ));
        }

        self.vocabulary = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Turns each document into a count vector over the learned vocabulary.
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, corpus: &[String]) -> AppResult<Vec<Vec<f32>>> {
        if self.vocabulary.is_empty() {
            return Err(AppError::Internal(
                "transform called before fit".to_string(),
            ));
        }

        let mut vectors = Vec::with_capacity(corpus.len());
        for doc in corpus {
            let mut counts = vec![0.0_f32; self.vocabulary.len()];
            for token in self.tokens(doc) {
                if let Some(&term_idx) = self.vocabulary.get(&token) {
                    counts[term_idx] += 1.0;
                }
            }
            vectors.push(counts);
        }

        Ok(vectors)
    }

    /// Fits the vocabulary and transforms the corpus in one call
    pub fn fit_transform(&mut self, corpus: &[String]) -> AppResult<Vec<Vec<f32>>> {
        self.fit(corpus)?;
        self.transform(corpus)
    }
}

impl Default for BagOfWords {
    fn default() -> Self {
        Self::new()
    }
}
