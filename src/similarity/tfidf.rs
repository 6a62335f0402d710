use hashbrown::HashMap;
use itertools::Itertools;

use crate::similarity::tokenizer::Tokenizer;

pub type TermIdx = usize;

/// Sparse vector with strictly increasing term indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(TermIdx, f64)>,
}

impl SparseVector {
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Merge-join over the two sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (left_term, left_weight) = self.entries[i];
            let (right_term, right_weight) = other.entries[j];
            if left_term == right_term {
                sum += left_weight * right_weight;
                i += 1;
                j += 1;
            } else if left_term < right_term {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }

    fn normalized(mut self) -> SparseVector {
        let norm = self.norm();
        if norm > 0.0 {
            self.entries
                .iter_mut()
                .for_each(|(_, weight)| *weight /= norm);
        }
        self
    }
}

/// Cosine of the angle between `u` and `v`, 0 when either is the zero vector.
pub fn cosine(u: &SparseVector, v: &SparseVector) -> f64 {
    let denominator = u.norm() * v.norm();
    if denominator == 0.0 {
        0.0
    } else {
        u.dot(v) / denominator
    }
}

/// Vocabulary and smoothed inverse document frequencies fitted on a corpus.
///
/// Term frequency is the raw count of a term in a document, the idf of a term
/// is `ln((1 + n) / (1 + df)) + 1`, and every document vector is scaled to unit
/// length. The vocabulary is sorted so term indices do not depend on hashing.
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, TermIdx>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenizer = Tokenizer::english();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for document in documents {
            for term in tokenizer.tokenize(document.as_ref()).into_iter().unique() {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let qty_documents = documents.len() as f64;
        let sorted_terms = document_frequency.into_iter().sorted_by(|a, b| a.0.cmp(&b.0));
        let mut vocabulary = HashMap::new();
        let mut idf = Vec::new();
        for (term_idx, (term, df)) in sorted_terms.enumerate() {
            idf.push(((1.0 + qty_documents) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, term_idx);
        }

        TfIdfVectorizer { vocabulary, idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    pub fn term_index(&self, term: &str) -> Option<TermIdx> {
        self.vocabulary.get(term).copied()
    }

    /// Terms outside the fitted vocabulary are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<TermIdx, usize> = HashMap::new();
        Tokenizer::english()
            .tokenize(document)
            .iter()
            .filter_map(|term| self.term_index(term))
            .for_each(|term_idx| *counts.entry(term_idx).or_insert(0) += 1);

        let entries = counts
            .into_iter()
            .map(|(term_idx, count)| (term_idx, count as f64 * self.idf[term_idx]))
            .sorted_by_key(|(term_idx, _)| *term_idx)
            .collect();

        SparseVector { entries }.normalized()
    }
}
