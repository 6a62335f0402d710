use std::cmp::Ordering;

use crate::catalog::ProductIdx;

pub mod index;
pub mod tfidf;
pub mod tokenizer;

#[derive(PartialEq, Debug)]
pub struct ItemScore {
    pub id: ProductIdx,
    pub score: f64,
}

impl ItemScore {
    pub fn new(id: ProductIdx, score: f64) -> Self {
        ItemScore { id, score }
    }
}

impl Eq for ItemScore {}

impl Ord for ItemScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse order by score
        match self.score.partial_cmp(&other.score) {
            Some(Ordering::Less) => Ordering::Greater,
            Some(Ordering::Greater) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

impl PartialOrd for ItemScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod item_score_test {
    use super::*;

    #[test]
    fn should_sort_highest_score_first() {
        let mut scores = vec![
            ItemScore::new(0, 0.1),
            ItemScore::new(1, 0.9),
            ItemScore::new(2, 0.1),
        ];
        scores.sort();
        let ids: Vec<ProductIdx> = scores.iter().map(|scored| scored.id).collect();
        assert_eq!(vec![1, 0, 2], ids);
    }
}
