use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// A single user rating for a catalog statement.
/// Ratings are expected in {-1, 0, 1} but the domain is not enforced;
/// sums are i64 so arbitrary i32 ratings cannot overflow.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAnswer {
    pub statement_id: u32,
    pub rating: i32,
}

#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub category_scores: HashMap<String, i64>,
    pub top_categories: Vec<String>,
}

/// Reduces answers into per-category sums and a ranked category list.
///
/// Answers referencing unknown statement ids are silently skipped; this
/// mirrors the survey UI, which can only send catalog ids, and keeps the
/// operation infallible. `top_categories` holds only categories with a
/// strictly positive sum, ordered by descending sum; equal sums keep
/// first-seen order (stable sort over the encounter-ordered list).
pub fn score(answers: &[UserAnswer]) -> ScoreReport {
    // Encounter-ordered running sums; the vector order is the tie-break.
    let mut order: Vec<(&'static str, i64)> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();

    for answer in answers {
        let Some(stmt) = catalog::find(answer.statement_id) else {
            continue;
        };
        match index.get(stmt.category) {
            Some(&i) => order[i].1 += answer.rating as i64,
            None => {
                index.insert(stmt.category, order.len());
                order.push((stmt.category, answer.rating as i64));
            }
        }
    }

    let mut ranked = order.clone();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ScoreReport {
        category_scores: order
            .iter()
            .map(|&(cat, sum)| (cat.to_string(), sum))
            .collect(),
        top_categories: ranked
            .into_iter()
            .filter(|&(_, sum)| sum > 0)
            .map(|(cat, _)| cat.to_string())
            .collect(),
    }
}
