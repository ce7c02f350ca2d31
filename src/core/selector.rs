//! Selection Engine
//!
//! Filters the bank on exact topic and difficulty, samples without
//! replacement, and attaches a fresh fixture to every selected question.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::fixture;
use crate::models::types::{EnrichedQuestion, QuestionRecord};

/// Rows whose topic and difficulty match exactly, in source order
pub fn filter_matching<'a>(
    records: &'a [QuestionRecord],
    topic: &str,
    difficulty: i64,
) -> Vec<&'a QuestionRecord> {
    records
        .iter()
        .filter(|record| record.topic == topic && record.difficulty == difficulty)
        .collect()
}

/// Pick up to `count` matching questions and enrich them.
///
/// With fewer than `count` matches every match is returned in source order.
/// Otherwise exactly `count` distinct rows are drawn uniformly; their order
/// is unspecified.
pub fn select<R: Rng + ?Sized>(
    records: &[QuestionRecord],
    topic: &str,
    difficulty: i64,
    count: usize,
    rng: &mut R,
) -> Vec<EnrichedQuestion> {
    let matching = filter_matching(records, topic, difficulty);

    let chosen: Vec<&QuestionRecord> = if matching.len() < count {
        matching.clone()
    } else {
        matching.choose_multiple(rng, count).copied().collect()
    };

    debug!(
        topic,
        difficulty,
        requested = count,
        matching = matching.len(),
        selected = chosen.len(),
        "Questions selected"
    );

    chosen
        .into_iter()
        .map(|record| EnrichedQuestion {
            record: record.clone(),
            values: fixture::generate(topic, rng),
        })
        .collect()
}
