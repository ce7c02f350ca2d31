//! Fixture Generator
//!
//! Produces the flat integer sequence shown next to a question. The
//! generator never builds nodes or pointers; see [`Topic::layout`] for how
//! the front end reads each topic's sequence.

use rand::Rng;

use crate::models::types::Topic;
use crate::utils::constants::FIXTURE_VALUE;

/// Random fixture for `topic`, or an empty vector when the topic is unknown
pub fn generate<R: Rng + ?Sized>(topic: &str, rng: &mut R) -> Vec<u32> {
    match Topic::from_name(topic) {
        Some(topic) => generate_for(topic, rng),
        None => Vec::new(),
    }
}

/// Random fixture for a recognised topic
pub fn generate_for<R: Rng + ?Sized>(topic: Topic, rng: &mut R) -> Vec<u32> {
    let len = rng.gen_range(topic.fixture_len());
    (0..len).map(|_| rng.gen_range(FIXTURE_VALUE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_hold_for_every_topic() {
        let mut rng = StdRng::seed_from_u64(7);
        for topic in Topic::ALL {
            for _ in 0..200 {
                let values = generate(topic.as_str(), &mut rng);
                assert!(
                    topic.fixture_len().contains(&values.len()),
                    "{} produced {} values",
                    topic.as_str(),
                    values.len()
                );
                assert!(values.iter().all(|v| (1..=99).contains(v)));
            }
        }
    }

    #[test]
    fn test_unknown_topic_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate("Graph", &mut rng).is_empty());
        assert!(generate("array", &mut rng).is_empty());
        assert!(generate("", &mut rng).is_empty());
    }

    #[test]
    fn test_lengths_cover_the_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(generate_for(Topic::Tree, &mut rng).len());
        }
        assert_eq!(seen.len(), 9, "tree lengths 7..=15 should all appear");
    }
}
