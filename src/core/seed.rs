//! Sample question bank
//!
//! First-run bootstrap: when no bank exists yet, write a small built-in set
//! covering every topic at difficulties 1 to 3.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::errors::AppResult;
use crate::models::types::QuestionRecord;
use crate::utils::constants::{
    TOPIC_ARRAY, TOPIC_CIRCULAR_LINKED_LIST, TOPIC_DOUBLY_LINKED_LIST, TOPIC_SINGLY_LINKED_LIST,
    TOPIC_TREE,
};

/// (topic, difficulty, question, answer)
const SAMPLE_BANK: &[(&str, i64, &str, &str)] = &[
    // Array
    (TOPIC_ARRAY, 1, "What is the value at index 0 of the array?", "The first element shown"),
    (TOPIC_ARRAY, 1, "How many elements does the array contain?", "Count the boxes"),
    (TOPIC_ARRAY, 1, "What is the time complexity of accessing an element by index?", "O(1)"),
    (TOPIC_ARRAY, 2, "What is the largest value in the array?", "Scan every element once, O(n)"),
    (TOPIC_ARRAY, 2, "What does the array look like after reversing it in place?", "Swap from both ends towards the middle"),
    (TOPIC_ARRAY, 2, "What is the cost of inserting at the front of the array?", "O(n), every element shifts right"),
    (TOPIC_ARRAY, 3, "What does the array look like after one pass of bubble sort?", "The largest value ends up last"),
    (TOPIC_ARRAY, 3, "Which pair of elements has the largest sum?", "The two largest values"),
    (TOPIC_ARRAY, 3, "What is the array after rotating it left by two positions?", "The first two elements move to the end"),
    // Singly Linked List
    (TOPIC_SINGLY_LINKED_LIST, 1, "What value is stored in the head node?", "The leftmost node"),
    (TOPIC_SINGLY_LINKED_LIST, 1, "What does the last node's next pointer hold?", "null"),
    (TOPIC_SINGLY_LINKED_LIST, 2, "What is the cost of inserting at the head?", "O(1)"),
    (TOPIC_SINGLY_LINKED_LIST, 2, "What is the middle node of the list?", "Use slow and fast pointers"),
    (TOPIC_SINGLY_LINKED_LIST, 3, "What is the list after reversing it?", "Re-point every next pointer to its predecessor"),
    (TOPIC_SINGLY_LINKED_LIST, 3, "How do you delete the node holding the largest value?", "Track the predecessor while scanning"),
    // Doubly Linked List
    (TOPIC_DOUBLY_LINKED_LIST, 1, "What does the head node's prev pointer hold?", "null"),
    (TOPIC_DOUBLY_LINKED_LIST, 1, "How many pointers does each node store?", "Two, prev and next"),
    (TOPIC_DOUBLY_LINKED_LIST, 2, "What is the cost of deleting a node given a pointer to it?", "O(1)"),
    (TOPIC_DOUBLY_LINKED_LIST, 2, "What value is reached by walking back two nodes from the tail?", "The third node from the end"),
    (TOPIC_DOUBLY_LINKED_LIST, 3, "Which pointers change when inserting between the second and third nodes?", "Four: two on the new node and one on each neighbour"),
    (TOPIC_DOUBLY_LINKED_LIST, 3, "What is the list after swapping the first and last nodes?", "Head and tail trade places and their pointers are relinked"),
    // Circular Linked List
    (TOPIC_CIRCULAR_LINKED_LIST, 1, "What does the tail node's next pointer hold?", "The head node"),
    (TOPIC_CIRCULAR_LINKED_LIST, 1, "How do you know you have visited every node?", "Stop when you are back at the head"),
    (TOPIC_CIRCULAR_LINKED_LIST, 2, "Which node is reached after moving next from the head as many times as there are nodes?", "The head again"),
    (TOPIC_CIRCULAR_LINKED_LIST, 2, "What is the cost of inserting at the tail when only a tail pointer is kept?", "O(1)"),
    (TOPIC_CIRCULAR_LINKED_LIST, 3, "Which node remains if every second node is removed until one is left?", "Solve it as the Josephus problem"),
    (TOPIC_CIRCULAR_LINKED_LIST, 3, "How do you split the list into two circular halves?", "Find the middle with slow and fast pointers, then relink"),
    // Tree
    (TOPIC_TREE, 1, "What value is stored at the root?", "The first value of the sequence"),
    (TOPIC_TREE, 1, "How many leaf nodes does the tree have?", "Nodes without children"),
    (TOPIC_TREE, 1, "What is the height of the tree?", "floor(log2(n))"),
    (TOPIC_TREE, 2, "What is the in-order traversal of the tree?", "Left subtree, node, right subtree"),
    (TOPIC_TREE, 2, "What is the pre-order traversal of the tree?", "Node, left subtree, right subtree"),
    (TOPIC_TREE, 2, "What is the sum of all values on the deepest level?", "Add the last level left to right"),
    (TOPIC_TREE, 3, "What is the post-order traversal of the tree?", "Left subtree, right subtree, node"),
    (TOPIC_TREE, 3, "Is the tree a valid binary search tree?", "Check every node against its allowed range"),
    (TOPIC_TREE, 3, "What is the lowest common ancestor of the two leftmost leaves?", "Their nearest shared parent"),
];

/// The built-in bank with ids assigned in order from 1
pub fn sample_questions() -> Vec<QuestionRecord> {
    SAMPLE_BANK
        .iter()
        .enumerate()
        .map(|(i, (topic, difficulty, question, answer))| QuestionRecord {
            id: i as i64 + 1,
            topic: topic.to_string(),
            difficulty: *difficulty,
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

/// Write the built-in bank to `path`, replacing any existing file
pub fn write_sample_bank(path: &Path) -> AppResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let questions = sample_questions();
    let mut writer = csv::Writer::from_path(path)?;
    for question in &questions {
        writer.serialize(question)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = questions.len(), "Sample question bank written");
    Ok(questions.len())
}

/// Write the sample bank only when `path` does not exist yet
pub fn ensure_question_bank(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_sample_bank(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Topic;

    #[test]
    fn test_every_topic_and_level_covered() {
        let questions = sample_questions();
        for topic in Topic::ALL {
            for difficulty in 1..=3 {
                assert!(
                    questions
                        .iter()
                        .any(|q| q.topic == topic.as_str() && q.difficulty == difficulty),
                    "no {} question at difficulty {}",
                    topic.as_str(),
                    difficulty
                );
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let questions = sample_questions();
        let ids: std::collections::HashSet<i64> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len());
    }
}
