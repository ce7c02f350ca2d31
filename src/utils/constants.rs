//! Constants Module - Single Source of Truth
//!
//! Column names, fixture bounds and server defaults shared across the crate.
//! Other modules read from here instead of repeating literals.

use std::ops::RangeInclusive;

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "dsquiz";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// QUESTION BANK
// ============================================

/// Required CSV header columns, in canonical order
pub const QUESTION_COLUMNS: [&str; 5] = ["id", "topic", "difficulty", "question", "answer"];

/// Default location of the question bank
pub const DEFAULT_DATA_PATH: &str = "data/questions.csv";

// ============================================
// TOPICS
// ============================================

pub const TOPIC_ARRAY: &str = "Array";
pub const TOPIC_SINGLY_LINKED_LIST: &str = "Singly Linked List";
pub const TOPIC_DOUBLY_LINKED_LIST: &str = "Doubly Linked List";
pub const TOPIC_CIRCULAR_LINKED_LIST: &str = "Circular Linked List";
pub const TOPIC_TREE: &str = "Tree";

// ============================================
// FIXTURE BOUNDS
// ============================================

/// Node/element count for array fixtures
pub const ARRAY_LEN: RangeInclusive<usize> = 5..=10;

/// Node count for every linked-list variant
pub const LINKED_LIST_LEN: RangeInclusive<usize> = 5..=8;

/// Node count for tree fixtures
pub const TREE_LEN: RangeInclusive<usize> = 7..=15;

/// Value range of every generated element
pub const FIXTURE_VALUE: RangeInclusive<u32> = 1..=99;

// ============================================
// SERVER DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
