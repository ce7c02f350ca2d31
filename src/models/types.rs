//! Core types for the question bank and the data served to the browser

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::utils::constants::{
    ARRAY_LEN, LINKED_LIST_LEN, QUESTION_COLUMNS, TOPIC_ARRAY, TOPIC_CIRCULAR_LINKED_LIST,
    TOPIC_DOUBLY_LINKED_LIST, TOPIC_SINGLY_LINKED_LIST, TOPIC_TREE, TREE_LEN,
};

/// One row of the question bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: i64,
    /// Raw topic string, compared exactly (see [`Topic::from_name`])
    pub topic: String,
    pub difficulty: i64,
    pub question: String,
    pub answer: String,
}

/// A question plus the random fixture the front end renders next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedQuestion {
    #[serde(flatten)]
    pub record: QuestionRecord,
    /// Flat fixture; shape is rebuilt by the consumer
    pub values: Vec<u32>,
}

/// Data-structure topics that get a generated fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    Array,
    SinglyLinkedList,
    DoublyLinkedList,
    CircularLinkedList,
    Tree,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Array,
        Topic::SinglyLinkedList,
        Topic::DoublyLinkedList,
        Topic::CircularLinkedList,
        Topic::Tree,
    ];

    /// Exact, case-sensitive lookup. `"array"` is not `"Array"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            TOPIC_ARRAY => Some(Self::Array),
            TOPIC_SINGLY_LINKED_LIST => Some(Self::SinglyLinkedList),
            TOPIC_DOUBLY_LINKED_LIST => Some(Self::DoublyLinkedList),
            TOPIC_CIRCULAR_LINKED_LIST => Some(Self::CircularLinkedList),
            TOPIC_TREE => Some(Self::Tree),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => TOPIC_ARRAY,
            Self::SinglyLinkedList => TOPIC_SINGLY_LINKED_LIST,
            Self::DoublyLinkedList => TOPIC_DOUBLY_LINKED_LIST,
            Self::CircularLinkedList => TOPIC_CIRCULAR_LINKED_LIST,
            Self::Tree => TOPIC_TREE,
        }
    }

    /// Allowed fixture length for this topic
    pub fn fixture_len(&self) -> RangeInclusive<usize> {
        match self {
            Self::Array => ARRAY_LEN,
            Self::SinglyLinkedList | Self::DoublyLinkedList | Self::CircularLinkedList => {
                LINKED_LIST_LEN
            }
            Self::Tree => TREE_LEN,
        }
    }

    /// How the consumer should read the flat fixture
    pub fn layout(&self) -> &'static str {
        match self {
            Self::Array => "elements in index order",
            Self::SinglyLinkedList | Self::DoublyLinkedList => "node values from head to tail",
            Self::CircularLinkedList => "node values from head to tail, tail links to head",
            Self::Tree => "level-order complete binary tree, children of i at 2i+1 and 2i+2",
        }
    }
}

/// Snapshot of the question bank for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionTable {
    pub records: Vec<QuestionRecord>,
}

impl QuestionTable {
    /// Table with no rows; the schema is still available through [`Self::columns`]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn columns(&self) -> &'static [&'static str; 5] {
        &QUESTION_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
