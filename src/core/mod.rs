//! Core Module - Question Bank & Selection Logic

pub mod fixture;
pub mod seed;
pub mod selector;
pub mod store;

pub use fixture::generate;
pub use seed::{ensure_question_bank, sample_questions, write_sample_bank};
pub use selector::{filter_matching, select};
pub use store::{read_questions, QuestionStore};
