pub mod review_service;

pub use review_service::{extract_text, Reviewer, NO_TEXT_PLACEHOLDER};
