pub mod submission;

pub use submission::{ensure_pdf_extension, select_dropped_path, select_submission, validate_submission};
