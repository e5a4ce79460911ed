pub mod submission;

pub use submission::{FormFields, NewSubmission, Submission};
