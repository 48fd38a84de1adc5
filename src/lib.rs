//! Applicant-tracking-system readiness scoring for resumes.
//!
//! The core is [`scoring::calculate_score`], a pure function from a
//! [`resume::ResumeDocument`] to a 0-100 total plus a short list of
//! suggestions. Everything else in the crate (storage, config, report
//! rendering, the live `watch` view) is a caller of that function.

pub mod config;
pub mod logging;
pub mod output;
pub mod resume;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
