//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::feedback::FeedbackEntry;

/// Helper struct for feedback rows in the listing.
#[derive(Clone)]
pub struct FeedbackRow {
    pub name: String,
    pub comment: String,
    pub rating: String,
}

impl FeedbackRow {
    pub fn from_entry(entry: &FeedbackEntry) -> Self {
        Self {
            name: entry.name.clone(),
            comment: entry.comment.clone(),
            rating: entry.rating.clone(),
        }
    }
}

/// The single shared page: forms, optional result, feedback list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub has_result: bool,
    pub result_val: String,
    pub feedbacks: Vec<FeedbackRow>,
    pub has_feedback: bool,
    pub feedback_count: usize,
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}
