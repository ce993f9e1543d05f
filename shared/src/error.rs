//! Error taxonomy for course authoring and catalog browsing.
//!
//! None of these are fatal: the UI turns each one into a message and lets the
//! user retry or correct their input.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use crate::course_form::FormField;

/// Which request a submission was issuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// First save of a new course.
    Create,
    /// Partial update of an existing draft.
    Update,
}

impl SubmitMode {
    /// Notice shown once the server accepted the submission.
    pub fn success_message(self) -> &'static str {
        match self {
            SubmitMode::Create => "Course added successfully!",
            SubmitMode::Update => "Course updated successfully!",
        }
    }
}

impl fmt::Display for SubmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitMode::Create => f.write_str("create"),
            SubmitMode::Update => f.write_str("update"),
        }
    }
}

/// Transport or backend failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
    },
    /// The body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The backend answered with `success: false`.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Per-field validation messages, one per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    /// Records `message` for `field` unless the field already failed an
    /// earlier rule.
    pub fn reject(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.iter().map(|(_, message)| message).collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Why a course form submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseFormError {
    /// One or more fields failed validation; nothing was sent.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// Edit mode with nothing changed against the baseline; nothing was sent.
    #[error("No changes made to the form")]
    NoChanges,
    /// Another submission from this wizard has not answered yet.
    #[error("A submission is already in progress")]
    SubmitInFlight,
    /// The create/update request failed; form state is untouched.
    #[error("Failed to {mode} the course: {source}")]
    Submission {
        /// Request that failed.
        mode: SubmitMode,
        /// Underlying transport error.
        #[source]
        source: ApiError,
    },
}

impl CourseFormError {
    /// Short message suitable for a toast or banner.
    pub fn user_message(&self) -> String {
        match self {
            CourseFormError::Validation(errors) if errors.get(FormField::Price).is_some() => {
                "Course price must be between ₹5000 and ₹10000".to_string()
            },
            CourseFormError::Validation(_) => "Please fix the highlighted fields".to_string(),
            CourseFormError::NoChanges => "No changes made to the form".to_string(),
            CourseFormError::SubmitInFlight => "Please wait, the course is being saved".to_string(),
            CourseFormError::Submission {
                mode: SubmitMode::Create,
                ..
            } => "Failed to add the course.".to_string(),
            CourseFormError::Submission {
                mode: SubmitMode::Update,
                ..
            } => "Failed to update the course.".to_string(),
        }
    }
}

/// Catalog URL segment did not resolve to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No category slug matches.
    #[error("no category matches catalog `{0}`")]
    NotFound(String),
    /// Several categories share the slug.
    #[error("catalog `{name}` matches {count} categories")]
    Ambiguous {
        /// Requested catalog slug.
        name: String,
        /// Number of matching categories.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rejection_per_field_wins() {
        let mut errors = ValidationErrors::default();
        errors.reject(FormField::Price, "Course Price is required");
        errors.reject(FormField::Price, "Price must be at least ₹5000");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Price), Some("Course Price is required"));
    }

    #[test]
    fn failures_list_in_page_order() {
        let mut errors = ValidationErrors::default();
        errors.reject(FormField::Benefits, "Benefits of the course is required");
        errors.reject(FormField::Title, "Course title is required");

        let fields = errors.iter().map(|(field, _)| field).collect::<Vec<_>>();
        assert_eq!(fields, vec![FormField::Title, FormField::Benefits]);
        assert_eq!(
            errors.to_string(),
            "Course title is required; Benefits of the course is required"
        );
    }

    #[test]
    fn submission_message_depends_on_mode() {
        let err = CourseFormError::Submission {
            mode: SubmitMode::Update,
            source: ApiError::Http {
                status: 500,
            },
        };
        assert_eq!(err.user_message(), "Failed to update the course.");
        assert_eq!(err.to_string(), "Failed to update the course: HTTP error: 500");
    }

    #[test]
    fn success_message_depends_on_mode() {
        assert_eq!(SubmitMode::Create.success_message(), "Course added successfully!");
        assert_eq!(SubmitMode::Update.success_message(), "Course updated successfully!");
    }
}
