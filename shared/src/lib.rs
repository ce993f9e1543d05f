//! Shared course-marketplace models and the browser-independent logic behind
//! the course authoring wizard and the catalog page.
//!
//! Everything here compiles for both the native test target and
//! `wasm32-unknown-unknown`, so the frontend only adds rendering and HTTP.

use serde::{Deserialize, Serialize};

pub mod api;
pub mod catalog;
pub mod course_form;
pub mod error;
pub mod wizard;

pub use api::{ApiConfig, CourseApi};
pub use catalog::{filter_courses, resolve_category_id, CatalogTab};
pub use course_form::{CourseFormValues, CoursePayload, FormDraftDiff, PayloadValue};
pub use error::{ApiError, CourseFormError, LookupError, SubmitMode, ValidationErrors};
pub use wizard::{WizardContext, WizardController};

/// Publication state of a course on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Still being authored; newly created courses always start here.
    #[default]
    Draft,
    /// Visible in the catalog.
    Published,
}

impl CourseStatus {
    /// Wire value used in request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Draft => "draft",
            CourseStatus::Published => "published",
        }
    }
}

/// Category reference on a course record.
///
/// The backend returns either the bare id or the populated category document,
/// depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Bare category id.
    Id(String),
    /// Populated category document.
    Populated {
        /// Category id.
        #[serde(rename = "_id")]
        id: String,
        /// Display name, when the backend includes it.
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    /// Id of the referenced category regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Populated {
                id, ..
            } => id,
        }
    }
}

impl Default for CategoryRef {
    fn default() -> Self {
        CategoryRef::Id(String::new())
    }
}

/// Course as persisted by the backend; the baseline every edit is diffed
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Server-assigned id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Course title.
    #[serde(rename = "courseName", default)]
    pub title: String,
    /// Short description shown on cards and the course page.
    #[serde(rename = "courseDescription", default)]
    pub short_description: String,
    /// Price in whole currency units.
    #[serde(default)]
    pub price: i64,
    /// Ordered tag list.
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
    /// Category the course belongs to.
    #[serde(default)]
    pub category: CategoryRef,
    /// "What you will learn" text.
    #[serde(rename = "whatYouWillLearn", default)]
    pub benefits: String,
    /// Ordered requirement/instruction list.
    #[serde(rename = "instructions", default)]
    pub requirements: Vec<String>,
    /// Stored thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Publication state.
    #[serde(default)]
    pub status: CourseStatus,
}

/// Instructor details embedded in a course summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorInfo {
    /// First name.
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    /// Last name.
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

/// Read-only course listing entry used by the catalog views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Course id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name; the only field search looks at.
    #[serde(rename = "courseName")]
    pub name: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Price in whole currency units.
    #[serde(default)]
    pub price: Option<i64>,
    /// Instructor, when populated.
    #[serde(default)]
    pub instructor: Option<InstructorInfo>,
    /// Number of reviews (the backend sends review ids).
    #[serde(rename = "ratingAndReviews", default, deserialize_with = "review_count")]
    pub review_count: usize,
    /// Creation time as an RFC 3339 string.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

fn review_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let reviews = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(reviews.map_or(0, |reviews| reviews.len()))
}

/// Course category with the courses filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, also the source of the catalog URL slug.
    pub name: String,
    /// Hero text for the catalog page.
    #[serde(default)]
    pub description: String,
    /// Courses in this category, server ordered.
    #[serde(default)]
    pub courses: Vec<CourseSummary>,
}

/// Data behind one catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogPageData {
    /// Category the page is about.
    #[serde(rename = "selectedCategory")]
    pub selected_category: Category,
    /// Another category promoted below the main slider.
    #[serde(rename = "differentCategory", default)]
    pub different_category: Option<Category>,
    /// Best sellers across the marketplace.
    #[serde(rename = "mostSellingCourses", default)]
    pub most_selling_courses: Vec<CourseSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_record_accepts_populated_category() -> anyhow::Result<()> {
        let record: CourseRecord = serde_json::from_str(
            r#"{
                "_id": "c-1",
                "courseName": "Rust 101",
                "courseDescription": "Ownership first",
                "price": 7000,
                "tag": ["rust", "systems"],
                "category": { "_id": "cat-9", "name": "Programming" },
                "whatYouWillLearn": "Borrowing",
                "instructions": ["A laptop"],
                "thumbnail": "https://cdn.example.com/t.png",
                "status": "draft"
            }"#,
        )?;

        assert_eq!(record.category.id(), "cat-9");
        assert_eq!(record.tags, vec!["rust".to_string(), "systems".to_string()]);
        assert_eq!(record.status, CourseStatus::Draft);
        Ok(())
    }

    #[test]
    fn course_record_accepts_bare_category_id() -> anyhow::Result<()> {
        let record: CourseRecord =
            serde_json::from_str(r#"{ "_id": "c-2", "category": "cat-1" }"#)?;
        assert_eq!(record.category, CategoryRef::Id("cat-1".to_string()));
        assert!(record.requirements.is_empty());
        Ok(())
    }

    #[test]
    fn course_summary_counts_reviews() -> anyhow::Result<()> {
        let summary: CourseSummary = serde_json::from_str(
            r#"{ "_id": "s-1", "courseName": "Go", "ratingAndReviews": ["r1", "r2"] }"#,
        )?;
        assert_eq!(summary.review_count, 2);
        assert_eq!(summary.price, None);
        Ok(())
    }
}
