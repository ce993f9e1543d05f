//! Course backend contract and client configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    course_form::CoursePayload, ApiError, CatalogPageData, Category, CourseRecord, CourseSummary,
};

/// `POST` full course payload, returns the stored course.
pub const CREATE_COURSE_PATH: &str = "/course/createCourse";
/// `POST` partial course payload, returns the stored course.
pub const EDIT_COURSE_PATH: &str = "/course/editCourse";
/// `GET` every category.
pub const CATEGORIES_PATH: &str = "/course/showAllCategories";
/// `POST` `{ categoryId }`, returns catalog page data.
pub const CATEGORY_PAGE_PATH: &str = "/course/getCategoryPageDetails";
/// `GET` every published course.
pub const ALL_COURSES_PATH: &str = "/course/getAllCourses";

/// Where the backend lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    token: Option<String>,
}

impl ApiConfig {
    /// Creates a config for `base_url`; a trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    /// Attaches a bearer token. Blank tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|token| token.trim().trim_matches('"').to_string())
            .filter(|token| !token.is_empty());
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as [`CATEGORIES_PATH`].
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, when a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Standard `{ success, data, message }` response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the backend handled the request.
    pub success: bool,
    /// Payload; absent on failure.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Human readable status.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Payload of a successful response, or [`ApiError::Rejected`].
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::Parse("response carries no data".to_string())),
            (false, _) => Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            )),
        }
    }
}

/// Parses an enveloped JSON body.
pub fn decode_envelope<T>(body: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str::<ApiEnvelope<T>>(body)
        .map_err(|err| ApiError::Parse(err.to_string()))?
        .into_result()
}

/// Backend calls the course pages depend on.
///
/// Futures are `?Send` so browser clients can hold JS handles across awaits.
#[async_trait(?Send)]
pub trait CourseApi {
    /// Creates a course from a full payload.
    async fn create_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError>;

    /// Applies a partial update; the payload carries `courseId`.
    async fn edit_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError>;

    /// Lists every category.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Loads the catalog page for one category id.
    async fn category_page(&self, category_id: &str) -> Result<CatalogPageData, ApiError>;

    /// Lists every course for catalog search.
    async fn list_all_courses(&self) -> Result<Vec<CourseSummary>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:4000/api/v1/");
        assert_eq!(config.base_url(), "http://localhost:4000/api/v1");
        assert_eq!(
            config.endpoint(CATEGORIES_PATH),
            "http://localhost:4000/api/v1/course/showAllCategories"
        );
    }

    #[test]
    fn token_is_normalized() {
        let config = ApiConfig::new("http://api").with_token(Some("\"abc\"".to_string()));
        assert_eq!(config.authorization().as_deref(), Some("Bearer abc"));

        let config = ApiConfig::new("http://api").with_token(Some("  ".to_string()));
        assert_eq!(config.authorization(), None);
    }

    #[test]
    fn envelope_failure_becomes_rejected() {
        let result =
            decode_envelope::<Vec<Category>>(r#"{ "success": false, "message": "no access" }"#);
        assert_eq!(result, Err(ApiError::Rejected("no access".to_string())));
    }

    #[test]
    fn envelope_success_yields_data() -> anyhow::Result<()> {
        let categories = decode_envelope::<Vec<Category>>(
            r#"{ "success": true, "data": [{ "_id": "c1", "name": "Web Dev" }] }"#,
        )?;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Web Dev");
        Ok(())
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(
            decode_envelope::<Vec<Category>>("<html>"),
            Err(ApiError::Parse(_))
        ));
    }
}
