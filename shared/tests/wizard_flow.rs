//! End-to-end course submission through the wizard against a recording backend.

use std::cell::RefCell;

use anyhow::Result;
use async_trait::async_trait;
use coursehub_shared::{
    course_form::FormField,
    wizard::{SubmitOutcome, BUILDER_STEP, FIRST_STEP},
    ApiError, CatalogPageData, Category, CategoryRef, CourseApi, CourseFormError,
    CourseFormValues, CoursePayload, CourseRecord, CourseStatus, CourseSummary, SubmitMode,
    WizardController,
};

/// In-memory backend that records every create/edit payload.
struct RecordingApi {
    calls: RefCell<Vec<CoursePayload>>,
    fail: bool,
    response: CourseRecord,
}

impl RecordingApi {
    fn returning(response: CourseRecord) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: false,
            response,
        }
    }

    fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
            response: CourseRecord::default(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn last_payload(&self) -> Option<CoursePayload> {
        self.calls.borrow().last().cloned()
    }

    fn answer(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        self.calls.borrow_mut().push(payload.clone());
        if self.fail {
            Err(ApiError::Http {
                status: 502,
            })
        } else {
            Ok(self.response.clone())
        }
    }
}

#[async_trait(?Send)]
impl CourseApi for RecordingApi {
    async fn create_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        self.answer(payload)
    }

    async fn edit_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        self.answer(payload)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(Vec::new())
    }

    async fn category_page(&self, _category_id: &str) -> Result<CatalogPageData, ApiError> {
        Ok(CatalogPageData::default())
    }

    async fn list_all_courses(&self) -> Result<Vec<CourseSummary>, ApiError> {
        Ok(Vec::new())
    }
}

fn stored_course() -> CourseRecord {
    CourseRecord {
        id: "course-42".to_string(),
        title: "Intro To Go".to_string(),
        short_description: "Concurrency basics".to_string(),
        price: 7000,
        tags: vec!["a".to_string(), "b".to_string()],
        category: CategoryRef::Populated {
            id: "c1".to_string(),
            name: Some("Programming".to_string()),
        },
        benefits: "B".to_string(),
        requirements: vec!["r1".to_string()],
        thumbnail: "https://cdn.example.com/go.png".to_string(),
        status: CourseStatus::Draft,
    }
}

fn new_course_values() -> CourseFormValues {
    CourseFormValues {
        title: "X".to_string(),
        short_description: "Y".to_string(),
        price: Some(7000),
        category: "c1".to_string(),
        tags: vec!["a".to_string(), "b".to_string()],
        thumbnail: None,
        benefits: "B".to_string(),
        requirements: vec!["r1".to_string()],
    }
}

#[tokio::test]
async fn create_sends_full_draft_and_advances() -> Result<()> {
    let api = RecordingApi::returning(stored_course());
    let mut wizard = WizardController::new();

    let outcome = wizard.submit(&api, &new_course_values()).await?;

    assert_eq!(outcome, SubmitOutcome::Applied(stored_course()));
    let payload = api.last_payload().expect("create payload recorded");
    assert_eq!(payload.mode(), SubmitMode::Create);
    assert_eq!(payload.text("status"), Some("draft"));
    assert_eq!(payload.text("courseName"), Some("X"));
    assert_eq!(payload.text("courseDescription"), Some("Y"));
    assert_eq!(payload.text("price"), Some("7000"));
    assert_eq!(payload.text("category"), Some("c1"));
    assert_eq!(payload.text("whatYouWillLearn"), Some("B"));
    assert_eq!(payload.text("tag"), Some(r#"["a","b"]"#));
    assert_eq!(payload.text("instructions"), Some(r#"["r1"]"#));
    assert!(payload.get("thumbnailImage").is_some());

    assert_eq!(wizard.context().step(), BUILDER_STEP);
    assert_eq!(wizard.context().draft(), Some(&stored_course()));
    Ok(())
}

#[tokio::test]
async fn out_of_range_price_never_reaches_the_network() -> Result<()> {
    let api = RecordingApi::returning(stored_course());
    let mut wizard = WizardController::new();

    for price in [4999, 10001, -1] {
        let mut values = new_course_values();
        values.price = Some(price);
        let err = wizard.submit(&api, &values).await.unwrap_err();
        match err {
            CourseFormError::Validation(errors) => assert!(errors.get(FormField::Price).is_some()),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    assert_eq!(api.call_count(), 0);
    assert_eq!(wizard.context().draft(), None);
    assert_eq!(wizard.context().step(), FIRST_STEP);
    Ok(())
}

#[tokio::test]
async fn saved_draft_reopens_for_editing() -> Result<()> {
    let api = RecordingApi::returning(stored_course());
    let mut wizard = WizardController::new();
    wizard.submit(&api, &new_course_values()).await?;
    assert_eq!(wizard.context().step(), BUILDER_STEP);

    wizard.back_to_information();
    let draft = wizard.context().draft().cloned().expect("draft kept after going back");
    wizard.start_edit(draft);

    assert_eq!(wizard.context().step(), FIRST_STEP);
    assert!(wizard.context().edit_course());
    assert_eq!(wizard.context().draft(), Some(&stored_course()));
    assert_eq!(wizard.form_values().title, "Intro To Go");

    let mut values = wizard.form_values();
    values.price = Some(9000);
    wizard.submit(&api, &values).await?;
    let payload = api.last_payload().expect("update payload recorded");
    assert_eq!(payload.mode(), SubmitMode::Update);
    assert_eq!(payload.keys(), vec!["courseId", "price"]);
    Ok(())
}

#[tokio::test]
async fn invalid_edit_keeps_the_saved_draft() -> Result<()> {
    let api = RecordingApi::returning(stored_course());
    let mut wizard = WizardController::new();
    wizard.start_edit(stored_course());
    let before = wizard.context().clone();

    let mut values = wizard.form_values();
    values.price = Some(12000);
    let err = wizard.submit(&api, &values).await.unwrap_err();

    assert!(matches!(err, CourseFormError::Validation(_)));
    assert_eq!(api.call_count(), 0);
    assert_eq!(wizard.context().draft(), Some(&stored_course()));
    assert_eq!(wizard.context(), &before);
    assert!(!wizard.is_submitting());
    Ok(())
}

#[tokio::test]
async fn unchanged_edit_reports_no_changes_without_calls() -> Result<()> {
    let api = RecordingApi::returning(stored_course());
    let mut wizard = WizardController::new();
    wizard.start_edit(stored_course());

    let values = wizard.form_values();
    let err = wizard.submit(&api, &values).await.unwrap_err();

    assert_eq!(err, CourseFormError::NoChanges);
    assert_eq!(api.call_count(), 0);
    assert!(!wizard.is_submitting());
    Ok(())
}

#[tokio::test]
async fn price_only_edit_sends_id_and_price() -> Result<()> {
    let mut updated = stored_course();
    updated.price = 6000;
    let api = RecordingApi::returning(updated.clone());
    let mut wizard = WizardController::new();
    wizard.start_edit(stored_course());

    let mut values = wizard.form_values();
    values.price = Some(6000);
    wizard.submit(&api, &values).await?;

    let payload = api.last_payload().expect("update payload recorded");
    assert_eq!(payload.mode(), SubmitMode::Update);
    assert_eq!(payload.keys(), vec!["courseId", "price"]);
    assert_eq!(payload.text("courseId"), Some("course-42"));
    assert_eq!(payload.text("price"), Some("6000"));

    // The server record is the new baseline.
    wizard.back_to_information();
    let again = wizard.form_values();
    assert_eq!(again.price, Some(6000));
    assert_eq!(
        wizard.submit(&api, &again).await.unwrap_err(),
        CourseFormError::NoChanges
    );
    assert_eq!(api.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn joined_text_equal_tags_are_not_sent() -> Result<()> {
    let api = RecordingApi::returning(stored_course());
    let mut wizard = WizardController::new();
    wizard.start_edit(stored_course());

    let mut values = wizard.form_values();
    values.tags = vec!["a,b".to_string()];
    values.benefits = "Better B".to_string();
    wizard.submit(&api, &values).await?;

    let payload = api.last_payload().expect("update payload recorded");
    assert_eq!(payload.keys(), vec!["courseId", "whatYouWillLearn"]);
    Ok(())
}

#[tokio::test]
async fn network_failure_is_recoverable() -> Result<()> {
    let api = RecordingApi::failing();
    let mut wizard = WizardController::new();

    let err = wizard.submit(&api, &new_course_values()).await.unwrap_err();
    assert_eq!(
        err,
        CourseFormError::Submission {
            mode: SubmitMode::Create,
            source: ApiError::Http {
                status: 502,
            },
        }
    );
    assert_eq!(err.user_message(), "Failed to add the course.");
    assert_eq!(wizard.context().draft(), None);
    assert_eq!(wizard.context().step(), FIRST_STEP);

    let retry = RecordingApi::returning(stored_course());
    wizard.submit(&retry, &new_course_values()).await?;
    assert_eq!(wizard.context().step(), BUILDER_STEP);
    Ok(())
}
