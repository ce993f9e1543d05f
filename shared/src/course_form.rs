//! Course information form: field values, validation, diffing against the
//! loaded baseline, and request payload construction.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{error::SubmitMode, CourseRecord, CourseStatus, ValidationErrors};

/// Lowest accepted course price, inclusive.
pub const MIN_PRICE: i64 = 5000;
/// Highest accepted course price, inclusive.
pub const MAX_PRICE: i64 = 10000;

/// Form fields, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Course title.
    Title,
    /// Short description.
    ShortDescription,
    /// Price.
    Price,
    /// Category select.
    Category,
    /// Tag chips.
    Tags,
    /// Thumbnail upload.
    Thumbnail,
    /// Benefits textarea.
    Benefits,
    /// Requirements list.
    Requirements,
}

impl FormField {
    /// Every field, page order.
    pub const ALL: [FormField; 8] = [
        FormField::Title,
        FormField::ShortDescription,
        FormField::Price,
        FormField::Category,
        FormField::Tags,
        FormField::Thumbnail,
        FormField::Benefits,
        FormField::Requirements,
    ];

    /// Request part name the backend expects for this field.
    pub fn wire_key(self) -> &'static str {
        match self {
            FormField::Title => "courseName",
            FormField::ShortDescription => "courseDescription",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Tags => "tag",
            FormField::Thumbnail => "thumbnailImage",
            FormField::Benefits => "whatYouWillLearn",
            FormField::Requirements => "instructions",
        }
    }
}

/// Image picked in the browser that has not been uploaded yet.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the browser.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PendingUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Thumbnail field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// Already stored image.
    Url(String),
    /// Freshly picked file.
    Pending(PendingUpload),
}

/// Current contents of the course information form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFormValues {
    /// Course title.
    pub title: String,
    /// Short description.
    pub short_description: String,
    /// Parsed price; `None` while the input is empty or not a number.
    pub price: Option<i64>,
    /// Selected category id; empty when nothing is chosen.
    pub category: String,
    /// Tag chips in entry order.
    pub tags: Vec<String>,
    /// Thumbnail, if one is set.
    pub thumbnail: Option<Thumbnail>,
    /// Benefits text.
    pub benefits: String,
    /// Requirements in entry order.
    pub requirements: Vec<String>,
}

impl CourseFormValues {
    /// Form state on mount: a copy of `existing` in edit mode, blank
    /// otherwise.
    pub fn initialize(existing: Option<&CourseRecord>) -> Self {
        existing.map(Self::from_record).unwrap_or_default()
    }

    /// Populates every field from a stored course.
    pub fn from_record(record: &CourseRecord) -> Self {
        let thumbnail = if record.thumbnail.is_empty() {
            None
        } else {
            Some(Thumbnail::Url(record.thumbnail.clone()))
        };
        Self {
            title: record.title.clone(),
            short_description: record.short_description.clone(),
            price: Some(record.price),
            category: record.category.id().to_string(),
            tags: record.tags.clone(),
            thumbnail,
            benefits: record.benefits.clone(),
            requirements: record.requirements.clone(),
        }
    }

    /// Adds a tag chip. Blank and duplicate tags are ignored.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes the tag chip at `index`, if any.
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Appends a requirement line. Blank input is ignored.
    pub fn add_requirement(&mut self, raw: &str) -> bool {
        let requirement = raw.trim();
        if requirement.is_empty() {
            return false;
        }
        self.requirements.push(requirement.to_string());
        true
    }

    /// Removes the requirement at `index`, if any.
    pub fn remove_requirement(&mut self, index: usize) -> Option<String> {
        (index < self.requirements.len()).then(|| self.requirements.remove(index))
    }
}

/// Parses the raw price input. Empty or non-numeric input yields `None`.
pub fn parse_price(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Checks required fields and the price range.
///
/// Each field reports at most one message: the first rule it breaks.
pub fn validate(values: &CourseFormValues) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if values.title.trim().is_empty() {
        errors.reject(FormField::Title, "Course title is required");
    }
    if values.short_description.trim().is_empty() {
        errors.reject(FormField::ShortDescription, "Course Description is required");
    }
    match values.price {
        None => errors.reject(FormField::Price, "Course Price is required"),
        Some(price) if price < MIN_PRICE => {
            errors.reject(FormField::Price, "Price must be at least ₹5000")
        },
        Some(price) if price > MAX_PRICE => {
            errors.reject(FormField::Price, "Price must not exceed ₹10000")
        },
        Some(_) => {},
    }
    if values.category.trim().is_empty() {
        errors.reject(FormField::Category, "Course Category is required");
    }
    if values.benefits.trim().is_empty() {
        errors.reject(FormField::Benefits, "Benefits of the course is required");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Text form of a sequence field used for change detection.
///
/// Sequences compare by their comma-joined text, so `["a,b"]` and
/// `["a", "b"]` count as equal while any reordering that changes the joined
/// text counts as a change.
pub fn canonical_sequence(items: &[String]) -> String {
    items.join(",")
}

/// JSON text encoding used for sequence parts in request payloads.
pub fn encode_sequence(items: &[String]) -> String {
    Value::from(items.to_vec()).to_string()
}

/// One request part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    /// Plain text part.
    Text(String),
    /// File part; forces a multipart body.
    File(PendingUpload),
}

impl PayloadValue {
    /// Text contents, or `None` for a file part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(text) => Some(text),
            PayloadValue::File(_) => None,
        }
    }
}

fn thumbnail_part(thumbnail: Option<&Thumbnail>) -> PayloadValue {
    match thumbnail {
        Some(Thumbnail::Url(url)) => PayloadValue::Text(url.clone()),
        Some(Thumbnail::Pending(upload)) => PayloadValue::File(upload.clone()),
        None => PayloadValue::Text(String::new()),
    }
}

fn field_part(values: &CourseFormValues, field: FormField) -> PayloadValue {
    match field {
        FormField::Title => PayloadValue::Text(values.title.clone()),
        FormField::ShortDescription => PayloadValue::Text(values.short_description.clone()),
        FormField::Price => {
            PayloadValue::Text(values.price.map(|price| price.to_string()).unwrap_or_default())
        },
        FormField::Category => PayloadValue::Text(values.category.clone()),
        FormField::Tags => PayloadValue::Text(encode_sequence(&values.tags)),
        FormField::Thumbnail => thumbnail_part(values.thumbnail.as_ref()),
        FormField::Benefits => PayloadValue::Text(values.benefits.clone()),
        FormField::Requirements => PayloadValue::Text(encode_sequence(&values.requirements)),
    }
}

fn field_changed(values: &CourseFormValues, baseline: &CourseRecord, field: FormField) -> bool {
    match field {
        FormField::Title => values.title != baseline.title,
        FormField::ShortDescription => values.short_description != baseline.short_description,
        FormField::Price => values.price != Some(baseline.price),
        FormField::Category => values.category != baseline.category.id(),
        FormField::Tags => canonical_sequence(&values.tags) != canonical_sequence(&baseline.tags),
        FormField::Thumbnail => match &values.thumbnail {
            Some(Thumbnail::Url(url)) => *url != baseline.thumbnail,
            Some(Thumbnail::Pending(_)) => true,
            // Clearing the picker keeps the stored image.
            None => false,
        },
        FormField::Benefits => values.benefits != baseline.benefits,
        FormField::Requirements => {
            canonical_sequence(&values.requirements) != canonical_sequence(&baseline.requirements)
        },
    }
}

/// Fields whose form value differs from the baseline, with their new wire
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraftDiff {
    changes: BTreeMap<FormField, PayloadValue>,
}

impl FormDraftDiff {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether `field` changed.
    pub fn contains(&self, field: FormField) -> bool {
        self.changes.contains_key(&field)
    }

    /// New wire value of `field`, if it changed.
    pub fn get(&self, field: FormField) -> Option<&PayloadValue> {
        self.changes.get(&field)
    }

    /// Changed fields in page order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.changes.keys().copied()
    }
}

/// Field-by-field comparison of the form against `baseline`.
pub fn compute_diff(values: &CourseFormValues, baseline: &CourseRecord) -> FormDraftDiff {
    let changes = FormField::ALL
        .into_iter()
        .filter(|field| field_changed(values, baseline, *field))
        .map(|field| (field, field_part(values, field)))
        .collect::<BTreeMap<_, _>>();
    tracing::debug!(
        course_id = %baseline.id,
        changed = changes.len(),
        "computed course form diff"
    );
    FormDraftDiff {
        changes,
    }
}

/// Request body for a create or update call, as ordered named parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePayload {
    mode: SubmitMode,
    parts: Vec<(&'static str, PayloadValue)>,
}

impl CoursePayload {
    /// Full record for a new course, always starting as a draft.
    pub fn create(values: &CourseFormValues) -> Self {
        let mut parts = Vec::with_capacity(FormField::ALL.len() + 1);
        for field in FormField::ALL {
            parts.push((field.wire_key(), field_part(values, field)));
            if field == FormField::Category {
                parts.push(("status", PayloadValue::Text(CourseStatus::Draft.as_str().to_string())));
            }
        }
        Self {
            mode: SubmitMode::Create,
            parts,
        }
    }

    /// Partial update carrying the course id and only the changed fields.
    pub fn update(course_id: &str, diff: &FormDraftDiff) -> Self {
        let mut parts = Vec::with_capacity(diff.len() + 1);
        parts.push(("courseId", PayloadValue::Text(course_id.to_string())));
        parts.extend(
            diff.changes
                .iter()
                .map(|(field, value)| (field.wire_key(), value.clone())),
        );
        Self {
            mode: SubmitMode::Update,
            parts,
        }
    }

    /// Whether this is a create or update body.
    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    /// Parts in insertion order.
    pub fn parts(&self) -> &[(&'static str, PayloadValue)] {
        &self.parts
    }

    /// Part names in insertion order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.parts.iter().map(|(key, _)| *key).collect()
    }

    /// Part named `key`.
    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.parts
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Text of the part named `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PayloadValue::as_text)
    }

    /// True when a file part is present and the body must be multipart.
    pub fn is_multipart(&self) -> bool {
        self.parts
            .iter()
            .any(|(_, value)| matches!(value, PayloadValue::File(_)))
    }

    /// JSON object of the text parts; file parts are left out.
    pub fn to_json(&self) -> Value {
        let object = self
            .parts
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_text()
                    .map(|text| (key.to_string(), Value::String(text.to_string())))
            })
            .collect::<Map<_, _>>();
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CategoryRef;

    fn baseline() -> CourseRecord {
        CourseRecord {
            id: "course-1".to_string(),
            title: "Intro To Go".to_string(),
            short_description: "Goroutines and channels".to_string(),
            price: 7000,
            tags: vec!["go".to_string(), "backend".to_string()],
            category: CategoryRef::Populated {
                id: "cat-1".to_string(),
                name: Some("Web Development".to_string()),
            },
            benefits: "Ship services".to_string(),
            requirements: vec!["A laptop".to_string()],
            thumbnail: "https://cdn.example.com/go.png".to_string(),
            status: CourseStatus::Draft,
        }
    }

    fn valid_values() -> CourseFormValues {
        CourseFormValues::from_record(&baseline())
    }

    #[test]
    fn initialize_without_record_is_blank() {
        assert_eq!(CourseFormValues::initialize(None), CourseFormValues::default());
    }

    #[test]
    fn initialize_copies_every_field() {
        let values = CourseFormValues::initialize(Some(&baseline()));
        assert_eq!(values.title, "Intro To Go");
        assert_eq!(values.price, Some(7000));
        assert_eq!(values.category, "cat-1");
        assert_eq!(
            values.thumbnail,
            Some(Thumbnail::Url("https://cdn.example.com/go.png".to_string()))
        );
        assert_eq!(values.requirements, vec!["A laptop".to_string()]);
    }

    #[test]
    fn validate_reports_each_missing_field_once() {
        let errors = validate(&CourseFormValues::default()).unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some("Course title is required"));
        assert_eq!(
            errors.get(FormField::ShortDescription),
            Some("Course Description is required")
        );
        assert_eq!(errors.get(FormField::Price), Some("Course Price is required"));
        assert_eq!(errors.get(FormField::Category), Some("Course Category is required"));
        assert_eq!(
            errors.get(FormField::Benefits),
            Some("Benefits of the course is required")
        );
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn validate_price_bounds_are_inclusive() {
        let mut values = valid_values();
        for (price, expected) in [
            (4999, Some("Price must be at least ₹5000")),
            (5000, None),
            (10000, None),
            (10001, Some("Price must not exceed ₹10000")),
        ] {
            values.price = Some(price);
            let result = validate(&values);
            assert_eq!(
                result.as_ref().err().and_then(|errors| errors.get(FormField::Price)),
                expected,
                "price {price}"
            );
        }
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        let mut values = valid_values();
        values.title = "   ".to_string();
        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::Title).is_some());
    }

    #[test]
    fn unmodified_form_has_empty_diff() {
        let diff = compute_diff(&valid_values(), &baseline());
        assert!(diff.is_empty());
    }

    #[test]
    fn diff_carries_only_changed_fields() {
        let mut values = valid_values();
        values.price = Some(6000);
        values.tags.push("cloud".to_string());

        let diff = compute_diff(&values, &baseline());
        assert_eq!(diff.fields().collect::<Vec<_>>(), vec![FormField::Price, FormField::Tags]);
        assert_eq!(diff.get(FormField::Price), Some(&PayloadValue::Text("6000".to_string())));
        assert_eq!(
            diff.get(FormField::Tags),
            Some(&PayloadValue::Text(r#"["go","backend","cloud"]"#.to_string()))
        );
    }

    #[test]
    fn sequences_compare_by_joined_text() {
        let mut values = valid_values();
        values.tags = vec!["go,backend".to_string()];
        assert!(!compute_diff(&values, &baseline()).contains(FormField::Tags));

        values.tags = vec!["backend".to_string(), "go".to_string()];
        assert!(compute_diff(&values, &baseline()).contains(FormField::Tags));
    }

    #[test]
    fn pending_thumbnail_is_always_a_change() {
        let mut values = valid_values();
        values.thumbnail = Some(Thumbnail::Pending(PendingUpload {
            file_name: "go.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50],
        }));
        let diff = compute_diff(&values, &baseline());
        assert_eq!(diff.fields().collect::<Vec<_>>(), vec![FormField::Thumbnail]);

        let payload = CoursePayload::update("course-1", &diff);
        assert!(payload.is_multipart());
        assert_eq!(payload.keys(), vec!["courseId", "thumbnailImage"]);
    }

    #[test]
    fn create_payload_has_every_field_and_draft_status() {
        let payload = CoursePayload::create(&valid_values());
        assert_eq!(
            payload.keys(),
            vec![
                "courseName",
                "courseDescription",
                "price",
                "category",
                "status",
                "tag",
                "thumbnailImage",
                "whatYouWillLearn",
                "instructions",
            ]
        );
        assert_eq!(payload.text("status"), Some("draft"));
        assert_eq!(payload.text("instructions"), Some(r#"["A laptop"]"#));
        assert!(!payload.is_multipart());
        assert_eq!(payload.to_json()["price"], Value::String("7000".to_string()));
    }

    #[test]
    fn tag_and_requirement_helpers_skip_blank_input() {
        let mut values = CourseFormValues::default();
        assert!(values.add_tag(" rust "));
        assert!(!values.add_tag("rust"));
        assert!(!values.add_tag("   "));
        assert!(values.add_requirement("Basic CLI usage"));
        assert!(!values.add_requirement(""));

        assert_eq!(values.remove_tag(3), None);
        assert_eq!(values.remove_tag(0), Some("rust".to_string()));
        assert_eq!(values.remove_requirement(0), Some("Basic CLI usage".to_string()));
        assert!(values.tags.is_empty() && values.requirements.is_empty());
    }

    #[test]
    fn parse_price_rejects_non_numbers() {
        assert_eq!(parse_price(" 7000 "), Some(7000));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("seven"), None);
    }
}
