use std::rc::Rc;

use async_trait::async_trait;
use coursehub_shared::{
    api::{
        decode_envelope, ALL_COURSES_PATH, CATEGORIES_PATH, CATEGORY_PAGE_PATH,
        CREATE_COURSE_PATH, EDIT_COURSE_PATH,
    },
    ApiConfig, ApiError, CatalogPageData, Category, CourseApi, CoursePayload, CourseRecord,
    CourseSummary, PayloadValue,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Course backend shared with every page through a context provider.
#[derive(Clone)]
pub struct CourseClient(Rc<dyn CourseApi>);

impl CourseClient {
    pub fn api(&self) -> &dyn CourseApi {
        self.0.as_ref()
    }
}

impl PartialEq for CourseClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Builds the client for this build: HTTP by default, in-memory under `mock`.
pub fn course_client(config: ApiConfig) -> CourseClient {
    web_sys::console::log_1(&format!("Course API base: {}", config.base_url()).into());

    #[cfg(feature = "mock")]
    {
        let _ = config;
        return CourseClient(Rc::new(crate::models::MockCourseApi::default()));
    }

    #[cfg(not(feature = "mock"))]
    {
        CourseClient(Rc::new(HttpCourseApi::new(config)))
    }
}

/// `gloo-net` implementation of [`CourseApi`].
pub struct HttpCourseApi {
    config: ApiConfig,
}

impl HttpCourseApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.config.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send_course(&self, path: &str, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        let builder = self.authorized(Request::post(&self.config.endpoint(path)));
        let request = if payload.is_multipart() {
            builder
                .body(multipart_body(payload)?)
                .map_err(|e| ApiError::Network(format!("{:?}", e)))?
        } else {
            builder
                .header("Content-Type", "application/json")
                .json(&payload.to_json())
                .map_err(|e| ApiError::Parse(format!("Serialize error: {:?}", e)))?
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        read_envelope(response).await
    }
}

async fn read_envelope<T>(response: Response) -> Result<T, ApiError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    decode_envelope(&body)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

/// Multipart body for payloads that carry a picked thumbnail.
fn multipart_body(payload: &CoursePayload) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (key, value) in payload.parts() {
        match value {
            PayloadValue::Text(text) => form.append_with_str(key, text).map_err(js_error)?,
            PayloadValue::File(upload) => {
                let bytes = Uint8Array::from(upload.bytes.as_slice());
                let options = BlobPropertyBag::new();
                options.set_type(&upload.content_type);
                let blob =
                    Blob::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &options)
                        .map_err(js_error)?;
                form.append_with_blob_and_filename(key, &blob, &upload.file_name)
                    .map_err(js_error)?;
            },
        }
    }
    Ok(form)
}

#[async_trait(?Send)]
impl CourseApi for HttpCourseApi {
    async fn create_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        self.send_course(CREATE_COURSE_PATH, payload).await
    }

    async fn edit_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        self.send_course(EDIT_COURSE_PATH, payload).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .authorized(Request::get(&self.config.endpoint(CATEGORIES_PATH)))
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        read_envelope(response).await
    }

    async fn category_page(&self, category_id: &str) -> Result<CatalogPageData, ApiError> {
        let response = self
            .authorized(Request::post(&self.config.endpoint(CATEGORY_PAGE_PATH)))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "categoryId": category_id }))
            .map_err(|e| ApiError::Parse(format!("Serialize error: {:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        read_envelope(response).await
    }

    async fn list_all_courses(&self) -> Result<Vec<CourseSummary>, ApiError> {
        let response = self
            .authorized(Request::get(&self.config.endpoint(ALL_COURSES_PATH)))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        read_envelope(response).await
    }
}
