// 重新导出shared crate的数据模型
#[cfg(feature = "mock")]
use std::cell::RefCell;

#[cfg(feature = "mock")]
use async_trait::async_trait;
pub use coursehub_shared::{Category, CourseSummary};
#[cfg(feature = "mock")]
use coursehub_shared::{
    ApiError, CatalogPageData, CategoryRef, CourseApi, CoursePayload, CourseRecord, CourseStatus,
    InstructorInfo, PayloadValue,
};

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
const MOCK_CATEGORIES: &[(&str, &str, &str)] = &[
    ("cat-web", "Web Development", "Build modern websites and services, front to back."),
    ("cat-data", "Data Science", "Statistics, notebooks and the models built on them."),
    ("cat-sys", "Systems Programming", "Memory, concurrency and the machines underneath."),
];

#[cfg(feature = "mock")]
const MOCK_COURSE_NAMES: &[&str] = &[
    "Intro To Go",
    "Full Stack React",
    "Pandas In Practice",
    "Rust For Backend Engineers",
    "Machine Learning Basics",
    "Operating Systems From Scratch",
    "TypeScript Deep Dive",
    "SQL For Analysts",
];

/// 返回全部课程列表（CourseSummary）。
#[cfg(feature = "mock")]
pub fn get_mock_courses() -> Vec<CourseSummary> {
    MOCK_COURSE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| CourseSummary {
            id: format!("course-{:03}", i + 1),
            name: name.to_string(),
            thumbnail: Some(crate::config::asset_path(&format!("static/course-{}.jpg", i % 4 + 1))),
            price: Some(5000 + (i as i64 % 6) * 1000),
            instructor: Some(InstructorInfo {
                first_name: ["Asha", "Ben", "Chen", "Dana"][i % 4].to_string(),
                last_name: "Mentor".to_string(),
            }),
            review_count: (i * 7) % 23,
            created_at: Some(format!("2024-{:02}-10T09:00:00Z", i + 1)),
        })
        .collect()
}

/// 返回分类列表，课程按下标轮流分配到各分类。
#[cfg(feature = "mock")]
pub fn get_mock_categories() -> Vec<Category> {
    let courses = get_mock_courses();
    MOCK_CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, (id, name, description))| Category {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            courses: courses
                .iter()
                .enumerate()
                .filter(|(i, _)| i % MOCK_CATEGORIES.len() == idx)
                .map(|(_, course)| course.clone())
                .collect(),
        })
        .collect()
}

#[cfg(feature = "mock")]
fn apply_payload(record: &mut CourseRecord, payload: &CoursePayload) -> Result<(), ApiError> {
    let decode_list = |raw: &str| {
        serde_json::from_str::<Vec<String>>(raw).map_err(|e| ApiError::Parse(e.to_string()))
    };
    for (key, value) in payload.parts() {
        let text = match value {
            PayloadValue::Text(text) => text.clone(),
            PayloadValue::File(upload) => {
                crate::config::asset_path(&format!("uploads/{}", upload.file_name))
            },
        };
        match *key {
            "courseName" => record.title = text,
            "courseDescription" => record.short_description = text,
            "price" => {
                record.price = text
                    .parse()
                    .map_err(|_| ApiError::Rejected(format!("invalid price `{text}`")))?
            },
            "tag" => record.tags = decode_list(&text)?,
            "category" => record.category = CategoryRef::Id(text),
            "whatYouWillLearn" => record.benefits = text,
            "instructions" => record.requirements = decode_list(&text)?,
            "thumbnailImage" => record.thumbnail = text,
            "status" => record.status = CourseStatus::Draft,
            _ => {},
        }
    }
    Ok(())
}

/// 内存版后端：保存最近一次创建/编辑的课程。
#[cfg(feature = "mock")]
#[derive(Default)]
pub struct MockCourseApi {
    stored: RefCell<Vec<CourseRecord>>,
}

#[cfg(feature = "mock")]
#[async_trait(?Send)]
impl CourseApi for MockCourseApi {
    async fn create_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        let mut stored = self.stored.borrow_mut();
        let mut record = CourseRecord {
            id: format!("mock-course-{}", stored.len() + 1),
            ..CourseRecord::default()
        };
        apply_payload(&mut record, payload)?;
        stored.push(record.clone());
        Ok(record)
    }

    async fn edit_course(&self, payload: &CoursePayload) -> Result<CourseRecord, ApiError> {
        let course_id = payload
            .text("courseId")
            .ok_or_else(|| ApiError::Rejected("courseId is required".to_string()))?;
        let mut stored = self.stored.borrow_mut();
        let record = stored
            .iter_mut()
            .find(|record| record.id == course_id)
            .ok_or_else(|| ApiError::Rejected(format!("course `{course_id}` not found")))?;
        apply_payload(record, payload)?;
        Ok(record.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(get_mock_categories())
    }

    async fn category_page(&self, category_id: &str) -> Result<CatalogPageData, ApiError> {
        let categories = get_mock_categories();
        let selected = categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected("Category not found".to_string()))?;
        let different = categories
            .iter()
            .find(|category| category.id != category_id)
            .cloned();
        let mut most_selling = get_mock_courses();
        most_selling.sort_by(|a, b| b.review_count.cmp(&a.review_count));

        Ok(CatalogPageData {
            selected_category: selected,
            different_category: different,
            most_selling_courses: most_selling,
        })
    }

    async fn list_all_courses(&self) -> Result<Vec<CourseSummary>, ApiError> {
        Ok(get_mock_courses())
    }
}
