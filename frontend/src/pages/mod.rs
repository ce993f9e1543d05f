pub mod add_course;
pub mod catalog;
pub mod categories;
pub mod course_information;
pub mod not_found;
