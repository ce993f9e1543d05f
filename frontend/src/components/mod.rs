// Reusable components live here.

pub mod chip_input;
pub mod course_card;
pub mod course_slider;
pub mod error_banner;
pub mod loading_spinner;
pub mod requirements_field;
pub mod thumbnail_upload;
