use std::rc::Rc;

use coursehub_shared::filter_courses;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::models::CourseSummary;

/// Courses matching `term`, recomputed only when the list or the term
/// changes.
///
/// # Example
/// ```rust
/// use crate::hooks::use_course_filter;
///
/// #[function_component(SearchResults)]
/// fn search_results() -> Html {
///     let courses = use_state(Vec::<coursehub_shared::CourseSummary>::new);
///     let term = use_state(String::new);
///     let visible = use_course_filter((*courses).clone(), (*term).clone());
///     html! { <p>{ format!("{} courses", visible.len()) }</p> }
/// }
/// ```
#[hook]
pub fn use_course_filter(courses: Vec<CourseSummary>, term: String) -> Rc<Vec<CourseSummary>> {
    use_memo((courses, term), |(courses, term)| filter_courses(courses, term))
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
