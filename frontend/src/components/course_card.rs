use yew::prelude::*;

use crate::{config::asset_path, models::CourseSummary};

#[derive(Properties, PartialEq, Clone)]
pub struct CourseCardProps {
    pub course: CourseSummary,
    /// Extra classes for the thumbnail, e.g. a fixed height in grids.
    #[prop_or_default]
    pub image_class: Classes,
}

fn instructor_name(course: &CourseSummary) -> Option<String> {
    course
        .instructor
        .as_ref()
        .map(|instructor| format!("{} {}", instructor.first_name, instructor.last_name))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;
    let thumbnail = course
        .thumbnail
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| asset_path("static/course-placeholder.png"));

    html! {
        <article class="course-card">
            <img
                src={thumbnail}
                alt={course.name.clone()}
                loading="lazy"
                class={classes!("course-card-image", "w-full", "rounded-xl", "object-cover", props.image_class.clone())}
            />
            <div class="flex flex-col gap-2 px-1 py-3">
                <h3 class="course-card-title">{ &course.name }</h3>
                {
                    if let Some(name) = instructor_name(course) {
                        html! { <p class="course-card-instructor">{ name }</p> }
                    } else {
                        html! {}
                    }
                }
                <p class="course-card-reviews">
                    { format!("{} Ratings", course.review_count) }
                </p>
                {
                    if let Some(price) = course.price {
                        html! { <p class="course-card-price">{ format!("Rs. {}", price) }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </article>
    }
}
