use yew::prelude::*;

use crate::{components::course_card::CourseCard, models::CourseSummary};

#[derive(Properties, PartialEq)]
pub struct CourseSliderProps {
    pub courses: Vec<CourseSummary>,
}

/// Horizontally scrolling row of course cards.
#[function_component(CourseSlider)]
pub fn course_slider(props: &CourseSliderProps) -> Html {
    if props.courses.is_empty() {
        return html! { <p class="text-richblack-5">{ "No Course Found" }</p> };
    }

    html! {
        <div class={classes!("course-slider", "flex", "gap-6", "overflow-x-auto", "snap-x", "pb-4")}>
            { for props.courses.iter().map(|course| html! {
                <div key={course.id.clone()} class={classes!("snap-start", "shrink-0", "w-[280px]", "lg:w-[340px]")}>
                    <CourseCard course={course.clone()} image_class={classes!("h-[250px]")} />
                </div>
            }) }
        </div>
    }
}
