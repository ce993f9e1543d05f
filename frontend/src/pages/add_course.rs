use coursehub_shared::{
    wizard::{BUILDER_STEP, FIRST_STEP, LAST_STEP},
    CourseRecord, SubmitMode,
};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    components::error_banner::{BannerKind, ErrorBanner},
    hooks::use_scroll_to_top,
    pages::course_information::CourseInformationForm,
    router::Route,
    wizard_context::WizardHandle,
};

const STEP_TITLES: [&str; 3] = ["Course Information", "Course Builder", "Publish"];

fn render_steps(active: u8) -> Html {
    html! {
        <ol class="relative mb-2 flex w-full justify-center">
            { for STEP_TITLES.iter().enumerate().map(|(index, title)| {
                let step = index as u8 + FIRST_STEP;
                let marker_classes = if step < active {
                    classes!("border-yellow-50", "bg-yellow-50", "text-yellow-50")
                } else if step == active {
                    classes!("border-yellow-50", "bg-yellow-900", "text-yellow-50")
                } else {
                    classes!("border-richblack-700", "bg-richblack-800", "text-richblack-300")
                };
                html! {
                    <li key={step} class="flex flex-col items-center gap-y-2">
                        <span class={classes!("grid", "aspect-square", "w-[34px]", "place-items-center", "rounded-full", "border", marker_classes)}>
                            { if step < active { "✓".to_string() } else { step.to_string() } }
                        </span>
                        <p class={classes!("text-sm", if step <= active { "text-richblack-5" } else { "text-richblack-500" })}>
                            { *title }
                        </p>
                    </li>
                }
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
struct DraftSummaryProps {
    course: CourseRecord,
    step: u8,
}

/// Read-only view of the saved draft shown on the later steps.
#[function_component(DraftSummary)]
fn draft_summary(props: &DraftSummaryProps) -> Html {
    let wizard = use_context::<WizardHandle>();
    let navigator = use_navigator();
    let Some(wizard) = wizard else {
        return html! {};
    };

    // Going back edits the saved draft, so the URL moves to the edit route.
    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.update(|w| w.back_to_information());
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::EditCourse);
            }
        })
    };
    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.update(|w| w.advance()))
    };
    let course = &props.course;

    html! {
        <section class="space-y-4 rounded-md border-[1px] border-richblack-700 bg-richblack-800 p-6 text-richblack-5">
            <h2 class="text-2xl font-semibold">{ &course.title }</h2>
            <p class="text-richblack-200">{ &course.short_description }</p>
            <p>{ format!("Price: ₹{}", course.price) }</p>
            <p>{ format!("Status: {}", course.status.as_str()) }</p>
            if !course.tags.is_empty() {
                <p>{ format!("Tags: {}", course.tags.join(", ")) }</p>
            }
            <div class="flex justify-end gap-x-2">
                <button type="button" class="rounded-md bg-richblack-300 px-5 py-2 font-semibold text-richblack-900" onclick={on_back}>
                    { "Back" }
                </button>
                if props.step < LAST_STEP {
                    <button type="button" class="btn-fluent-primary" onclick={on_next}>
                        { "Next" }
                    </button>
                }
            </div>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AddCoursePageProps {
    /// Reopen the current draft for editing instead of starting empty.
    #[prop_or_default]
    pub edit: bool,
}

#[function_component(AddCoursePage)]
pub fn add_course_page(props: &AddCoursePageProps) -> Html {
    use_scroll_to_top();
    let wizard = use_context::<WizardHandle>();
    // Outlives the form, which unmounts once a save advances the step.
    let saved_notice = use_state(|| None::<SubmitMode>);

    {
        let wizard = wizard.clone();
        use_effect_with(props.edit, move |edit| {
            if let Some(wizard) = wizard.as_ref().filter(|_| *edit) {
                wizard.update(|w| {
                    if let Some(draft) = w.context().draft().cloned() {
                        w.start_edit(draft);
                    }
                });
            }
            || ()
        });
    }

    // Leaving the page drops the draft and any response still in flight.
    {
        let wizard = wizard.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(wizard) = wizard {
                    wizard.update(|w| w.start_create());
                }
            }
        });
    }

    let Some(wizard) = wizard else {
        return html! {};
    };
    let context = wizard.snapshot();
    let step = context.step();

    let on_saved = {
        let saved_notice = saved_notice.clone();
        Callback::from(move |mode: SubmitMode| saved_notice.set(Some(mode)))
    };
    let on_notice_close = {
        let saved_notice = saved_notice.clone();
        Callback::from(move |_: ()| saved_notice.set(None))
    };

    html! {
        <main class="mx-auto w-11/12 max-w-[1000px] py-10">
            <h1 class="mb-14 text-3xl font-medium text-richblack-5">
                { if context.edit_course() { "Edit Course" } else { "Add Course" } }
            </h1>
            if let Some(mode) = *saved_notice {
                <ErrorBanner
                    message={mode.success_message().to_string()}
                    kind={BannerKind::Success}
                    on_close={on_notice_close}
                />
            }
            { render_steps(step) }
            <div class="mt-10">
                {
                    match context.draft().cloned() {
                        Some(course) if step >= BUILDER_STEP => html! {
                            <DraftSummary course={course} step={step} />
                        },
                        _ => html! { <CourseInformationForm on_saved={on_saved} /> },
                    }
                }
            </div>
        </main>
    }
}
