use std::rc::Rc;

use coursehub_shared::{
    course_form::{parse_price, FormField, Thumbnail},
    wizard::{execute, SubmitOutcome},
    CourseFormError, CourseFormValues, SubmitMode, ValidationErrors,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::CourseClient,
    components::{
        chip_input::ChipInput,
        error_banner::{BannerKind, ErrorBanner},
        requirements_field::RequirementsField,
        thumbnail_upload::ThumbnailUpload,
    },
    models::Category,
    wizard_context::WizardHandle,
};

#[derive(Clone, PartialEq, Default)]
struct FormState(CourseFormValues);

enum FormAction {
    Reset(CourseFormValues),
    Title(String),
    ShortDescription(String),
    Price(String),
    Category(String),
    Benefits(String),
    AddTag(String),
    RemoveTag(usize),
    AddRequirement(String),
    RemoveRequirement(usize),
    Thumbnail(Option<Thumbnail>),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            FormAction::Reset(values) => next = values,
            FormAction::Title(title) => next.title = title,
            FormAction::ShortDescription(text) => next.short_description = text,
            FormAction::Price(raw) => next.price = parse_price(&raw),
            FormAction::Category(id) => next.category = id,
            FormAction::Benefits(text) => next.benefits = text,
            FormAction::AddTag(tag) => {
                next.add_tag(&tag);
            },
            FormAction::RemoveTag(index) => {
                next.remove_tag(index);
            },
            FormAction::AddRequirement(requirement) => {
                next.add_requirement(&requirement);
            },
            FormAction::RemoveRequirement(index) => {
                next.remove_requirement(index);
            },
            FormAction::Thumbnail(thumbnail) => next.thumbnail = thumbnail,
        }
        Rc::new(FormState(next))
    }
}

fn input_value(event: InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|target| target.value())
}

fn textarea_value(event: InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|target| target.value())
}

fn field_error(errors: &ValidationErrors, field: FormField) -> Html {
    match errors.get(field) {
        Some(message) => html! {
            <span class="ml-2 text-xs tracking-wide text-pink-200">{ message }</span>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct CourseInformationFormProps {
    /// Fired with the mode once the server accepted a save.
    pub on_saved: Callback<SubmitMode>,
}

/// First wizard step: course metadata.
#[function_component(CourseInformationForm)]
pub fn course_information_form(props: &CourseInformationFormProps) -> Html {
    let client = use_context::<CourseClient>();
    let wizard = use_context::<WizardHandle>();
    let form = use_reducer(FormState::default);
    let field_errors = use_state(ValidationErrors::default);
    let notice = use_state(|| None::<(String, BannerKind)>);
    let categories = use_state(Vec::<Category>::new);
    let categories_loading = use_state(|| true);

    let snapshot = wizard.as_ref().map(|wizard| wizard.snapshot());
    let edit_course = snapshot.as_ref().map(|s| s.edit_course()).unwrap_or(false);
    let draft = snapshot.as_ref().and_then(|s| s.draft().cloned());

    // Populate the form whenever the edited draft changes.
    {
        let form = form.clone();
        let wizard = wizard.clone();
        use_effect_with((edit_course, draft), move |_| {
            if let Some(wizard) = wizard {
                form.dispatch(FormAction::Reset(wizard.read(|w| w.form_values())));
            }
            || ()
        });
    }

    {
        let categories = categories.clone();
        let categories_loading = categories_loading.clone();
        let notice = notice.clone();
        use_effect_with(client.clone(), move |client| {
            if let Some(client) = client.clone() {
                categories_loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match client.api().list_categories().await {
                        Ok(data) => {
                            if !data.is_empty() {
                                categories.set(data);
                            }
                        },
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch categories: {}", e).into(),
                            );
                            notice.set(Some((
                                "Failed to fetch course categories.".to_string(),
                                BannerKind::Error,
                            )));
                        },
                    }
                    categories_loading.set(false);
                });
            }
            || ()
        });
    }

    let (Some(client), Some(wizard)) = (client, wizard) else {
        return html! {};
    };
    let submitting = wizard.is_submitting();
    let values = form.0.clone();

    let on_submit = {
        let form = form.clone();
        let wizard = wizard.clone();
        let field_errors = field_errors.clone();
        let notice = notice.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let pending = match wizard.update(|w| w.prepare_submit(&form.0)) {
                Ok(pending) => pending,
                Err(err) => {
                    if let CourseFormError::Validation(errors) = &err {
                        field_errors.set(errors.clone());
                    }
                    notice.set(Some((err.user_message(), BannerKind::Error)));
                    return;
                },
            };
            field_errors.set(ValidationErrors::default());

            let client = client.clone();
            let wizard = wizard.clone();
            let notice = notice.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mode = pending.mode();
                let result = execute(client.api(), &pending).await;
                match wizard.update(|w| w.complete(pending, result)) {
                    Ok(SubmitOutcome::Applied(_)) => on_saved.emit(mode),
                    Ok(SubmitOutcome::Stale) => {},
                    Err(err) => {
                        web_sys::console::error_1(&format!("Course submit failed: {}", err).into());
                        notice.set(Some((err.user_message(), BannerKind::Error)));
                    },
                }
            });
        })
    };

    let on_continue = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.update(|w| w.continue_without_saving());
        })
    };

    let on_category_change = {
        let form = form.dispatcher();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                form.dispatch(FormAction::Category(target.value()));
            }
        })
    };

    let dispatch = form.dispatcher();
    let on_title = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(e) {
                dispatch.dispatch(FormAction::Title(value));
            }
        })
    };
    let on_short_description = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = textarea_value(e) {
                dispatch.dispatch(FormAction::ShortDescription(value));
            }
        })
    };
    let on_price = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(e) {
                dispatch.dispatch(FormAction::Price(value));
            }
        })
    };
    let on_benefits = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = textarea_value(e) {
                dispatch.dispatch(FormAction::Benefits(value));
            }
        })
    };
    let on_add_tag = {
        let dispatch = dispatch.clone();
        Callback::from(move |tag: String| dispatch.dispatch(FormAction::AddTag(tag)))
    };
    let on_remove_tag = {
        let dispatch = dispatch.clone();
        Callback::from(move |index: usize| dispatch.dispatch(FormAction::RemoveTag(index)))
    };
    let on_add_requirement = {
        let dispatch = dispatch.clone();
        Callback::from(move |line: String| dispatch.dispatch(FormAction::AddRequirement(line)))
    };
    let on_remove_requirement = {
        let dispatch = dispatch.clone();
        Callback::from(move |index: usize| dispatch.dispatch(FormAction::RemoveRequirement(index)))
    };
    let on_thumbnail = {
        let dispatch = dispatch.clone();
        Callback::from(move |thumbnail: Option<Thumbnail>| {
            dispatch.dispatch(FormAction::Thumbnail(thumbnail))
        })
    };

    let on_notice_close = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let errors = &*field_errors;

    html! {
        <div>
            if let Some((message, kind)) = (*notice).clone() {
                <ErrorBanner message={message} kind={kind} on_close={on_notice_close} />
            }
            <form
                onsubmit={on_submit}
                class="space-y-8 rounded-md border-[1px] border-richblack-700 bg-richblack-800 p-6"
            >
                // Course Title
                <div class="flex flex-col space-y-2">
                    <label class="text-sm text-richblack-5" for="courseTitle">
                        { "Course Title " }<sup class="text-pink-200">{ "*" }</sup>
                    </label>
                    <input
                        id="courseTitle"
                        placeholder="Enter Course Title"
                        value={values.title.clone()}
                        oninput={on_title}
                        class="form-style w-full"
                    />
                    { field_error(errors, FormField::Title) }
                </div>

                // Course Short Description
                <div class="flex flex-col space-y-2">
                    <label class="text-sm text-richblack-5" for="courseShortDesc">
                        { "Course Short Description " }<sup class="text-pink-200">{ "*" }</sup>
                    </label>
                    <textarea
                        id="courseShortDesc"
                        placeholder="Enter Description"
                        value={values.short_description.clone()}
                        oninput={on_short_description}
                        class="form-style resize-x-none min-h-[130px] w-full"
                    />
                    { field_error(errors, FormField::ShortDescription) }
                </div>

                // Course Price
                <div class="flex flex-col space-y-2">
                    <label class="text-sm text-richblack-5" for="coursePrice">
                        { "Course Price " }<sup class="text-pink-200">{ "*" }</sup>
                    </label>
                    <div class="relative">
                        <input
                            id="coursePrice"
                            type="number"
                            placeholder="Enter Course Price"
                            value={values.price.map(|price| price.to_string()).unwrap_or_default()}
                            oninput={on_price}
                            class="form-style w-full !pl-12"
                        />
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-2xl text-richblack-400">{ "₹" }</span>
                    </div>
                    { field_error(errors, FormField::Price) }
                </div>

                // Course Category
                <div class="flex flex-col space-y-2">
                    <label class="text-sm text-richblack-5" for="courseCategory">
                        { "Course Category " }<sup class="text-pink-200">{ "*" }</sup>
                    </label>
                    <select id="courseCategory" class="form-style w-full" onchange={on_category_change}>
                        <option value="" disabled=true selected={values.category.is_empty()}>
                            { "Choose a Category" }
                        </option>
                        if !*categories_loading {
                            { for categories.iter().map(|category| html! {
                                <option
                                    key={category.id.clone()}
                                    value={category.id.clone()}
                                    selected={category.id == values.category}
                                >
                                    { &category.name }
                                </option>
                            }) }
                        }
                    </select>
                    { field_error(errors, FormField::Category) }
                </div>

                <ChipInput
                    id="courseTags"
                    label="Tags"
                    placeholder="Enter Tags and press Enter"
                    chips={values.tags.clone()}
                    on_add={on_add_tag}
                    on_remove={on_remove_tag}
                    error={errors.get(FormField::Tags).map(str::to_string)}
                />

                <ThumbnailUpload
                    id="courseImage"
                    label="Course Thumbnail"
                    value={values.thumbnail.clone()}
                    on_change={on_thumbnail}
                    error={errors.get(FormField::Thumbnail).map(str::to_string)}
                />

                // Benefits of the course
                <div class="flex flex-col space-y-2">
                    <label class="text-sm text-richblack-5" for="courseBenefits">
                        { "Benefits of the course " }<sup class="text-pink-200">{ "*" }</sup>
                    </label>
                    <textarea
                        id="courseBenefits"
                        placeholder="Enter benefits of the course"
                        value={values.benefits.clone()}
                        oninput={on_benefits}
                        class="form-style resize-x-none min-h-[130px] w-full"
                    />
                    { field_error(errors, FormField::Benefits) }
                </div>

                <RequirementsField
                    id="courseRequirements"
                    label="Requirements/Instructions"
                    requirements={values.requirements.clone()}
                    on_add={on_add_requirement}
                    on_remove={on_remove_requirement}
                />

                <div class="flex justify-end gap-x-2">
                    if edit_course {
                        <button
                            type="button"
                            onclick={on_continue}
                            disabled={submitting}
                            class="flex cursor-pointer items-center gap-x-2 rounded-md bg-richblack-300 py-[8px] px-[20px] font-semibold text-richblack-900"
                        >
                            { "Continue Without Saving" }
                        </button>
                    }
                    <button type="submit" class="btn-fluent-primary" disabled={submitting}>
                        { if edit_course { "Save Changes" } else { "Next" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
