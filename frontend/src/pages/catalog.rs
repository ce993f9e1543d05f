use coursehub_shared::{
    catalog::{frequently_bought, tab_courses, LoadGeneration},
    resolve_category_id, CatalogPageData, CatalogTab,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::CourseClient,
    components::{
        course_card::CourseCard, course_slider::CourseSlider, error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
    },
    hooks::{use_course_filter, use_scroll_to_top},
    models::CourseSummary,
    pages::not_found::NotFoundPage,
};

#[derive(Properties, Clone, PartialEq)]
pub struct CatalogPageProps {
    pub catalog_name: String,
}

#[derive(Clone, PartialEq)]
enum CatalogState {
    Loading,
    Ready(CatalogPageData),
    /// Catalog name did not resolve to exactly one category.
    Unknown,
    Failed(String),
}

async fn load_catalog(client: &CourseClient, catalog_name: &str) -> CatalogState {
    let categories = match client.api().list_categories().await {
        Ok(categories) => categories,
        Err(e) => return CatalogState::Failed(e.to_string()),
    };
    let category_id = match resolve_category_id(&categories, catalog_name) {
        Ok(id) => id,
        Err(e) => {
            web_sys::console::warn_1(&format!("Catalog lookup failed: {}", e).into());
            return CatalogState::Unknown;
        },
    };
    match client.api().category_page(&category_id).await {
        Ok(data) => CatalogState::Ready(data),
        Err(e) => CatalogState::Failed(e.to_string()),
    }
}

fn tab_classes(active: bool) -> Classes {
    let mut classes = classes!("uppercase", "px-4", "py-2", "cursor-pointer");
    if active {
        classes.push("border-b border-b-yellow-25 text-yellow-25");
    } else {
        classes.push("text-richblack-50");
    }
    classes
}

#[function_component(CatalogPage)]
pub fn catalog_page(props: &CatalogPageProps) -> Html {
    use_scroll_to_top();
    let client = use_context::<CourseClient>();
    let state = use_state(|| CatalogState::Loading);
    let active_tab = use_state(CatalogTab::default);
    let all_courses = use_state(Vec::<CourseSummary>::new);
    let search_term = use_state(String::new);

    let loads = use_mut_ref(LoadGeneration::default);

    {
        let state = state.clone();
        let client = client.clone();
        let loads = loads.clone();
        use_effect_with(props.catalog_name.clone(), move |catalog_name| {
            state.set(CatalogState::Loading);
            let ticket = loads.borrow_mut().begin();
            if let Some(client) = client {
                let catalog_name = catalog_name.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = load_catalog(&client, &catalog_name).await;
                    if !loads.borrow().is_current(ticket) {
                        web_sys::console::log_1(
                            &format!("Dropped stale catalog load for {}", catalog_name).into(),
                        );
                        return;
                    }
                    state.set(loaded);
                });
            }
            || ()
        });
    }

    {
        let all_courses = all_courses.clone();
        use_effect_with(client.clone(), move |client| {
            if let Some(client) = client.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match client.api().list_all_courses().await {
                        Ok(courses) => all_courses.set(courses),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch courses: {}", e).into(),
                            );
                        },
                    }
                });
            }
            || ()
        });
    }

    let search_results = use_course_filter((*all_courses).clone(), (*search_term).clone());

    let on_search_input = {
        let search_term = search_term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_term.set(target.value());
            }
        })
    };

    let data = match &*state {
        CatalogState::Loading => {
            return html! { <LoadingSpinner min_height={AttrValue::from("calc(100vh - 3.5rem)")} /> };
        },
        CatalogState::Unknown => return html! { <NotFoundPage /> },
        CatalogState::Failed(message) => {
            return html! {
                <main class="mx-auto max-w-maxContent px-4 py-12">
                    <ErrorBanner message={format!("Failed to load catalog: {}", message)} auto_dismiss={false} />
                </main>
            };
        },
        CatalogState::Ready(data) => data.clone(),
    };

    let selected = &data.selected_category;
    let tab_buttons = [CatalogTab::MostPopular, CatalogTab::New].map(|tab| {
        let active_tab = active_tab.clone();
        html! {
            <p class={tab_classes(*active_tab == tab)} onclick={Callback::from(move |_| active_tab.set(tab))}>
                { tab.label() }
            </p>
        }
    });

    html! {
        <>
            // Hero Section
            <div class="box-content bg-richblack-800 px-4">
                <div class="mx-auto flex min-h-[180px] max-w-maxContentTab flex-col justify-center gap-4 lg:max-w-maxContent">
                    <p class="text-sm text-richblack-300">
                        { "Home / Catalog / " }
                        <span class="text-yellow-25">{ &selected.name }</span>
                    </p>
                    <p class="text-3xl text-richblack-5">{ &selected.name }</p>
                    <p class="max-w-[870px] text-richblack-200">{ &selected.description }</p>
                    <input
                        type="search"
                        placeholder="Search Courses"
                        value={(*search_term).clone()}
                        oninput={on_search_input}
                        class="form-style w-full max-w-[480px] px-4 py-2"
                    />
                </div>
            </div>

            if !search_term.trim().is_empty() {
                <div class="mx-auto box-content w-full max-w-maxContentTab px-4 py-8 lg:max-w-maxContent">
                    <div class="section_heading">{ format!("Search results for \"{}\"", search_term.trim()) }</div>
                    if search_results.is_empty() {
                        <p class="py-4 text-richblack-300">{ "No course matches your search." }</p>
                    } else {
                        <div class="grid grid-cols-1 gap-6 py-4 md:grid-cols-2 lg:grid-cols-3">
                            { for search_results.iter().map(|course| html! {
                                <CourseCard key={course.id.clone()} course={course.clone()} image_class={classes!("h-[200px]")} />
                            }) }
                        </div>
                    }
                </div>
            }

            // Section 1
            <div class="mx-auto box-content w-full max-w-maxContentTab px-4 py-12 lg:max-w-maxContent">
                <div class="section_heading uppercase">{ "Courses to get you started" }</div>
                <div class="my-4 flex border-b border-b-richblack-600 text-sm">
                    { for tab_buttons }
                </div>
                <CourseSlider courses={tab_courses(&selected.courses, *active_tab)} />
            </div>

            // Section 2
            if let Some(different) = data.different_category.as_ref() {
                <div class="mx-auto box-content w-full max-w-maxContentTab px-4 py-16 lg:max-w-maxContent">
                    <div class="section_heading uppercase">{ format!("Top courses in {}", different.name) }</div>
                    <div class="py-8">
                        <CourseSlider courses={different.courses.clone()} />
                    </div>
                </div>
            }

            // Section 3
            <div class="mx-auto box-content w-full max-w-maxContentTab px-4 py-2 lg:max-w-maxContent">
                <div class="section_heading uppercase">{ "Frequently Bought" }</div>
                <div class="py-8">
                    <div class="grid grid-cols-1 md:gap-6 lg:grid-cols-2">
                        { for frequently_bought(&data.most_selling_courses).iter().map(|course| html! {
                            <CourseCard
                                key={course.id.clone()}
                                course={course.clone()}
                                image_class={classes!("h-[300px]", "w-[340px]", "md:w-[550px]")}
                            />
                        }) }
                    </div>
                </div>
            </div>
        </>
    }
}
