use coursehub_shared::catalog::catalog_slug;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::CourseClient,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    hooks::use_scroll_to_top,
    models::Category,
    router::Route,
};

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    use_scroll_to_top();
    let client = use_context::<CourseClient>();
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    {
        let categories = categories.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with(client.clone(), move |client| {
            if let Some(client) = client.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match client.api().list_categories().await {
                        Ok(data) => categories.set(data),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch categories: {}", e).into(),
                            );
                            load_error.set(Some("Failed to fetch course categories.".to_string()));
                        },
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    html! {
        <main class="main categories-page">
            <div class="container">
                <section class="page-section">
                    <p class="page-kicker">{ "Catalog" }</p>
                    <h1 class="page-title">{ "Browse by category" }</h1>
                    <p class="page-description">
                        { format!("{} categories available.", categories.len()) }
                    </p>
                </section>

                if let Some(message) = (*load_error).clone() {
                    <ErrorBanner message={message} auto_dismiss={false} />
                }

                {
                    if *loading {
                        html! { <LoadingSpinner min_height={AttrValue::from("40vh")} /> }
                    } else if categories.is_empty() {
                        html! { <p class="empty-hint">{ "No categories yet" }</p> }
                    } else {
                        html! {
                            <section class="category-grid" aria-label="Categories">
                                { for categories.iter().map(|category| {
                                    html! {
                                        <Link<Route>
                                            key={category.id.clone()}
                                            to={Route::Catalog { catalog_name: catalog_slug(&category.name) }}
                                            classes={classes!("category-card")}
                                        >
                                            <div class="category-card-body">
                                                <p class="category-name">{ &category.name }</p>
                                                <p class="category-description">{ &category.description }</p>
                                            </div>
                                            <span class="category-count">
                                                { format!("{} courses", category.courses.len()) }
                                            </span>
                                        </Link<Route>>
                                    }
                                }) }
                            </section>
                        }
                    }
                }
            </div>
        </main>
    }
}
