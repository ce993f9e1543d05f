use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/coursehub/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/catalog/:catalog_name")]
    Catalog { catalog_name: String },
    #[cfg(feature = "mock")]
    #[at("/coursehub/catalog/:catalog_name")]
    Catalog { catalog_name: String },

    #[cfg(not(feature = "mock"))]
    #[at("/dashboard/add-course")]
    AddCourse,
    #[cfg(feature = "mock")]
    #[at("/coursehub/dashboard/add-course")]
    AddCourse,

    #[cfg(not(feature = "mock"))]
    #[at("/dashboard/edit-course")]
    EditCourse,
    #[cfg(feature = "mock")]
    #[at("/coursehub/dashboard/edit-course")]
    EditCourse,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/coursehub/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::categories::CategoriesPage /> },
        Route::Catalog {
            catalog_name,
        } => {
            html! { <pages::catalog::CatalogPage catalog_name={catalog_name} /> }
        },
        Route::AddCourse => html! { <pages::add_course::AddCoursePage /> },
        Route::EditCourse => html! { <pages::add_course::AddCoursePage edit=true /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-richblack-900" style="min-height: 100vh; min-height: 100svh;">
                <header class="flex h-14 items-center justify-center border-b border-b-richblack-700">
                    <nav class="flex w-11/12 max-w-maxContent items-center justify-between text-richblack-25">
                        <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold", "text-richblack-5")}>
                            { "CourseHub" }
                        </Link<Route>>
                        <Link<Route> to={Route::AddCourse} classes={classes!("text-yellow-25")}>
                            { "Add Course" }
                        </Link<Route>>
                    </nav>
                </header>
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
