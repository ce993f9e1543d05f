use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="grid min-h-[calc(100vh-3.5rem)] place-items-center text-richblack-5">
            <div class="text-center">
                <h2 class="text-3xl">{ "404 - Page Not Found" }</h2>
                <p class="mt-2 text-richblack-300">{ "The page you are looking for does not exist." }</p>
                <Link<Route> to={Route::Home} classes={classes!("mt-4", "inline-block", "text-yellow-25")}>
                    { "Back to categories" }
                </Link<Route>>
            </div>
        </main>
    }
}
