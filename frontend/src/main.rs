//! Course authoring and catalog browsing frontend.

mod api;
mod components;
mod config;
mod hooks;
mod models;
mod pages;
mod router;
mod wizard_context;

use yew::prelude::*;

use crate::{
    api::{course_client, CourseClient},
    wizard_context::WizardProvider,
};

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| course_client(config::api_config()));

    html! {
        <ContextProvider<CourseClient> context={(*client).clone()}>
            <WizardProvider>
                <router::AppRouter />
            </WizardProvider>
        </ContextProvider<CourseClient>>
    }
}

fn main() {
    web_sys::console::log_1(&format!("CourseHub frontend starting (base {})", config::BASE_URL).into());
    yew::Renderer::<App>::new().render();
}
