use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Centers the spinner in a block at least this tall, e.g. `"60vh"`.
    #[prop_or_default]
    pub min_height: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let wrapper_style = props
        .min_height
        .as_ref()
        .map(|height| format!("min-height:{height};"))
        .unwrap_or_default();

    html! {
        <div
            class={classes!("grid", "place-items-center", "p-6")}
            style={wrapper_style}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div class={classes!("spinner")} />
            <span class={classes!("sr-only")}>{ props.label.clone() }</span>
        </div>
    }
}
