use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequirementsFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub requirements: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
}

#[function_component(RequirementsField)]
pub fn requirements_field(props: &RequirementsFieldProps) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(target.value());
            }
        })
    };

    let on_add_click = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            let value = draft.trim().to_string();
            if !value.is_empty() {
                on_add.emit(value);
                draft.set(String::new());
            }
        })
    };

    html! {
        <div class="flex flex-col space-y-2">
            <label class="text-sm text-richblack-5" for={props.id.clone()}>
                { props.label.clone() }
            </label>
            <div class="flex flex-col items-start space-y-2">
                <input
                    id={props.id.clone()}
                    type="text"
                    value={(*draft).clone()}
                    oninput={on_input}
                    class="form-style w-full"
                />
                <button type="button" onclick={on_add_click} class="font-semibold text-yellow-50">
                    { "Add" }
                </button>
            </div>
            if !props.requirements.is_empty() {
                <ul class="mt-2 list-inside list-disc">
                    { for props.requirements.iter().enumerate().map(|(index, requirement)| {
                        let on_remove = props.on_remove.clone();
                        html! {
                            <li key={format!("{index}-{requirement}")} class="flex items-center text-richblack-5">
                                <span>{ requirement }</span>
                                <button
                                    type="button"
                                    class="ml-2 text-xs text-pure-greys-300"
                                    onclick={Callback::from(move |_| on_remove.emit(index))}
                                >
                                    { "clear" }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
