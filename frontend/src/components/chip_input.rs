use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChipInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub chips: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Text input that turns each entry into a removable chip on Enter or comma.
#[function_component(ChipInput)]
pub fn chip_input(props: &ChipInputProps) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(target.value());
            }
        })
    };

    let on_keydown = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Enter" && event.key() != "," {
                return;
            }
            event.prevent_default();
            let value = draft.trim().to_string();
            if !value.is_empty() {
                on_add.emit(value);
            }
            draft.set(String::new());
        })
    };

    html! {
        <div class="flex flex-col space-y-2">
            <label class="text-sm text-richblack-5" for={props.id.clone()}>
                { props.label.clone() }
            </label>
            <div class="flex w-full flex-wrap gap-y-2">
                { for props.chips.iter().enumerate().map(|(index, chip)| {
                    let on_remove = props.on_remove.clone();
                    html! {
                        <div
                            key={format!("{index}-{chip}")}
                            class="m-1 flex items-center rounded-full bg-yellow-400 px-2 py-1 text-sm text-richblack-5"
                        >
                            { chip }
                            <button
                                type="button"
                                class="ml-2 focus:outline-none"
                                aria-label={format!("Remove {chip}")}
                                onclick={Callback::from(move |_| on_remove.emit(index))}
                            >
                                { "×" }
                            </button>
                        </div>
                    }
                }) }
                <input
                    id={props.id.clone()}
                    type="text"
                    value={(*draft).clone()}
                    placeholder={props.placeholder.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    class="form-style w-full"
                />
            </div>
            {
                if let Some(error) = props.error.as_ref() {
                    html! { <span class="ml-2 text-xs tracking-wide text-pink-200">{ error }</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
