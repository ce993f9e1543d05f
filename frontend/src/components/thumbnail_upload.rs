use coursehub_shared::course_form::{PendingUpload, Thumbnail};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

const ACCEPTED_TYPES: &str = "image/png, image/jpeg, image/jpg";

#[derive(Properties, PartialEq)]
pub struct ThumbnailUploadProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Option<Thumbnail>,
    pub on_change: Callback<Option<Thumbnail>>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Image picker with a preview of either the stored or the freshly picked file.
#[function_component(ThumbnailUpload)]
pub fn thumbnail_upload(props: &ThumbnailUploadProps) -> Html {
    // Object URL of the last picked file; stored thumbnails preview by URL.
    let local_preview = use_state(|| None::<String>);
    let reading = use_state(|| false);

    let preview = match props.value.as_ref() {
        Some(Thumbnail::Url(url)) if !url.is_empty() => Some(url.clone()),
        Some(Thumbnail::Pending(_)) => (*local_preview).clone(),
        _ => None,
    };

    let on_file_change = {
        let local_preview = local_preview.clone();
        let reading = reading.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            if let Some(previous) = (*local_preview).as_ref() {
                let _ = Url::revoke_object_url(previous);
            }
            local_preview.set(Url::create_object_url_with_blob(&file).ok());
            reading.set(true);

            let reading = reading.clone();
            let on_change = on_change.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        on_change.emit(Some(Thumbnail::Pending(PendingUpload {
                            file_name: file.name(),
                            content_type: file.type_(),
                            bytes,
                        })));
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to read thumbnail: {:?}", e).into(),
                        );
                    },
                }
                reading.set(false);
            });
        })
    };

    let on_clear = {
        let local_preview = local_preview.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(previous) = (*local_preview).as_ref() {
                let _ = Url::revoke_object_url(previous);
            }
            local_preview.set(None);
            on_change.emit(None);
        })
    };

    html! {
        <div class="flex flex-col space-y-2">
            <label class="text-sm text-richblack-5" for={props.id.clone()}>
                { props.label.clone() }
            </label>
            <div class="flex min-h-[250px] flex-col items-center justify-center rounded-md border-2 border-dotted border-richblack-500 bg-richblack-700 p-6">
                {
                    if let Some(src) = preview {
                        html! {
                            <div class="flex w-full flex-col p-6">
                                <img src={src} alt="Thumbnail preview" class="h-full w-full rounded-md object-cover" />
                                <button type="button" class="mt-3 text-richblack-400 underline" onclick={on_clear}>
                                    { "Cancel" }
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <label for={props.id.clone()} class="flex cursor-pointer flex-col items-center text-center text-sm text-richblack-200">
                                { "Drag and drop an image, or " }
                                <span class="font-semibold text-yellow-50">{ "Browse" }</span>
                                <span class="mt-4">{ "Aspect ratio 16:9 · Recommended size 1024x576" }</span>
                            </label>
                        }
                    }
                }
                <input
                    id={props.id.clone()}
                    type="file"
                    accept={ACCEPTED_TYPES}
                    class="hidden"
                    onchange={on_file_change}
                    disabled={*reading}
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
