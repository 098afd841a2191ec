use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

/// Metadata of the first file picked in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[cfg(target_arch = "wasm32")]
fn selected_file(input: &f::HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.item(0)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size_bytes = file.size().max(0.0) as u64;
    Some(SelectedFile {
        name: file.name(),
        mime_type: file.type_(),
        size_bytes,
    })
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct FileInputProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub accept: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    /// `None` when the selection was cleared.
    #[prop_or_default]
    pub on_change: f::Callback<Option<SelectedFile>>,
}

#[f::function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> f::Html {
    let on_change = {
        let on_change = props.on_change.clone();
        #[cfg(target_arch = "wasm32")]
        {
            f::Callback::from(move |e: f::Event| {
                if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                    on_change.emit(selected_file(&input));
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = on_change;
            f::Callback::from(|_e: f::Event| {})
        }
    };
    let class = f::class_list(&["file-input", "w-full"], &props.class);
    f::html! {
        <label class="form-control w-full gap-2">
            { props.label.as_ref().map(|l| f::html! { <span class="label-text">{ l.clone() }</span> }).unwrap_or_default() }
            <input
                id={f::attr_value(&props.id)}
                class={class}
                type="file"
                accept={f::attr_value(&props.accept)}
                onchange={on_change}
            />
        </label>
    }
}
