//! Shared plumbing for the daisyUI-styled components.

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen::JsCast;
pub use web_sys::{Event, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DaisyColor {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}
