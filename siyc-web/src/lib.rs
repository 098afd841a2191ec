#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod i18n;
pub mod logging;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let config = crate::config::api_config();
    crate::logging::init(config.log_level());
    log::info!(
        "siyc: starting (api {}, lang {})",
        config.base_url,
        crate::i18n::current_lang()
    );
    yew::Renderer::<app::App>::new().render();
}
