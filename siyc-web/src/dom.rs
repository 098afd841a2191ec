use async_trait::async_trait;
use js_sys::{Function, Promise};
use siyc_core::registration::{
    RegistrationTransport, TransportFailure, TransportRequest, TransportResponse,
};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("window unavailable")]
    NoWindow,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window exists or the timer cannot be scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| DomError::Js("resolve function should be set".into()))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        to_timer_ms(duration_ms),
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

fn to_timer_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Repeating timer, cleared when dropped.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// # Errors
    /// Returns an error if no window exists or the interval cannot be scheduled.
    pub fn every(period_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, DomError> {
        let win = window().ok_or(DomError::NoWindow)?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            to_timer_ms(period_ms),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(win) = window()
        && win.alert_with_message(message).is_err()
    {
        console_error(message);
    }
}

pub fn open_in_new_tab(url: &str) {
    let opened = window()
        .map(|win| win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer"));
    if !matches!(opened, Some(Ok(_))) {
        log::warn!("dom: could not open {url}");
    }
}

pub fn focus_element(id: &str) {
    if let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// `data-page` value of the nearest ancestor of a click target, if any.
#[must_use]
pub fn page_target(event: &web_sys::Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("[data-page]").ok().flatten())
        .and_then(|el| el.get_attribute("data-page"))
}

#[must_use]
pub fn test_mode_enabled() -> bool {
    window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| search.contains("test=1"))
}

/// Registration transport backed by browser `fetch`, aborted through an `AbortController` once
/// the request timeout elapses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl RegistrationTransport for FetchTransport {
    async fn post_json(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        #[cfg(target_arch = "wasm32")]
        {
            fetch_json(request).await
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = request;
            Err(TransportFailure::Unreachable(
                "fetch is only available in the browser".to_string(),
            ))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn unreachable(err: &JsValue) -> TransportFailure {
    TransportFailure::Unreachable(js_error_message(err))
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn fetch_json(request: &TransportRequest) -> Result<TransportResponse, TransportFailure> {
    use web_sys::{AbortController, Headers, Request, RequestInit, RequestMode, Response};

    let win = window().ok_or_else(|| TransportFailure::Unreachable("window unavailable".into()))?;
    let controller = AbortController::new().map_err(|e| unreachable(&e))?;

    let headers = Headers::new().map_err(|e| unreachable(&e))?;
    headers
        .set("Content-Type", request.content_type)
        .map_err(|e| unreachable(&e))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.body));
    init.set_signal(Some(&controller.signal()));
    let req = Request::new_with_str_and_init(&request.url, &init).map_err(|e| unreachable(&e))?;

    let abort = {
        let controller = controller.clone();
        Closure::once(move || controller.abort())
    };
    let timeout_ms = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
    let timer = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            to_timer_ms(timeout_ms),
        )
        .map_err(|e| unreachable(&e))?;

    let outcome = async {
        let value = JsFuture::from(win.fetch_with_request(&req)).await?;
        let response: Response = value.dyn_into()?;
        let text = JsFuture::from(response.text()?).await?;
        Ok::<_, JsValue>(TransportResponse::new(
            response.status(),
            text.as_string().unwrap_or_default(),
        ))
    }
    .await;

    win.clear_timeout_with_handle(timer);
    drop(abort);

    outcome.map_err(|err| {
        if controller.signal().aborted() {
            TransportFailure::TimedOut
        } else {
            unreachable(&err)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ms_saturates() {
        assert_eq!(to_timer_ms(5_000), 5_000);
        assert_eq!(to_timer_ms(u32::MAX), i32::MAX);
    }

    #[test]
    fn dom_errors_read_as_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "window unavailable");
        assert_eq!(DomError::Js("blocked".into()).to_string(), "blocked");
    }

    #[test]
    fn fetch_transport_is_browser_only() {
        let request = TransportRequest {
            url: "http://localhost/api/register".into(),
            content_type: "application/json",
            body: "{}".into(),
            timeout: std::time::Duration::from_secs(1),
        };
        let outcome = futures::executor::block_on(FetchTransport.post_json(&request));
        assert!(matches!(outcome, Err(TransportFailure::Unreachable(_))));
    }
}
