//! Deployment-aware URLs.
//!
//! `PUBLIC_URL` (compile time) names the base path when the site is served from a
//! subdirectory, e.g. `/siyc` on GitHub Pages.

use siyc_core::navigator::PageId;

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn join(base: &str, relative: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}

/// Base path for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = public_base().trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

/// Path segment a page is mirrored to.
#[must_use]
pub const fn page_path(page: PageId) -> &'static str {
    match page {
        PageId::Home => "/",
        PageId::Activities => "/activities",
        PageId::Faq => "/faq",
        PageId::Registration => "/registration",
        PageId::Payment => "/payment",
    }
}

/// Full link target for a nav pill.
#[must_use]
pub fn page_href(page: PageId) -> String {
    join(public_base(), page_path(page))
}
