pub mod bridge;
pub mod session;

pub use bridge::{AppSnapshot, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
