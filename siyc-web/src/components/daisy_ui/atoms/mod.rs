mod alert;
mod button;

pub use alert::{Alert, AlertProps};
pub use button::{Button, ButtonProps};
