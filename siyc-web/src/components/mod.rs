pub mod countdown;
pub mod daisy_ui;
pub mod footer;
pub mod header;
pub mod loading_screen;
pub mod payment_panel;
pub mod popup;
pub mod registration_form;
