mod hero;
mod modal;
mod navbar;

pub use hero::{Hero, HeroProps};
pub use modal::{Modal, ModalProps};
pub use navbar::{Navbar, NavbarProps};
