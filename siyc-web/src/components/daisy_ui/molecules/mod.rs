mod accordion;
mod card;
mod countdown;
mod file_input;
mod validator;

pub use accordion::{Accordion, AccordionProps};
pub use card::{Card, CardProps};
pub use countdown::{Countdown, CountdownProps, CountdownUnit};
pub use file_input::{FileInput, FileInputProps, SelectedFile};
pub use validator::{Validator, ValidatorProps};
