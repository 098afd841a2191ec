pub mod reports;
pub mod tester;
pub mod transports;

pub use tester::*;
