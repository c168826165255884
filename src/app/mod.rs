pub mod controller;
pub mod prompt;

pub use controller::{CarForm, PageController, StyleForm};
pub use prompt::{AssumeYes, TerminalConfirm};
