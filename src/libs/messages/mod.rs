pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

impl From<super::logsheet::LogsheetError> for Message {
    fn from(error: super::logsheet::LogsheetError) -> Self {
        Message::Validation(error.to_string())
    }
}
