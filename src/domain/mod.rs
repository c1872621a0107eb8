pub mod payload;
pub mod validator;

pub use payload::{ExtractionOutput, Metadata};
pub use validator::validate;
