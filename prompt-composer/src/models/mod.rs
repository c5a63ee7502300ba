pub mod form;

pub use form::{ImageUpload, PromptForm};
