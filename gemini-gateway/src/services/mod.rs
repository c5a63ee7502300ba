pub mod providers;

pub use providers::{GenerationProvider, ProviderError};
