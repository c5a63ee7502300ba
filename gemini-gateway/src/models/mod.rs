pub mod upstream;

pub use upstream::{Content, InlineData, Part, UpstreamPayload, UpstreamResponse};
