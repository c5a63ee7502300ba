pub mod composer;
pub mod gateway_client;
pub mod in_flight;

pub use composer::Composer;
pub use gateway_client::GatewayClient;
pub use in_flight::{InFlightClaim, InFlightForms};
