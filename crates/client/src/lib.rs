mod error;
mod events;
mod rules;
mod telemetry;

pub use error::ClientError;
pub use events::EventClient;
pub use rules::RuleClient;
pub use telemetry::TelemetryClient;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
