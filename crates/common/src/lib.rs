pub mod alert;
pub mod types;

pub use alert::AlertLevel;
pub use types::{AlertThreshold, InvalidRule, Rule, SystemStats};
