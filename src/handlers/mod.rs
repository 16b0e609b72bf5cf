pub mod health;
pub mod items;
pub mod metrics;

pub use health::health_check;
pub use items::{create_item, list_items};
pub use self::metrics::metrics_endpoint;
