pub mod database;
pub mod metrics;

pub use database::MongoDb;
pub use self::metrics::{get_metrics, init_metrics};
