pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::{init_metrics, metrics_endpoint, render_metrics};
