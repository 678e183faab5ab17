pub mod sqs;

pub use lambda_runtime::Error;
pub use {lambda_runtime, tracing};

use crate::config::LogFormat;

/// Installs the global subscriber. CloudWatch stamps each line itself, so no
/// timestamps or targets are written.
pub fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time();

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
