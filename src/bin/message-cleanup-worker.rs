use sqs_cleanup::config::AppConfig;
use sqs_cleanup::lambda;
use sqs_cleanup::lambda::lambda_runtime::{run, service_fn};
use sqs_cleanup::lambda::sqs;
use sqs_cleanup::worker::message_cleanup::client::SqsMessageDeleter;
use sqs_cleanup::worker::message_cleanup::handle_event;

#[tokio::main]
async fn main() -> Result<(), sqs::Error> {
    let config = AppConfig::load()?;
    lambda::init_tracing(config.log_format);

    let deleter = SqsMessageDeleter::create(&config).await;

    run(service_fn(|event| handle_event(&deleter, event))).await
}
