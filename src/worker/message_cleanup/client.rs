use std::borrow::Cow;
use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_sqs::error::{DisplayErrorContext, SdkError};
use aws_sdk_sqs::operation::delete_message::DeleteMessageError;
use thiserror::Error;
use tracing::debug;

use crate::aws;
use crate::config::AppConfig;
use crate::queue;

/// Every failure mode (network, auth, stale receipt handle) collapses into
/// one kind; callers only ever log it.
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("failed to delete message: {0}")]
    DeleteFailed(String),
}

impl From<SdkError<DeleteMessageError>> for DeleteError {
    fn from(err: SdkError<DeleteMessageError>) -> Self {
        DeleteError::DeleteFailed(DisplayErrorContext(&err).to_string())
    }
}

#[async_trait]
pub trait MessageDeleter: Sync + Send + Debug {
    /// Acknowledges one delivery by removing it from its queue.
    async fn delete(&self, queue_identifier: &str, receipt_handle: &str) -> Result<(), DeleteError>;
}

#[derive(Debug)]
pub struct SqsMessageDeleter {
    client: aws_sdk_sqs::Client,

    resolve_queue_arn: bool,
}

#[async_trait]
impl MessageDeleter for SqsMessageDeleter {
    async fn delete(&self, queue_identifier: &str, receipt_handle: &str) -> Result<(), DeleteError> {
        let queue_url = if self.resolve_queue_arn {
            queue::queue_url(queue_identifier)
        } else {
            Cow::Borrowed(queue_identifier)
        };

        self.client
            .delete_message()
            .queue_url(&*queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;

        debug!(message = "message_deleted", queue_url = %queue_url);
        Ok(())
    }
}

impl SqsMessageDeleter {
    pub fn new(client: aws_sdk_sqs::Client, resolve_queue_arn: bool) -> SqsMessageDeleter {
        SqsMessageDeleter {
            client,
            resolve_queue_arn,
        }
    }

    pub async fn create(config: &AppConfig) -> SqsMessageDeleter {
        let client = aws::sqs_client(config).await;
        SqsMessageDeleter::new(client, config.resolve_queue_arn)
    }
}
