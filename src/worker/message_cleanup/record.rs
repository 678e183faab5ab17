use crate::lambda::sqs::SqsMessage;

/// One delivery of a queue message, owned by the invocation that received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub message_id: String,
    pub body: String,
    /// Token for this specific delivery; required to delete the message.
    pub receipt_handle: String,
    /// The event source ARN of the queue the message came from.
    pub source: String,
}

impl From<&SqsMessage> for Record {
    fn from(message: &SqsMessage) -> Self {
        Record {
            message_id: message.message_id.clone().unwrap_or_default(),
            body: message.body.clone().unwrap_or_default(),
            receipt_handle: message.receipt_handle.clone().unwrap_or_default(),
            source: message.event_source_arn.clone().unwrap_or_default(),
        }
    }
}
