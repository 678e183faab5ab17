//! Drains a delivered SQS batch: every body is logged, then the message is
//! deleted from its source queue.
//!
//! Deletion failures are logged and otherwise ignored. The invocation still
//! succeeds, and a message that could not be deleted becomes visible again
//! once its visibility timeout lapses, so delivery is at-least-once.

pub mod client;
pub mod record;

use tracing::{error, info, Instrument};

use self::client::MessageDeleter;
use self::record::Record;
use crate::lambda::{self, sqs};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub deleted: usize,
    pub failed: usize,
}

/// Handles records strictly in delivery order, one delete call at a time.
pub async fn process_batch(deleter: &dyn MessageDeleter, records: &[Record]) -> BatchSummary {
    info!(message = "batch_received", records = records.len());

    let mut summary = BatchSummary::default();

    for record in records {
        info!(message_id = %record.message_id, "Received SQS message: {}", record.body);

        match deleter.delete(&record.source, &record.receipt_handle).await {
            Ok(()) => summary.deleted += 1,
            Err(err) => {
                error!(
                    message_id = %record.message_id,
                    queue = %record.source,
                    "Error deleting message: {}",
                    err
                );
                summary.failed += 1;
            }
        }
    }

    info!(
        message = "batch_processed",
        deleted = summary.deleted,
        failed = summary.failed
    );

    summary
}

pub async fn handle_event(
    deleter: &dyn MessageDeleter,
    event: sqs::SqsEvent,
) -> Result<(), lambda::Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);

    let records = event
        .payload
        .records
        .iter()
        .map(Record::from)
        .collect::<Vec<_>>();

    process_batch(deleter, &records).instrument(span).await;

    Ok(())
}
