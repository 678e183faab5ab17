//! Queue identifier handling.
//!
//! SQS event records name their source queue by ARN, but `DeleteMessage`
//! addresses queues by URL.

use std::borrow::Cow;

#[derive(Debug, PartialEq, Eq)]
pub struct QueueArn<'a> {
    pub partition: &'a str,
    pub region: &'a str,
    pub account_id: &'a str,
    pub name: &'a str,
}

impl<'a> QueueArn<'a> {
    /// Parses `arn:<partition>:sqs:<region>:<account>:<name>`.
    pub fn parse(arn: &'a str) -> Option<QueueArn<'a>> {
        let mut parts = arn.splitn(6, ':');

        if parts.next()? != "arn" {
            return None;
        }
        let partition = parts.next()?;
        if parts.next()? != "sqs" {
            return None;
        }
        let region = parts.next()?;
        let account_id = parts.next()?;
        let name = parts.next()?;

        if [partition, region, account_id, name].iter().any(|p| p.is_empty()) {
            return None;
        }

        Some(QueueArn {
            partition,
            region,
            account_id,
            name,
        })
    }

    pub fn url(&self) -> String {
        let domain = match self.partition {
            "aws-cn" => "amazonaws.com.cn",
            _ => "amazonaws.com",
        };

        format!(
            "https://sqs.{}.{}/{}/{}",
            self.region, domain, self.account_id, self.name
        )
    }
}

/// Returns the queue URL for an SQS ARN. Anything else is passed through
/// untouched and left for the service to accept or reject.
pub fn queue_url(identifier: &str) -> Cow<'_, str> {
    match QueueArn::parse(identifier) {
        Some(arn) => Cow::Owned(arn.url()),
        None => Cow::Borrowed(identifier),
    }
}
