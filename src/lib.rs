pub mod aws;
pub mod config;
pub mod lambda;
pub mod queue;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_utils;
