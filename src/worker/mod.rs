pub mod message_cleanup;
