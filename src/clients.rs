//! Clients for the external programs that `batch-push` drives.
//!
//! - [`push_tool`]: the command-line tool that writes a batch of files to the
//!   remote repository
//!
//! Each client sits behind a trait with a real and a mock implementation so
//! the upload loop can be tested without touching the network.

pub mod push_tool;
