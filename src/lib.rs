pub mod cli;
pub mod replay;

// Re-export the container crate for the binary and integration tests
pub use thing_vector;
