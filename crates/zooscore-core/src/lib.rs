pub mod error;
pub mod game;
pub mod session;

// Re-export common error type
pub use error::ZooscoreError;
