// Clinical inputs and the validated payload
pub mod clinical;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Server reply and its presentation
pub mod prediction;
