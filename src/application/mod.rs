// Input checking
pub mod validation;

// Validate-then-request workflow
pub mod predict_action;

// UI-thread bridge and screen state
pub mod client;
pub mod display;
pub mod screen;
