pub mod handlers;
pub mod normalize;
pub mod orchestrator;
pub mod scorer;
pub mod selector;
pub mod types;
