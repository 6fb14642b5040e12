pub mod explainer;
pub mod profile;
pub mod ranking;
pub mod recommendations;
pub mod summary;
