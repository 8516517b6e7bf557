// Application layer - Use cases and ports
pub mod analysis_repository;
pub mod export_trigger;
pub mod fetch_controller;
