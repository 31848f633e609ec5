//! Domain layer: search and booking rules, repository contracts

pub mod clock;
pub mod model;
pub mod repository;
pub mod service;
