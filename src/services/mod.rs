// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod cache;
pub mod gateway;
pub mod geo;
pub mod pacing;
pub mod places_client;

pub use cache::*;
pub use gateway::*;
pub use geo::*;
pub use pacing::*;
pub use places_client::*;
