//! Domain layer containing business entities and the seams of the pipeline.
//!
//! It defines entities, the error taxonomy, and the traits the application
//! layer consumes, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`error`] - Pipeline error taxonomy and stages
//! - [`repositories`] - Data access trait definitions
//! - [`clients`] - Outbound call trait definitions (page fetch, text completion)
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the presentation layer
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod clients;
pub mod entities;
pub mod error;
pub mod repositories;
