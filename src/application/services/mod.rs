//! Business logic services for the application layer.

pub mod keyword_service;
pub mod shorten_service;

pub use keyword_service::KeywordGenerator;
pub use shorten_service::ShortenService;
