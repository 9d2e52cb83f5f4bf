//! Storage seam for keyword mappings.
//!
//! [`LinkRepository`] is implemented by `crate::infrastructure::persistence`;
//! unit tests use the generated `MockLinkRepository`. The SQLite behavior is
//! covered by `tests/repository_link.rs`.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
