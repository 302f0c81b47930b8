//! # Repositories
//!
//! One repository per collection, over the shared [`crate::Store`]
//! handle. Each exposes the storage contract the UI layers consume:
//! whole-collection list, point lookup by id, upsert, delete.

pub mod client;
pub mod document;
pub mod profile;
pub mod supplier;

pub use client::ClientRepository;
pub use document::DocumentRepository;
pub use profile::ProfileRepository;
pub use supplier::SupplierRepository;
