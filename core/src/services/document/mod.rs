//! PDF document creation over renderer and storage seams

mod service;

pub use service::{DocumentContent, DocumentService, DocumentStore, PdfRenderer, StoredDocument};
