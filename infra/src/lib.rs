//! # PDFolio Infrastructure
//!
//! Concrete implementations of the core crate's seams: MySQL
//! persistence, the hosted inference client, and PDF rendering plus
//! file storage.

pub mod database;
pub mod inference;
pub mod pdf;
