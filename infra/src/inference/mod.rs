//! Clients for hosted inference APIs

mod huggingface;

pub use huggingface::HuggingFaceClient;
