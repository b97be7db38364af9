//! PDF rendering and on-disk document storage

mod file_store;
mod renderer;

pub use file_store::FileSystemStore;
pub use renderer::PrintPdfRenderer;
