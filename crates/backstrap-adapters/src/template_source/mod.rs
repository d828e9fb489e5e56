//! Template sources.
//!
//! The bundled template is compiled into the binary ([`EmbeddedTemplate`]),
//! so an installed `backstrap` never has to locate a directory next to
//! itself. [`DirectoryTemplate`] reads a template from disk instead.

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryTemplate;
pub use embedded::EmbeddedTemplate;
pub use memory::MemoryTemplate;
