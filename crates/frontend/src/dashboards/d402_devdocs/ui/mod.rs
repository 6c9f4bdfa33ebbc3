mod devdocs;

pub use devdocs::DevDocs;
