pub mod sample;
pub mod storage;
pub mod types;

pub use sample::sample_document;
pub use storage::{
    get_document_path, DocumentRepository, JsonFileRepository, MemoryRepository,
    DOCUMENT_FILE_NAME,
};
pub use types::{Education, Experience, Project, ResumeDocument};
