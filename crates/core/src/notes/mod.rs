mod error;
mod requests;
mod types;
mod validation;

pub use error::ValidationError;
pub use requests::{
    CreateFolderRequest, CreateNoteRequest, UpdateFolderRequest, UpdateNoteRequest,
};
pub use types::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};
pub use validation::{require_any, required};
