mod batch;
mod file;

pub use batch::{BatchOutcome, UploadFile};
pub use file::{ImageFile, RenameEntry};
