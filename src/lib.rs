mod archive;
mod batch;
mod config;
mod constants;
mod error;
mod renamer;
mod sequencer;
mod timestamp;
mod types;

pub use archive::build_archive;
pub use batch::run_batch;
pub use config::BatchConfig;
pub use constants::{ARCHIVE_DOWNLOAD_NAME, MAX_CONTENT_LENGTH, SUPPORTED_EXTENSIONS};
pub use error::{Error, Result};
pub use renamer::{process, process_with};
pub use sequencer::generate;
pub use timestamp::{FsTimestamps, TimestampSource};
pub use types::{BatchOutcome, ImageFile, RenameEntry, UploadFile};
