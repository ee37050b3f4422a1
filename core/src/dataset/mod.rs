pub mod record;
pub mod summary;
pub mod writer;

pub use record::{RecordAssembler, ReadingRecord, COLUMNS, TIMESTAMP_FORMAT};
pub use summary::DatasetSummary;
pub use writer::{write_dataset, DatasetWriter};
