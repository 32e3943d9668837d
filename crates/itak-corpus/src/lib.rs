pub mod corpus;
pub mod error;
pub mod record;

pub use corpus::{ExampleSource, SentenceCorpus};
pub use error::CorpusError;
pub use record::{ExampleRecord, ExampleResponse};
