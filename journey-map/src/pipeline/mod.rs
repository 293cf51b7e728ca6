//! Batch processing of recorded journeys.
//!
//! For every journey, in order: station-name filtering, timestamp
//! normalization, date filtering and geometry decoding. Journeys are
//! independent of each other; with the `parallel` feature the batch is
//! spread over a rayon pool and still comes back in input order.

mod error;
mod process;

pub use error::ProcessError;
#[cfg(feature = "parallel")]
pub use process::process_journeys_parallel;
pub use process::{ProcessSummary, ProcessedJourney, process_journey, process_journeys};
