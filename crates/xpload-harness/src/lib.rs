//! Randomized verification runs against the conditions catalog.
//!
//! A run splits a time span into a seeded [`SegmentPlan`], waits out each
//! segment, queries the catalog with a freshly drawn [`Token`] and checks
//! the answer against the payload the token predicts. The same seed
//! always replays the same waits and the same queries.

mod clock;
mod error;
mod harness;
mod output;
mod partition;
mod record;
mod token;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{HarnessError, PartitionError, TokenError};
pub use harness::{DEFAULT_SEED, DEFAULT_SPAN, Harness, HarnessParams};
pub use output::{CSV_HEADER, RecordWriter};
pub use partition::{SegmentPlan, partition};
pub use record::{Outcome, RunReport, VerificationRecord};
pub use token::{Token, TokenRanges, generate_token};
