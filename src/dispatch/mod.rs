//! Staggered concurrent dispatch of chunk scoring calls.
//!
//! One call per chunk, started no earlier than [`PacingStrategy::delay_for`] after
//! dispatch begins, all running concurrently afterwards. What a failure does is set
//! by [`FailurePolicy`]; there are no retries.

pub mod dispatcher;
pub mod error;
pub mod pacing;
pub mod policy;
pub mod progress;


pub use dispatcher::{ChunkScorer, DispatchReport, Dispatcher};
pub use error::{DispatchError, DispatchResult};
pub use pacing::{FixedStagger, Immediate, PacingStrategy, millis_saturating};
pub use policy::FailurePolicy;
pub use progress::ProgressCounter;
