//! # taiga-common
//!
//! Type independent utilities shared across taiga services.
//!
//! ## Design Philosophy
//!
//! - **Handle**: Know what kind of resource is being released (connection, cursor, ...)
//! - **Closer**: Release a mixed batch of resources best-effort, never letting a
//!   cleanup failure mask the error that triggered cleanup
//! - **Cause walking**: Find the root cause or a specific error type inside a
//!   chain of wrapped errors
//! - **Total helpers**: `nvl` and `equals` treat absent values as ordinary input,
//!   not as errors
//!
//! ## Usage
//!
//! ```rust
//! use taiga_common::{close, Handle};
//!
//! let conn = Handle::connection(|| anyhow::Ok(()));
//! let stmt = Handle::statement(|| -> anyhow::Result<()> {
//!     Err(anyhow::anyhow!("already closed"))
//! });
//!
//! // Failures during release are swallowed; the call never errors or panics.
//! close([Some(conn), None, Some(stmt)]);
//! ```
//!
//! ## Principles
//!
//! - `close` never surfaces a release failure to its caller
//! - Cause walking never follows a chain deeper than [`MAX_CHAIN_DEPTH`]
//! - Nothing here holds a resource beyond the single release call

mod cause;
mod close;
mod util;

pub use cause::{chain, dump, find_cause, first_cause, has_cause, Chain, MAX_CHAIN_DEPTH};
pub use close::{close, Close, Closer, Free, Handle};
pub use util::{equals, nvl};
