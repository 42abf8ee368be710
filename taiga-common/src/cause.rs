//! Error chain inspection.
//!
//! An error that wraps another error links to it through
//! [`std::error::Error::source`]. These helpers walk that chain to find the
//! root cause, look up a specific error type, or render the chain as text.
//! None of them mutate the chain, and none allocate except [`dump`].
//!
//! An [`anyhow::Error`] enters the walkers through its `AsRef`
//! implementation:
//!
//! ```rust
//! use taiga_common::has_cause;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
//! let err = anyhow::Error::new(io).context("flushing results");
//!
//! assert!(has_cause::<std::io::Error>(err.as_ref()));
//! ```

use std::error::Error;

/// Upper bound on chain traversal.
///
/// Nothing enforces that a chain is acyclic; a `source` implementation that
/// (directly or indirectly) reaches its own error again would otherwise make
/// every walker loop forever.
pub const MAX_CHAIN_DEPTH: usize = 128;

/// Iterator over an error and its transitive causes, shallowest first.
///
/// Yields at most [`MAX_CHAIN_DEPTH`] nodes. Created by [`chain`].
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and every transitive cause, starting at `err` itself.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain {
        next: Some(err),
        remaining: MAX_CHAIN_DEPTH,
    }
}

/// The deepest cause in the chain; `err` itself if it has no source.
pub fn first_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    chain(err).last().unwrap_or(err)
}

/// The first error in the chain that is a `T`, starting at `err` itself.
///
/// The shallowest match wins: if both an intermediate error and the root
/// cause are a `T`, the intermediate one is returned.
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    chain(err).find_map(|cause| cause.downcast_ref::<T>())
}

/// Whether the chain is or contains an error of type `T`.
pub fn has_cause<T: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    find_cause::<T>(err).is_some()
}

/// Render an error chain as text.
///
/// An absent error renders as the empty string. With `deep` set, every
/// transitive cause follows the top error on its own `Caused by:` line;
/// otherwise only the top error is rendered, with no cause information.
pub fn dump(err: Option<&(dyn Error + 'static)>, deep: bool) -> String {
    let Some(err) = err else {
        return String::new();
    };

    if !deep {
        return err.to_string();
    }

    let mut out = err.to_string();
    for cause in chain(err).skip(1) {
        out.push_str(&format!("\nCaused by: {}", cause));
    }
    out
}
