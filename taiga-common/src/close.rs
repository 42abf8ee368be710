//! Best-effort release of heterogeneous resource handles.
//!
//! Callers typically hold a short list of mixed resources acquired together
//! (a cursor, the statement that produced it, the connection behind both) and
//! want a single call that releases all of them without letting a cleanup
//! failure mask the error that triggered cleanup in the first place.

use anyhow::Result;

/// A resource whose release operation is a zero-argument `close`.
///
/// Implemented for any `FnOnce() -> anyhow::Result<()>`, so ad-hoc cleanup
/// actions can be handed to [`close`] without a wrapper type.
pub trait Close {
    /// Release the resource. Called at most once.
    fn close(self: Box<Self>) -> Result<()>;
}

impl<F> Close for F
where
    F: FnOnce() -> Result<()>,
{
    fn close(self: Box<Self>) -> Result<()> {
        (*self)()
    }
}

/// A large object whose release operation is named `free`.
///
/// Covers both character and binary large objects; the distinction does not
/// matter for release.
pub trait Free {
    /// Free the large object. Called at most once.
    fn free(self: Box<Self>) -> Result<()>;
}

impl<F> Free for F
where
    F: FnOnce() -> Result<()>,
{
    fn free(self: Box<Self>) -> Result<()> {
        (*self)()
    }
}

/// A resource handle tagged with its kind.
///
/// The closer switches over the known resource kinds rather than probing an
/// arbitrary value for a close-named operation at runtime. A type outside the
/// enumerated set goes through [`Handle::Closable`].
pub enum Handle {
    /// Database connection.
    Connection(Box<dyn Close>),
    /// Prepared or ad-hoc statement.
    Statement(Box<dyn Close>),
    /// Result cursor produced by a statement.
    Cursor(Box<dyn Close>),
    /// Any other resource exposing a generic close capability.
    Closable(Box<dyn Close>),
    /// Character or binary large object.
    LargeObject(Box<dyn Free>),
    /// Datagram socket.
    Socket(Box<dyn Close>),
}

impl Handle {
    /// Wrap a database connection.
    pub fn connection(resource: impl Close + 'static) -> Self {
        Handle::Connection(Box::new(resource))
    }

    /// Wrap a statement.
    pub fn statement(resource: impl Close + 'static) -> Self {
        Handle::Statement(Box::new(resource))
    }

    /// Wrap a result cursor.
    pub fn cursor(resource: impl Close + 'static) -> Self {
        Handle::Cursor(Box::new(resource))
    }

    /// Wrap a resource outside the enumerated kinds.
    pub fn closable(resource: impl Close + 'static) -> Self {
        Handle::Closable(Box::new(resource))
    }

    /// Wrap a character or binary large object.
    pub fn large_object(resource: impl Free + 'static) -> Self {
        Handle::LargeObject(Box::new(resource))
    }

    /// Wrap a datagram socket.
    pub fn socket(resource: impl Close + 'static) -> Self {
        Handle::Socket(Box::new(resource))
    }

    /// Resource kind as a static string, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Handle::Connection(_) => "connection",
            Handle::Statement(_) => "statement",
            Handle::Cursor(_) => "cursor",
            Handle::Closable(_) => "closable",
            Handle::LargeObject(_) => "large_object",
            Handle::Socket(_) => "socket",
        }
    }

    /// Invoke the kind's release operation, consuming the handle.
    fn release(self) -> Result<()> {
        match self {
            Handle::Connection(resource)
            | Handle::Statement(resource)
            | Handle::Cursor(resource)
            | Handle::Closable(resource)
            | Handle::Socket(resource) => resource.close(),
            Handle::LargeObject(resource) => resource.free(),
        }
    }
}

/// Releases handles best-effort, with an optional failure observer.
///
/// [`close`] is the everyday entry point. Construct a `Closer` only when a
/// caller wants to observe swallowed release failures, e.g. to count them or
/// forward them to a sink of its choosing.
///
/// # Example
///
/// ```rust
/// use taiga_common::{Closer, Handle};
///
/// let closer = Closer::new().on_error(|kind, err| {
///     eprintln!("release of {} failed: {}", kind, err);
/// });
/// closer.close([Some(Handle::cursor(|| anyhow::Ok(())))]);
/// ```
#[derive(Default)]
pub struct Closer {
    on_error: Option<Box<dyn Fn(&'static str, &anyhow::Error)>>,
}

impl Closer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe release failures. The closer still swallows them.
    pub fn on_error(mut self, hook: impl Fn(&'static str, &anyhow::Error) + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Release every present handle in input order, swallowing all failures.
    pub fn close<I>(&self, handles: I)
    where
        I: IntoIterator<Item = Option<Handle>>,
    {
        for handle in handles.into_iter().flatten() {
            let kind = handle.kind();

            if let Err(err) = handle.release() {
                // Release failures are common and non-actionable, e.g. freeing
                // thousands of large objects after their connection dropped.
                if let Some(hook) = &self.on_error {
                    hook(kind, &err);
                }
            }
        }
    }
}

/// Release every present handle in input order; failures are swallowed.
///
/// Handles are processed independently, each released exactly once; absent
/// entries are skipped. Use [`Option::take`] at the call site to close and
/// clear a held handle in one expression:
///
/// ```rust
/// use taiga_common::{close, Handle};
///
/// let mut conn = Some(Handle::connection(|| anyhow::Ok(())));
/// let mut cursor = Some(Handle::cursor(|| anyhow::Ok(())));
///
/// close([cursor.take(), conn.take()]);
/// assert!(conn.is_none() && cursor.is_none());
/// ```
pub fn close<I>(handles: I)
where
    I: IntoIterator<Item = Option<Handle>>,
{
    Closer::new().close(handles);
}
