use std::fmt::{self, Debug, Display};

/// Errors reported by the fallible (`try_`) operations of [`BlockDeque`](crate::BlockDeque).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockDequeError {
    /// An element was requested from a deque that holds none.
    Empty,
    /// The index does not point at a live element.
    OutOfBounds { index: usize, len: usize },
    /// The allocator could not provide storage for the requested number of segments.
    AllocFailed { segments: usize },
    /// Doubling the segment ring would overflow `usize`.
    CapacityOverflow,
}

impl Display for BlockDequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockDequeError::Empty => write!(f, "the deque is empty"),
            BlockDequeError::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {len} but the index is {index}")
            }
            BlockDequeError::AllocFailed { segments } => {
                write!(f, "failed to allocate storage for {segments} segment(s)")
            }
            BlockDequeError::CapacityOverflow => write!(f, "capacity overflow"),
        }
    }
}

impl std::error::Error for BlockDequeError {}

/// A push that could not complete because the deque failed to grow.
/// The rejected value is handed back so that nothing is lost.
///
/// # Examples
/// ```
/// # use blockdeque::{BlockDequeError, PushError};
/// let err = PushError::new(7, BlockDequeError::CapacityOverflow);
/// assert_eq!(err.error(), &BlockDequeError::CapacityOverflow);
/// assert_eq!(err.into_inner(), 7);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    value: T,
    error: BlockDequeError,
}

impl<T> PushError<T> {
    #[inline]
    pub fn new(value: T, error: BlockDequeError) -> Self {
        PushError { value, error }
    }

    /// The reason the push failed.
    #[inline]
    pub fn error(&self) -> &BlockDequeError {
        &self.error
    }

    /// Recovers the value that was being pushed.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Splits the error into the rejected value and its cause.
    #[inline]
    pub fn into_parts(self) -> (T, BlockDequeError) {
        (self.value, self.error)
    }
}

impl<T> Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the value is elided so that `T` needs no `Debug` bound
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push failed: {}", self.error)
    }
}

impl<T> std::error::Error for PushError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PushError<T>> for BlockDequeError {
    #[inline]
    fn from(err: PushError<T>) -> Self {
        err.error
    }
}
