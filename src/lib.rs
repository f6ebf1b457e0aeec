//! A double-ended queue built from a growable ring of fixed-capacity segments.
//!
//! [`BlockDeque`] offers amortized O(1) pushes and pops at both ends and O(1) indexing from the front.
//! Elements are stored in segments of [`SEGMENT_CAPACITY`] slots, and the segments are arranged in a ring that doubles
//! whenever both ends of the deque meet. Growing moves segments, never elements, so the cost of a single push or pop
//! stays bounded by the segment size.
//!
//! ```
//! use blockdeque::blockdeque;
//! let mut deque = blockdeque![1, 2];
//! deque.push_front(0);
//! assert_eq!(deque, [0, 1, 2]);
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque[1], 2);
//! ```
//!
//! Misuse is reported rather than undefined: popping an empty deque yields `None` (or [`BlockDequeError::Empty`] from the
//! `try_` variants), indexing past the end yields `None` or panics through `[]`, and the `try_push_*` methods report
//! allocation failure while handing the value back.
//!
//! The crate has no `unsafe` code. A deque is `Send` and `Sync` exactly when its elements are, and concurrent
//! mutation needs outside synchronization such as a [`Mutex`](std::sync::Mutex).
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod block_deque;
mod error;
mod segment;
pub mod settings;

pub use block_deque::BlockDeque;
pub use error::{BlockDequeError, PushError};
pub use segment::SEGMENT_CAPACITY;
pub use settings::{AnchorBehavior, BackToFront, Centered, DropBehavior, Edge, FrontToBack};

#[cfg(test)]
mod property_tests;
