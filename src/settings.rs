//! Type-level settings for [`BlockDeque`](crate::BlockDeque).
//!
//! Each setting is a zero-sized marker type selected through a type parameter, so the choice costs nothing at runtime.

use std::fmt::Debug;

/// Drops elements starting from the front of the deque. This is the default.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrontToBack;

/// Drops elements starting from the back of the deque.
#[derive(Copy, Clone, Debug, Default)]
pub struct BackToFront;

/// The order in which elements are dropped by [`clear`](crate::BlockDeque::clear) and when the deque itself is dropped.
pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}
pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const IS_INVERTED: bool;
    }
}

impl DropBehavior for FrontToBack {}
impl DropBehavior for BackToFront {}

impl seal_drop_behavior::Sealed for FrontToBack {
    const IS_INVERTED: bool = false;
}
impl seal_drop_behavior::Sealed for BackToFront {
    const IS_INVERTED: bool = true;
}

pub enum AnchorStrategy {
    Edge,
    Centered,
}
pub(crate) mod seal_anchor_behavior {
    pub trait Sealed {
        const STRATEGY: super::AnchorStrategy;
    }
}

/// The first element pushed into an empty deque lands at the end of its segment that matches the push direction:
/// slot 0 for a back push, the last slot for a front push. This is the default.
#[derive(Copy, Clone, Debug, Default)]
pub struct Edge;

/// The first element pushed into an empty deque lands in the middle of its segment,
/// so that the segment can absorb pushes in both directions before a neighbor is needed.
#[derive(Copy, Clone, Debug, Default)]
pub struct Centered;

/// Where the first element of an empty deque is placed inside its segment.
///
/// Segments entered later through growth at either end always start at the edge they were entered from,
/// regardless of this setting.
pub trait AnchorBehavior: seal_anchor_behavior::Sealed + Debug + Copy + Default {}

impl seal_anchor_behavior::Sealed for Edge {
    const STRATEGY: AnchorStrategy = AnchorStrategy::Edge;
}
impl AnchorBehavior for Edge {}

impl seal_anchor_behavior::Sealed for Centered {
    const STRATEGY: AnchorStrategy = AnchorStrategy::Centered;
}
impl AnchorBehavior for Centered {}
