//! The fixed-capacity block that a [`BlockDeque`](crate::BlockDeque) strings together into a ring.
//!
//! A segment keeps its elements in one contiguous run of slots, `front..=back`.
//! Back pushes move `back` toward the last slot and front pushes move `front` toward slot 0,
//! so each end of the buffer is consumed by only one direction.

use crate::BlockDequeError;

/// The number of elements a single segment can hold.
pub const SEGMENT_CAPACITY: usize = 128;

pub(crate) struct Segment<T> {
    // unoccupied slots are always `None`
    slots: Box<[Option<T>]>,
    len: usize,
    // both offsets are inclusive and only meaningful while `len > 0`
    front: usize,
    back: usize,
}

impl<T> Segment<T> {
    pub(crate) fn try_new() -> Result<Self, BlockDequeError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(SEGMENT_CAPACITY)
            .map_err(|_| BlockDequeError::AllocFailed { segments: 1 })?;
        slots.resize_with(SEGMENT_CAPACITY, || None);
        Ok(Segment {
            slots: slots.into_boxed_slice(),
            len: 0,
            front: 0,
            back: 0,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn can_push_back(&self) -> bool {
        self.len == 0 || self.back != SEGMENT_CAPACITY - 1
    }

    #[inline]
    pub(crate) fn can_push_front(&self) -> bool {
        self.len == 0 || self.front != 0
    }

    /// Places the first element of an empty segment at `slot`.
    #[inline]
    pub(crate) fn seed(&mut self, slot: usize, value: T) {
        debug_assert!(self.is_empty(), "only an empty segment can be seeded");
        self.slots[slot] = Some(value);
        self.front = slot;
        self.back = slot;
        self.len = 1;
    }

    /// The caller must check [`can_push_back`](Segment::can_push_back) first.
    /// Pushing into a segment whose back is at the last slot panics.
    #[inline]
    pub(crate) fn push_back(&mut self, value: T) {
        if self.len == 0 {
            self.seed(0, value);
            return;
        }
        assert!(self.can_push_back(), "segment is full at the back");
        let slot = self.back + 1;
        self.slots[slot] = Some(value);
        self.back = slot;
        self.len += 1;
    }

    /// The caller must check [`can_push_front`](Segment::can_push_front) first.
    /// Pushing into a segment whose front is at slot 0 panics.
    #[inline]
    pub(crate) fn push_front(&mut self, value: T) {
        if self.len == 0 {
            self.seed(SEGMENT_CAPACITY - 1, value);
            return;
        }
        assert!(self.can_push_front(), "segment is full at the front");
        let slot = self.front - 1;
        self.slots[slot] = Some(value);
        self.front = slot;
        self.len += 1;
    }

    #[inline]
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.back].take();
        self.len -= 1;
        if self.len > 0 {
            self.back -= 1;
        }
        value
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.front].take();
        self.len -= 1;
        if self.len > 0 {
            self.front += 1;
        }
        value
    }

    /// Returns the element `index` positions after the front of the occupied range.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.front + index].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.front + index].as_mut()
    }

    /// Drops every element and resets to empty, keeping the storage.
    pub(crate) fn clear(&mut self, drop_from_back: bool) {
        if drop_from_back {
            while self.pop_back().is_some() {}
        } else {
            while self.pop_front().is_some() {}
        }
        self.front = 0;
        self.back = 0;
    }

    /// Deep-copies `other` into the storage this segment already owns.
    pub(crate) fn copy_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.slots.clone_from_slice(&other.slots);
        self.len = other.len;
        self.front = other.front;
        self.back = other.back;
    }
}

impl<T: Clone> Clone for Segment<T> {
    #[inline]
    fn clone(&self) -> Self {
        Segment {
            slots: self.slots.clone(),
            len: self.len,
            front: self.front,
            back: self.back,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.copy_from(source);
    }
}
