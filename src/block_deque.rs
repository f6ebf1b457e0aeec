//! A [`BlockDeque`] is a double-ended queue built from a ring of fixed-capacity segments.
//! Its API is similar to [`VecDeque`](std::collections::VecDeque) for pushing, popping and indexing,
//! but growth never moves elements: when the ring fills up, it doubles and the segments themselves are moved into the new ring.
//! Every segment between the first and the last is always full, which is what makes indexing O(1).

use crate::segment::{Segment, SEGMENT_CAPACITY};
use crate::settings::{AnchorStrategy, FrontToBack};
use crate::{AnchorBehavior, BlockDequeError, DropBehavior, Edge, PushError};
use std::alloc::Layout;
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

/// A double-ended queue with O(1) pushes and pops at both ends and O(1) indexing.
///
/// Elements live in segments of [`SEGMENT_CAPACITY`] slots. The segments form a ring; the `head` segment takes
/// front operations and the `tail` segment takes back operations. When pushing would run either end into the other,
/// the ring doubles in size.
///
/// # Examples
/// ```
/// use blockdeque::BlockDeque;
/// let mut deque = BlockDeque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
/// assert_eq!(deque, [0, 1, 2]);
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque[0], 1);
/// assert_eq!(deque.len(), 2);
/// ```
///
/// # Drop Order
/// The default drop order is front-to-back. This can be changed to back-to-front by using the [`BackToFront`](crate::BackToFront) drop order.
///
/// # Anchor Behavior
/// The default anchor ([`Edge`]) seeds the first element of an empty deque at the end of its segment matching the push direction,
/// so a deque that is only ever pushed from one side fills its first segment completely before growing.
/// [`Centered`](crate::Centered) seeds it in the middle of the segment instead, which suits workloads that push to both sides.
///
/// # Threads
/// A `BlockDeque` is a plain single-owner value with no internal synchronization.
/// Sharing one between threads requires external locking, e.g. a [`Mutex`](std::sync::Mutex).
pub struct BlockDeque<T, DropOrder = FrontToBack, Anchor = Edge>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    pub(crate) segments: Vec<Segment<T>>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
    pub(crate) drop_order: DropOrder,
    pub(crate) anchor: Anchor,
}

// the number of segments needed to hold `len` elements, never less than one
#[inline]
fn segments_for(len: usize) -> usize {
    len.div_ceil(SEGMENT_CAPACITY).max(1)
}

impl<T> BlockDeque<T, FrontToBack, Edge> {
    /// Creates a new, empty `BlockDeque` with a single segment.
    ///
    /// # Panics
    /// Aborts if the segment cannot be allocated. Use [`try_new`](BlockDeque::try_new) to handle that case.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let deque: BlockDeque<i32> = BlockDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.segment_count(), 1);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_segments(1)
    }

    /// Creates a new, empty `BlockDeque`, reporting allocation failure instead of aborting.
    #[inline]
    pub fn try_new() -> Result<Self, BlockDequeError> {
        Self::try_with_segments(1)
    }

    /// Creates a new, empty `BlockDeque` whose ring has room for at least `cap` elements.
    /// No elements are created.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let deque: BlockDeque<i32> = BlockDeque::with_capacity(300);
    /// assert_eq!(deque.len(), 0);
    /// assert!(deque.capacity() >= 300);
    /// assert_eq!(deque.segment_count(), 3);
    /// ```
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self::with_segments(segments_for(cap))
    }

    #[inline]
    pub fn try_with_capacity(cap: usize) -> Result<Self, BlockDequeError> {
        Self::try_with_segments(segments_for(cap))
    }
}

impl<T, DropOrder, Anchor> BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    pub(crate) fn try_with_segments(count: usize) -> Result<Self, BlockDequeError> {
        Ok(BlockDeque {
            segments: Self::try_alloc_segments(count)?,
            head: 0,
            tail: 0,
            len: 0,
            drop_order: Default::default(),
            anchor: Default::default(),
        })
    }

    #[inline]
    pub(crate) fn with_segments(count: usize) -> Self {
        Self::try_with_segments(count).unwrap_or_else(|err| Self::growth_failed(err))
    }

    /// Creates a new, empty `BlockDeque` with a specified drop order.
    ///
    /// # Examples
    /// ```
    /// use blockdeque::{BlockDeque, BackToFront};
    /// let mut deque = BlockDeque::<_>::new_with_drop_order::<BackToFront>();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn new_with_drop_order<D>() -> BlockDeque<T, D, Anchor>
    where
        D: DropBehavior,
    {
        BlockDeque::with_segments(1)
    }

    /// Creates a new, empty `BlockDeque` with a specified anchor behavior.
    ///
    /// # Examples
    /// ```
    /// use blockdeque::{BlockDeque, Centered};
    /// let mut deque = BlockDeque::<_>::new_with_anchor::<Centered>();
    /// for i in 0..64 {
    ///     deque.push_back(i);
    ///     deque.push_front(-i);
    /// }
    /// // both directions fit in the first segment
    /// assert_eq!(deque.segment_count(), 1);
    /// assert_eq!(deque.len(), 128);
    /// ```
    #[inline]
    #[must_use]
    pub fn new_with_anchor<A>() -> BlockDeque<T, DropOrder, A>
    where
        A: AnchorBehavior,
    {
        BlockDeque::with_segments(1)
    }

    /// Changes the drop order of the `BlockDeque`, keeping its elements.
    #[inline]
    #[must_use = "This BlockDeque's drop order has been changed. Please make sure to use the new BlockDeque or drop it explicitly."]
    pub fn with_drop_order<D>(mut self) -> BlockDeque<T, D, Anchor>
    where
        D: DropBehavior,
    {
        // `self` is left with no segments and no elements, so dropping it is a no-op
        BlockDeque {
            segments: std::mem::take(&mut self.segments),
            head: self.head,
            tail: self.tail,
            len: std::mem::take(&mut self.len),
            drop_order: Default::default(),
            anchor: self.anchor,
        }
    }

    /// Changes the anchor behavior of the `BlockDeque`, keeping its elements.
    /// The new behavior applies the next time the deque is empty.
    #[inline]
    #[must_use = "This BlockDeque's anchor behavior has been changed. Please make sure to use the new BlockDeque or drop it explicitly."]
    pub fn with_anchor_behavior<A>(mut self) -> BlockDeque<T, DropOrder, A>
    where
        A: AnchorBehavior,
    {
        BlockDeque {
            segments: std::mem::take(&mut self.segments),
            head: self.head,
            tail: self.tail,
            len: std::mem::take(&mut self.len),
            drop_order: self.drop_order,
            anchor: Default::default(),
        }
    }
}

impl<T, DropOrder, Anchor> BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    fn try_alloc_segments(count: usize) -> Result<Vec<Segment<T>>, BlockDequeError> {
        let failed = BlockDequeError::AllocFailed { segments: count };
        let mut segments = Vec::new();
        segments
            .try_reserve_exact(count)
            .map_err(|_| failed.clone())?;
        for _ in 0..count {
            segments.push(Segment::try_new().map_err(|_| failed.clone())?);
        }
        Ok(segments)
    }

    // The infallible API treats allocation failure the way `Vec` does.
    #[cold]
    fn growth_failed(err: BlockDequeError) -> ! {
        match err {
            BlockDequeError::AllocFailed { segments } => {
                match segments
                    .checked_mul(SEGMENT_CAPACITY)
                    .map(Layout::array::<Option<T>>)
                {
                    Some(Ok(layout)) => std::alloc::handle_alloc_error(layout),
                    _ => panic!("capacity overflow"),
                }
            }
            err => panic!("{err}"),
        }
    }

    #[inline]
    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.segments.len()
    }

    #[inline]
    fn prev_index(&self, index: usize) -> usize {
        let count = self.segments.len();
        (index + count - 1) % count
    }

    // Doubles the ring. Only called when the ring is saturated, i.e. every segment from head to tail is in use.
    // Everything that can fail happens before the ring is touched.
    fn try_extend(&mut self) -> Result<(), BlockDequeError> {
        let old_count = self.segments.len();
        debug_assert_eq!(self.next_index(self.tail), self.head);
        let new_count = old_count
            .checked_mul(2)
            .ok_or(BlockDequeError::CapacityOverflow)?;
        let fresh = Self::try_alloc_segments(old_count)
            .map_err(|_| BlockDequeError::AllocFailed { segments: new_count })?;
        self.segments
            .try_reserve_exact(old_count)
            .map_err(|_| BlockDequeError::AllocFailed { segments: new_count })?;

        // segments are moved, not copied, so their elements stay put
        self.segments.rotate_left(self.head);
        self.segments.extend(fresh);
        self.head = 0;
        self.tail = old_count - 1;
        Ok(())
    }

    /// Pushes an element to the back of the `BlockDeque`, doubling the ring if it is saturated.
    ///
    /// # Panics
    /// Aborts if the grown ring cannot be allocated. Use [`try_push_back`](BlockDeque::try_push_back) to handle that case.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut deque: BlockDeque<i32> = BlockDeque::from([42, 10]);
    /// deque.push_back(100);
    /// assert_eq!(deque.pop_back(), Some(100));
    /// ```
    #[inline]
    pub fn push_back(&mut self, elem: T) {
        if let Err(err) = self.try_push_back(elem) {
            Self::growth_failed(err.into());
        }
    }

    /// Pushes an element to the front of the `BlockDeque`, doubling the ring if it is saturated.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut deque: BlockDeque<i32> = BlockDeque::from([42, 10]);
    /// deque.push_front(100);
    /// assert_eq!(deque.pop_front(), Some(100));
    /// ```
    #[inline]
    pub fn push_front(&mut self, elem: T) {
        if let Err(err) = self.try_push_front(elem) {
            Self::growth_failed(err.into());
        }
    }

    /// Pushes an element to the back of the `BlockDeque`.
    /// If the ring has to grow and the allocation fails, the deque is left unchanged and the element is handed back.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// deque.try_push_back(1).unwrap();
    /// assert_eq!(deque.back(), Some(&1));
    /// ```
    pub fn try_push_back(&mut self, elem: T) -> Result<(), PushError<T>> {
        if !self.segments[self.tail].can_push_back() {
            let mut next = self.next_index(self.tail);
            if next == self.head {
                if let Err(err) = self.try_extend() {
                    return Err(PushError::new(elem, err));
                }
                next = self.next_index(self.tail);
            }
            self.tail = next;
        }

        let segment = &mut self.segments[self.tail];
        match (self.len, <Anchor as crate::settings::seal_anchor_behavior::Sealed>::STRATEGY) {
            (0, AnchorStrategy::Centered) => segment.seed(SEGMENT_CAPACITY / 2, elem),
            _ => segment.push_back(elem),
        }
        self.len += 1;
        Ok(())
    }

    /// Pushes an element to the front of the `BlockDeque`.
    /// If the ring has to grow and the allocation fails, the deque is left unchanged and the element is handed back.
    pub fn try_push_front(&mut self, elem: T) -> Result<(), PushError<T>> {
        if !self.segments[self.head].can_push_front() {
            let mut prev = self.prev_index(self.head);
            if prev == self.tail {
                if let Err(err) = self.try_extend() {
                    return Err(PushError::new(elem, err));
                }
                prev = self.prev_index(self.head);
            }
            self.head = prev;
        }

        let segment = &mut self.segments[self.head];
        match (self.len, <Anchor as crate::settings::seal_anchor_behavior::Sealed>::STRATEGY) {
            (0, AnchorStrategy::Centered) => segment.seed(SEGMENT_CAPACITY / 2 - 1, elem),
            _ => segment.push_front(elem),
        }
        self.len += 1;
        Ok(())
    }

    /// Pops an element from the back of the `BlockDeque`, returning `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut deque: BlockDeque<i32> = BlockDeque::from([42, 10]);
    /// assert_eq!(deque.pop_back(), Some(10));
    /// assert_eq!(deque.pop_back(), Some(42));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        let elem = self.segments[self.tail].pop_back()?;
        self.len -= 1;
        if self.len > 0 && self.segments[self.tail].is_empty() {
            self.tail = self.prev_index(self.tail);
        }
        Some(elem)
    }

    /// Pops an element from the front of the `BlockDeque`, returning `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut deque: BlockDeque<i32> = BlockDeque::from([42, 10]);
    /// assert_eq!(deque.pop_front(), Some(42));
    /// assert_eq!(deque.pop_front(), Some(10));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        let elem = self.segments[self.head].pop_front()?;
        self.len -= 1;
        if self.len > 0 && self.segments[self.head].is_empty() {
            self.head = self.next_index(self.head);
        }
        Some(elem)
    }

    /// Like [`pop_back`](BlockDeque::pop_back), but reports an empty deque as an error.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::{BlockDeque, BlockDequeError};
    /// let mut deque: BlockDeque<i32> = BlockDeque::new();
    /// assert_eq!(deque.try_pop_back(), Err(BlockDequeError::Empty));
    /// ```
    #[inline]
    pub fn try_pop_back(&mut self) -> Result<T, BlockDequeError> {
        self.pop_back().ok_or(BlockDequeError::Empty)
    }

    #[inline]
    pub fn try_pop_front(&mut self) -> Result<T, BlockDequeError> {
        self.pop_front().ok_or(BlockDequeError::Empty)
    }

    // Maps a logical index onto (segment, offset within segment).
    // The head and tail segments may be partially filled; everything between them is full.
    #[inline]
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len {
            return None;
        }
        let head_len = self.segments[self.head].len();
        if index < head_len {
            return Some((self.head, index));
        }
        let tail_start = self.len - self.segments[self.tail].len();
        if index >= tail_start {
            return Some((self.tail, index - tail_start));
        }
        let interior = index - head_len;
        let segment = (self.head + 1 + interior / SEGMENT_CAPACITY) % self.segments.len();
        Some((segment, interior % SEGMENT_CAPACITY))
    }

    /// Returns a reference to the element at `index`, counted from the front, or `None` if it is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let deque: BlockDeque<i32> = (0..1000).collect();
    /// assert_eq!(deque.get(0), Some(&0));
    /// assert_eq!(deque.get(500), Some(&500));
    /// assert_eq!(deque.get(1000), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let (segment, offset) = self.locate(index)?;
        self.segments[segment].get(offset)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let (segment, offset) = self.locate(index)?;
        self.segments[segment].get_mut(offset)
    }

    /// Like [`get`](BlockDeque::get), but reports an out-of-bounds index as an error.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::{BlockDeque, BlockDequeError};
    /// let deque: BlockDeque<i32> = BlockDeque::from([1, 2]);
    /// assert_eq!(deque.try_get(1), Ok(&2));
    /// assert_eq!(deque.try_get(2), Err(BlockDequeError::OutOfBounds { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T, BlockDequeError> {
        self.get(index).ok_or(BlockDequeError::OutOfBounds {
            index,
            len: self.len,
        })
    }

    #[inline]
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, BlockDequeError> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(BlockDequeError::OutOfBounds { index, len })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Returns the number of elements in the `BlockDeque`.
    #[inline]
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots across all segments of the ring.
    /// Not every slot is reachable without growing: how much room each end has depends on where pushes landed.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.segments.len() * SEGMENT_CAPACITY
    }

    /// Returns the number of segments in the ring. This only ever doubles.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Drops every element in the deque's drop order. The ring keeps its size.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut deque: BlockDeque<i32> = (0..1000).collect();
    /// let capacity = deque.capacity();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), capacity);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.clear_with_order(DropOrder::IS_INVERTED);
    }

    /// Drops every element, from the back if `drop_from_back` is set and from the front otherwise.
    pub fn clear_with_order(&mut self, drop_from_back: bool) {
        if self.len > 0 {
            let count = self.segments.len();
            let live = (self.tail + count - self.head) % count + 1;
            for step in 0..live {
                let index = if drop_from_back {
                    (self.tail + count - step) % count
                } else {
                    (self.head + step) % count
                };
                self.segments[index].clear(drop_from_back);
            }
        }
        // segments outside head..=tail are already empty
        self.len = 0;
        self.head = 0;
        self.tail = 0;
    }

    /// Moves the contents out into a new `BlockDeque`, leaving this one empty with a single segment.
    ///
    /// # Examples
    /// ```
    /// # use blockdeque::BlockDeque;
    /// let mut source: BlockDeque<i32> = (0..300).collect();
    /// let moved = source.take();
    /// assert_eq!(moved.len(), 300);
    /// assert!(source.is_empty());
    /// source.push_back(1);
    /// assert_eq!(source, [1]);
    /// ```
    #[inline]
    #[must_use = "use `clear` to drop the contents instead"]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::with_segments(1))
    }

    /// Exchanges the contents of two deques without touching any element.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T, DropOrder, Anchor> Default for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn default() -> Self {
        Self::with_segments(1)
    }
}

impl<T, DropOrder, Anchor> Drop for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, DropOrder, Anchor> Clone for BlockDeque<T, DropOrder, Anchor>
where
    T: Clone,
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn clone(&self) -> Self {
        BlockDeque {
            segments: self.segments.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            drop_order: self.drop_order,
            anchor: self.anchor,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.segments.len() == source.segments.len() {
            for (segment, other) in self.segments.iter_mut().zip(&source.segments) {
                segment.copy_from(other);
            }
        } else {
            self.segments = source.segments.clone();
        }
        self.head = source.head;
        self.tail = source.tail;
        self.len = source.len;
    }
}

impl<T: Debug, DropOrder, Anchor> Debug for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.len).filter_map(|i| self.get(i)))
            .finish()
    }
}

impl<T, DropOrder, Anchor> Index<usize> for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elem) => elem,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T, DropOrder, Anchor> IndexMut<usize> for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T, DropOrder, Anchor> FromIterator<T> for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_segments(segments_for(iter.size_hint().0));
        deque.extend(iter);
        deque
    }
}

impl<T, DropOrder, Anchor> Extend<T> for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, DropOrder, Anchor> From<Vec<T>> for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, DropOrder, Anchor, const N: usize> From<[T; N]> for BlockDeque<T, DropOrder, Anchor>
where
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T, D1, A1, D2, A2> PartialEq<BlockDeque<T, D2, A2>> for BlockDeque<T, D1, A1>
where
    T: PartialEq,
    D1: DropBehavior,
    A1: AnchorBehavior,
    D2: DropBehavior,
    A2: AnchorBehavior,
{
    #[inline]
    fn eq(&self, other: &BlockDeque<T, D2, A2>) -> bool {
        self.len == other.len && (0..self.len).all(|i| self.get(i) == other.get(i))
    }
}

impl<T, DropOrder, Anchor> Eq for BlockDeque<T, DropOrder, Anchor>
where
    T: Eq,
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
}

impl<T, DropOrder, Anchor> PartialEq<[T]> for BlockDeque<T, DropOrder, Anchor>
where
    T: PartialEq,
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len()
            && other
                .iter()
                .enumerate()
                .all(|(i, elem)| self.get(i) == Some(elem))
    }
}

impl<T, DropOrder, Anchor, const N: usize> PartialEq<[T; N]> for BlockDeque<T, DropOrder, Anchor>
where
    T: PartialEq,
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T, DropOrder, Anchor> PartialEq<Vec<T>> for BlockDeque<T, DropOrder, Anchor>
where
    T: PartialEq,
    DropOrder: DropBehavior,
    Anchor: AnchorBehavior,
{
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

/// A version of the [`vec!`] macro but for [`BlockDeque`]. Every element is pushed to the back, in order.
/// # Examples
/// ```
/// # use blockdeque::blockdeque;
/// let mut deque = blockdeque![1, 2, 3, 4, 5];
/// assert_eq!(deque.len(), 5);
/// deque.pop_back();
/// deque.pop_back();
/// deque.pop_back();
/// assert_eq!(deque, [1, 2]);
/// ```
/// ```
/// # use blockdeque::blockdeque;
/// let deque = blockdeque![1; 5];
/// assert_eq!(deque, [1, 1, 1, 1, 1]);
/// ```
/// ```
/// # use blockdeque::{BlockDeque, blockdeque};
/// let deque: BlockDeque<i32> = blockdeque![];
/// assert_eq!(deque.len(), 0);
/// ```
#[macro_export]
macro_rules! blockdeque {
    () => {
        $crate::BlockDeque::<_>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::BlockDeque<_> as ::std::iter::FromIterator<_>>::from_iter(
            ::std::iter::repeat($elem).take($n),
        )
    };
    ($($x:expr),+ $(,)?) => {
        $crate::BlockDeque::<_>::from([$($x),+])
    };
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, DropOrder, Anchor> Serialize for BlockDeque<T, DropOrder, Anchor>
    where
        T: Serialize,
        DropOrder: DropBehavior,
        Anchor: AnchorBehavior,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq((0..self.len).filter_map(|i| self.get(i)))
        }
    }

    impl<'src, T, DropOrder, Anchor> Deserialize<'src> for BlockDeque<T, DropOrder, Anchor>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
        Anchor: AnchorBehavior,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(BlockDeque::from(vec))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_serde() {
            let input_sequences = [
                vec![0, 1, 2, 3, 4, 5, 6],
                vec![3, 2, 1],
                vec![],
                (0..300).collect(),
            ];
            for sequence in input_sequences.iter() {
                let deque: BlockDeque<i32> = BlockDeque::from(sequence.clone());
                let serialized = serde_json::to_string(&deque).unwrap();
                let deserialized: BlockDeque<i32> = serde_json::from_str(&serialized).unwrap();
                assert_eq!(deque, deserialized);
            }
        }

        #[test]
        fn test_serialize_in_logical_order() {
            let mut deque: BlockDeque<i32> = BlockDeque::new();
            deque.push_back(2);
            deque.push_front(1);
            deque.push_back(3);
            assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2,3]");
        }
    }
}
