use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::{Add, Sub};

/// Forward random-access cursor over the live elements of a
/// [`DynArray`](crate::DynArray).
///
/// A cursor is a transient, copyable position into the array's buffer. It
/// borrows the array, so the borrow checker rejects any mutation of the
/// array while a cursor is alive — the invalidation hazard of a reallocating
/// or shifting mutation cannot be expressed.
///
/// Cursors never own the element they refer to and never release anything
/// on drop.
///
/// # Examples
///
/// ```
/// use dyn_array::DynArray;
///
/// let arr = DynArray::from_slice(&[10, 20, 30]);
///
/// let collected: Vec<u32> = arr.cursor().copied().collect();
/// assert_eq!(collected, vec![10, 20, 30]);
///
/// // Random access: offset and distance
/// let begin = arr.cursor();
/// let end = arr.cursor_end();
/// assert_eq!((begin + 1).peek(), Some(&20));
/// assert_eq!(end - begin, 3);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    /// Position in `0..=items.len()`; `items.len()` is the end position.
    pos: usize,
}

// Manual impls: a cursor only holds a borrow and a position, so it is
// copyable for any `T` (a derive would demand `T: Copy`).
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= items.len());
        Cursor { items, pos }
    }

    /// The element the cursor currently refers to, or `None` at the end
    /// position.
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    /// Buffer position of the cursor, counted from the first element.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves one position back toward the first element and returns the
    /// element now referred to, or `None` if already at the first element.
    pub fn step_back(&mut self) -> Option<&'a T> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        Some(&self.items[self.pos])
    }

    // Pointer identity plus length. For zero-sized `T` every slice shares
    // the same dangling pointer, so equal-length ranges of a zero-sized
    // type are indistinguishable; positions still compare correctly.
    fn same_range(&self, other: &Self) -> bool {
        std::ptr::eq(self.items.as_ptr(), other.items.as_ptr())
            && self.items.len() == other.items.len()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.items.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
impl<T> FusedIterator for Cursor<'_, T> {}

impl<'a, T> Add<usize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    /// Cursor `rhs` positions closer to the end.
    ///
    /// # Panics
    ///
    /// Panics if the result would land past the end position.
    fn add(self, rhs: usize) -> Cursor<'a, T> {
        let pos = self.pos + rhs;
        assert!(pos <= self.items.len(), "cursor offset out of range");
        Cursor {
            items: self.items,
            pos,
        }
    }
}

impl<'a, T> Sub<usize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    /// Cursor `rhs` positions closer to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the result would land before the first element.
    fn sub(self, rhs: usize) -> Cursor<'a, T> {
        assert!(rhs <= self.pos, "cursor offset out of range");
        Cursor {
            items: self.items,
            pos: self.pos - rhs,
        }
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Signed distance between two cursors over the same array.
    fn sub(self, rhs: Self) -> isize {
        debug_assert!(self.same_range(&rhs), "cursors from different arrays");
        self.pos as isize - rhs.pos as isize
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_range(other) && self.pos == other.pos
    }
}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_range(other) {
            return None;
        }
        Some(self.pos.cmp(&other.pos))
    }
}

/// Reverse random-access cursor over the live elements of a
/// [`DynArray`](crate::DynArray).
///
/// Mirrors [`Cursor`]: advancing moves toward lower buffer positions, and
/// the ordering of two reverse cursors mirrors buffer position order. The
/// range produced by [`DynArray::rev_cursor`](crate::DynArray::rev_cursor)
/// and [`DynArray::rev_cursor_end`](crate::DynArray::rev_cursor_end) starts
/// at the last element and stops one position before the first.
///
/// # Examples
///
/// ```
/// use dyn_array::DynArray;
///
/// let arr = DynArray::from_slice(&[10, 20, 30]);
///
/// let collected: Vec<u32> = arr.rev_cursor().copied().collect();
/// assert_eq!(collected, vec![30, 20, 10]);
/// ```
#[derive(Debug)]
pub struct RevCursor<'a, T> {
    items: &'a [T],
    /// Number of elements already passed, counted from the back;
    /// `items.len()` is the end position (one before the first element).
    pos: usize,
}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursor<'_, T> {}

impl<'a, T> RevCursor<'a, T> {
    pub(crate) fn new(items: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= items.len());
        RevCursor { items, pos }
    }

    /// The element the cursor currently refers to, or `None` at the end
    /// position.
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        if self.pos < self.items.len() {
            Some(&self.items[self.items.len() - 1 - self.pos])
        } else {
            None
        }
    }

    /// Position in traversal order, counted from the last element.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves one position back toward the last element and returns the
    /// element now referred to, or `None` if already at the last element.
    pub fn step_back(&mut self) -> Option<&'a T> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        self.peek()
    }

    // Same identity rule (and zero-sized-type caveat) as Cursor::same_range.
    fn same_range(&self, other: &Self) -> bool {
        std::ptr::eq(self.items.as_ptr(), other.items.as_ptr())
            && self.items.len() == other.items.len()
    }
}

impl<'a, T> Iterator for RevCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.peek()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.items.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for RevCursor<'_, T> {}
impl<T> FusedIterator for RevCursor<'_, T> {}

impl<'a, T> Add<usize> for RevCursor<'a, T> {
    type Output = RevCursor<'a, T>;

    /// Cursor `rhs` positions further along the reverse traversal, i.e.
    /// toward lower buffer positions.
    ///
    /// # Panics
    ///
    /// Panics if the result would land past the end position.
    fn add(self, rhs: usize) -> RevCursor<'a, T> {
        let pos = self.pos + rhs;
        assert!(pos <= self.items.len(), "cursor offset out of range");
        RevCursor {
            items: self.items,
            pos,
        }
    }
}

impl<'a, T> Sub<usize> for RevCursor<'a, T> {
    type Output = RevCursor<'a, T>;

    /// Cursor `rhs` positions back toward the last element.
    ///
    /// # Panics
    ///
    /// Panics if the result would land before the last element.
    fn sub(self, rhs: usize) -> RevCursor<'a, T> {
        assert!(rhs <= self.pos, "cursor offset out of range");
        RevCursor {
            items: self.items,
            pos: self.pos - rhs,
        }
    }
}

impl<T> Sub for RevCursor<'_, T> {
    type Output = isize;

    /// Signed distance between two reverse cursors, in traversal order.
    fn sub(self, rhs: Self) -> isize {
        debug_assert!(self.same_range(&rhs), "cursors from different arrays");
        self.pos as isize - rhs.pos as isize
    }
}

impl<T> PartialEq for RevCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_range(other) && self.pos == other.pos
    }
}

impl<T> PartialOrd for RevCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_range(other) {
            return None;
        }
        Some(self.pos.cmp(&other.pos))
    }
}
