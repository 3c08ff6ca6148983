use crate::DynArrayError;
use crate::buffer::{Buffer, DEFAULT_CAPACITY};
use crate::cursor::{Cursor, RevCursor};

/// Growable sequence backed by a single contiguous owned buffer.
///
/// `DynArray<T>` keeps its elements in one heap allocation and doubles that
/// allocation whenever an append or insert would exhaust it, which makes
/// [`push_back`](DynArray::push_back) amortized O(1). Front operations and
/// positional insertion shift elements and are O(n); indexed access is O(1).
///
/// `T` must be `Default + Clone` (unused buffer slots carry default values,
/// and growth copies elements rather than raw bytes). Operations that
/// compare elements additionally require `T: PartialEq`.
///
/// # Examples
///
/// ## Appending and reading
///
/// ```
/// use dyn_array::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.push_back(1).unwrap();
/// arr.push_back(2).unwrap();
/// arr.push_back(3).unwrap();
///
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.get(0), Some(&1));
/// assert_eq!(arr.get(3), None);
/// assert_eq!(arr.pop_back().unwrap(), 3);
/// ```
///
/// ## Traversal in both directions
///
/// ```
/// use dyn_array::DynArray;
///
/// let arr = DynArray::from_slice(&[1, 2, 3]);
///
/// let forward: Vec<i32> = arr.cursor().copied().collect();
/// let backward: Vec<i32> = arr.rev_cursor().copied().collect();
/// assert_eq!(forward, vec![1, 2, 3]);
/// assert_eq!(backward, vec![3, 2, 1]);
/// ```
#[derive(Debug)]
pub struct DynArray<T: Default + Clone> {
    buf: Buffer<T>,
    /// Live element count; always strictly below `buf.capacity()`.
    len: usize,
}

impl<T: Default + Clone> DynArray<T> {
    /// Creates an empty array with the default initial capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr = DynArray::<u32>::new();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        DynArray {
            buf: Buffer::new(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty array with at least `capacity` slots, never fewer
    /// than the default initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        DynArray {
            buf: Buffer::new(capacity.max(DEFAULT_CAPACITY)),
            len: 0,
        }
    }

    /// Creates an array holding a copy of every element of `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr = DynArray::from_slice(&[1, 2, 3]);
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(arr.get(1), Some(&2));
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        let mut arr = DynArray {
            buf: Buffer::new((values.len() + 1).max(DEFAULT_CAPACITY)),
            len: values.len(),
        };
        arr.buf.slots_mut()[..values.len()].clone_from_slice(values);
        arr
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of allocated slots. Grows, never shrinks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Grows the buffer if one more element would exhaust it, keeping the
    /// live count strictly below capacity.
    fn ensure_spare(&mut self) -> Result<(), DynArrayError> {
        if self.len + 1 >= self.buf.capacity() {
            self.buf.grow(self.len)?;
        }
        Ok(())
    }

    /// Appends an element after the last one.
    ///
    /// Amortized O(1); O(n) when the buffer has to grow.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::AllocationFailed`] if growth cannot obtain a
    /// larger buffer; the array is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push_back("a").unwrap();
    /// arr.push_back("b").unwrap();
    /// assert_eq!(arr.len(), 2);
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), DynArrayError> {
        self.ensure_spare()?;
        self.buf.slots_mut()[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// O(1). The vacated slot is reset to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::Empty`] if the array holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::{DynArray, DynArrayError};
    ///
    /// let mut arr = DynArray::from_slice(&[1, 2]);
    /// assert_eq!(arr.pop_back().unwrap(), 2);
    /// assert_eq!(arr.pop_back().unwrap(), 1);
    /// assert_eq!(arr.pop_back(), Err(DynArrayError::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, DynArrayError> {
        if self.is_empty() {
            return Err(DynArrayError::Empty);
        }
        self.len -= 1;
        Ok(std::mem::take(&mut self.buf.slots_mut()[self.len]))
    }

    /// Inserts an element at position 0, shifting every existing element
    /// one slot to the right. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::AllocationFailed`] if growth cannot obtain a
    /// larger buffer.
    pub fn push_front(&mut self, value: T) -> Result<(), DynArrayError> {
        self.insert(0, value)
    }

    /// Removes and returns the first element, shifting the remaining
    /// elements one slot to the left. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::Empty`] if the array holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::from_slice(&[1, 2, 3]);
    /// assert_eq!(arr.pop_front().unwrap(), 1);
    /// assert_eq!(arr.as_slice(), &[2, 3]);
    /// ```
    pub fn pop_front(&mut self) -> Result<T, DynArrayError> {
        if self.is_empty() {
            return Err(DynArrayError::Empty);
        }
        let first = std::mem::take(&mut self.buf.slots_mut()[0]);
        self.buf.slots_mut()[..self.len].rotate_left(1);
        self.len -= 1;
        Ok(first)
    }

    /// Inserts an element at `index`, shifting the elements at
    /// `[index, len)` one slot to the right. O(n). `index == len` appends.
    ///
    /// # Errors
    ///
    /// - [`DynArrayError::IndexOutOfRange`] if `index > len`
    /// - [`DynArrayError::AllocationFailed`] if growth cannot obtain a
    ///   larger buffer
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::{DynArray, DynArrayError};
    ///
    /// let mut arr = DynArray::from_slice(&[1, 2, 3]);
    /// arr.insert(1, 99).unwrap();
    /// assert_eq!(arr.as_slice(), &[1, 99, 2, 3]);
    ///
    /// assert_eq!(arr.insert(9, 0), Err(DynArrayError::IndexOutOfRange(9)));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        if index > self.len {
            return Err(DynArrayError::IndexOutOfRange(index));
        }
        self.ensure_spare()?;

        // Bring the spare slot at `len` down to `index`, shifting the tail
        // right by one, then overwrite it.
        self.buf.slots_mut()[index..=self.len].rotate_right(1);
        self.buf.slots_mut()[index] = value;
        self.len += 1;
        Ok(())
    }

    /// `true` if some element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Reference to the element at `index`, or `None` if `index >= len`.
    ///
    /// Out-of-range read probing is an expected pattern, so this reports
    /// absence instead of failing.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        Some(&mut self.buf.slots_mut()[index])
    }

    /// The live elements as one contiguous slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr = DynArray::from_slice(&[1, 2, 3]);
    /// let sum: i32 = arr.as_slice().iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.slots()[..self.len]
    }

    /// The live elements as one contiguous mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.slots_mut()[..len]
    }

    /// Removes every element, resetting the vacated slots to
    /// `T::default()`. Capacity is retained.
    pub fn clear(&mut self) {
        let len = self.len;
        self.buf.slots_mut()[..len].fill_with(T::default);
        self.len = 0;
    }

    /// Appends a copy of every element of `values`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::AllocationFailed`] if growth fails part way;
    /// elements appended before the failure remain.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), DynArrayError> {
        for value in values {
            self.push_back(value.clone())?;
        }
        Ok(())
    }

    /// Forward cursor at the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Forward cursor one past the last element. Together with
    /// [`cursor`](DynArray::cursor) it bounds the half-open range of all
    /// live elements.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Reverse cursor at the last element.
    pub fn rev_cursor(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.as_slice(), 0)
    }

    /// Reverse cursor one before the first element. Together with
    /// [`rev_cursor`](DynArray::rev_cursor) it bounds the half-open reverse
    /// range of all live elements.
    pub fn rev_cursor_end(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.as_slice(), self.len)
    }

    /// Iterator over the live elements in insertion order; same as
    /// [`cursor`](DynArray::cursor).
    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }
}

impl<T: Default + Clone> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> Clone for DynArray<T> {
    /// Deep copy: the clone owns an independent buffer of the same
    /// capacity, with the live prefix copied element by element. Cloning an
    /// empty array yields a fresh array with the default capacity.
    fn clone(&self) -> Self {
        if self.is_empty() {
            return DynArray::new();
        }
        let mut buf = Buffer::new(self.capacity());
        buf.slots_mut()[..self.len].clone_from_slice(self.as_slice());
        DynArray { buf, len: self.len }
    }

    /// Reuses the destination buffer when it is large enough, otherwise
    /// falls back to a fresh deep copy.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() > source.len {
            self.buf.slots_mut()[..source.len].clone_from_slice(source.as_slice());
            if self.len > source.len {
                let len = self.len;
                self.buf.slots_mut()[source.len..len].fill_with(T::default);
            }
            self.len = source.len;
        } else {
            *self = source.clone();
        }
    }
}

impl<T: Default + Clone + PartialEq> PartialEq for DynArray<T> {
    /// Equal iff both arrays have the same length and element-wise equal
    /// contents in order. Two handles over the same buffer compare equal
    /// without scanning.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        // Identity fast path. The length check above must come first: for
        // zero-sized `T` every buffer shares the same dangling pointer.
        if std::ptr::eq(self.buf.slots().as_ptr(), other.buf.slots().as_ptr()) {
            return true;
        }
        self.as_slice() == other.as_slice()
    }
}

impl<T: Default + Clone + Eq> Eq for DynArray<T> {}

impl<T: Default + Clone> std::ops::Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<T: Default + Clone> std::ops::IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<'a, T: Default + Clone> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Cursor<'a, T> {
        self.cursor()
    }
}
