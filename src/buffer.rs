use crate::DynArrayError;

/// Number of slots a fresh buffer starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// The owned backing store of a [`DynArray`](crate::DynArray).
///
/// Holds a boxed slice of `capacity` slots, every one of them initialized
/// (unused slots carry `T::default()`). The array tracks which prefix of the
/// slots is live; the buffer itself only knows how to hand out its slots and
/// how to grow.
#[derive(Debug)]
pub struct Buffer<T: Default + Clone> {
    slots: Box<[T]>,
}

impl<T: Default + Clone> Buffer<T> {
    /// Allocates a buffer of `capacity` default-initialized slots.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::new();
        slots.resize_with(capacity, T::default);
        Buffer {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Total number of slots, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Doubles the capacity and migrates the first `live` slots into the
    /// new allocation, element by element.
    ///
    /// The new buffer is fully built before the old one is released, so on
    /// [`DynArrayError::AllocationFailed`] the existing slots are untouched.
    pub fn grow(&mut self, live: usize) -> Result<(), DynArrayError> {
        let new_capacity = (self.capacity() * 2).max(DEFAULT_CAPACITY);

        let mut next = Vec::new();
        next.try_reserve_exact(new_capacity)
            .map_err(|_| DynArrayError::AllocationFailed(new_capacity))?;

        next.extend(self.slots[..live].iter().cloned());
        next.resize_with(new_capacity, T::default);

        self.slots = next.into_boxed_slice();
        Ok(())
    }
}
