//! # dyn_array
//!
//! A generic resizable sequence container backed by a single contiguous
//! owned buffer.
//!
//! ## Features
//!
//! - Amortized O(1) append through capacity doubling
//! - O(1) indexed access, O(n) positional insert and front removal
//! - Bidirectional random-access cursors (forward and reverse)
//! - Deep-copy `Clone` with independent buffer lifetime
//! - Explicit error reporting for empty removal, out-of-range insertion,
//!   and failed buffer growth
//!
//! ```
//! use dyn_array::DynArray;
//!
//! let mut arr = DynArray::new();
//! arr.push_back(1)?;
//! arr.push_back(2)?;
//! arr.push_back(3)?;
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.get(0), Some(&1));
//!
//! arr.insert(1, 99)?;
//! assert_eq!(arr.pop_front()?, 1);
//!
//! let backward: Vec<i32> = arr.rev_cursor().copied().collect();
//! assert_eq!(backward, vec![3, 2, 99]);
//! # Ok::<(), dyn_array::DynArrayError>(())
//! ```
//!
//! Single-threaded by design: a `DynArray` is an exclusively owned value,
//! and cursors borrow it, so mutation while a cursor is live is rejected at
//! compile time.

pub mod array;
pub mod cursor;
pub mod error;
#[doc(hidden)]
pub mod buffer;

pub use array::DynArray;
pub use cursor::{Cursor, RevCursor};
pub use error::DynArrayError;
