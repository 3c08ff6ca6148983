//! Basic container operations: append, insert, remove, probe.

use dyn_array::{DynArray, DynArrayError};

fn main() -> Result<(), DynArrayError> {
    let mut arr = DynArray::new();

    // Amortized O(1) appends; the buffer doubles whenever it runs out.
    for i in 1..=20 {
        arr.push_back(i)?;
    }
    println!("after 20 appends: len={} capacity={}", arr.len(), arr.capacity());

    // O(n) positional insertion shifts the tail right.
    arr.insert(0, 0)?;
    arr.insert(10, 99)?;
    println!("front element: {:?}", arr.get(0));
    println!("inserted at 10: {:?}", arr.get(10));

    // Probing past the end is absence, not an error.
    assert_eq!(arr.get(1000), None);

    // Removal reports failure on an empty array instead of defaulting.
    let first = arr.pop_front()?;
    let last = arr.pop_back()?;
    println!("removed front={first} back={last}");

    let mut drained = DynArray::from_slice(&[1]);
    drained.pop_back()?;
    match drained.pop_back() {
        Err(DynArrayError::Empty) => println!("empty removal reported as expected"),
        other => println!("unexpected: {other:?}"),
    }

    // Deep copies are independent.
    let snapshot = arr.clone();
    arr.push_back(1000)?;
    println!(
        "snapshot len={} live len={} equal={}",
        snapshot.len(),
        arr.len(),
        snapshot == arr
    );

    Ok(())
}
