//! Forward and reverse cursor traversal and random access.

use dyn_array::DynArray;

fn main() {
    let arr = DynArray::from_slice(&[10, 20, 30, 40, 50]);

    // Forward traversal over [begin, end).
    print!("forward: ");
    for v in arr.cursor() {
        print!("{v} ");
    }
    println!();

    // Reverse traversal starts at the last element.
    print!("reverse: ");
    for v in arr.rev_cursor() {
        print!("{v} ");
    }
    println!();

    // Cursors are random access: offset arithmetic and distances.
    let begin = arr.cursor();
    let end = arr.cursor_end();
    println!("third element: {:?}", (begin + 2).peek());
    println!("distance end - begin: {}", end - begin);
    println!("begin < end: {}", begin < end);

    // Walking backward from the end position.
    let mut cursor = arr.cursor_end();
    print!("step_back: ");
    while let Some(v) = cursor.step_back() {
        print!("{v} ");
    }
    println!();

    // The reverse range mirrors the forward one.
    let forward: Vec<i32> = arr.cursor().copied().collect();
    let mut mirrored: Vec<i32> = arr.rev_cursor().copied().collect();
    mirrored.reverse();
    assert_eq!(forward, mirrored);
    println!("forward and reversed-reverse agree");
}
