//! Compile-fail test: Record on a tuple struct.

use recdiff::Record;

#[derive(Record)]
struct Point(i32, i32);

fn main() {}
