//! Compile-fail test: Record on a generic struct.

use recdiff::Record;

#[derive(Record)]
struct Wrapper<T> {
    value: T,
}

fn main() {}
