//! Compile-fail test: every field is skipped.

use recdiff::Record;

#[derive(Record)]
struct Scratch {
    #[record(skip)]
    buffer: Vec<u8>,
}

fn main() {}
