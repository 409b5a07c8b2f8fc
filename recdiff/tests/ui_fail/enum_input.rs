//! Compile-fail test: Record on an enum.

use recdiff::Record;

#[derive(Record)]
enum Status {
    Open,
    Closed,
}

fn main() {}
