//! Compile-fail test: two fields map to the same property.

use recdiff::Record;

#[derive(Record)]
struct Contact {
    #[record(property = "Name")]
    display: String,
    name: String,
}

fn main() {}
