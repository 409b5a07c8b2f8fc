//! Compile-fail test: unknown key in the struct attribute.

use recdiff::Record;

#[derive(Record)]
#[record(name = "gadget")]
struct Gadget {
    serial: String,
}

fn main() {}
