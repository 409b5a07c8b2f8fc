//! Compile-fail test: unknown key in a field attribute.

use recdiff::Record;

#[derive(Record)]
struct Gadget {
    #[record(rename = "sn")]
    serial: String,
}

fn main() {}
