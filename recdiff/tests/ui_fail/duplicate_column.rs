//! Compile-fail test: two fields map to the same column.

use recdiff::Record;

#[derive(Record)]
struct Contact {
    email: String,
    #[record(column = "email")]
    backup_email: String,
}

fn main() {}
