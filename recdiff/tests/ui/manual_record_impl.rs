use recdiff::{FieldAccessor, FieldValue, Record, RecordDiff, SchemaDescriptor};

struct Setting {
    key: String,
    value: String,
}

impl Record for Setting {
    const SCHEMA: &'static str = "setting";

    fn schema_descriptor() -> SchemaDescriptor {
        SchemaDescriptor::new(Self::SCHEMA, "settings").field("key").field("value")
    }

    fn accessors() -> Vec<FieldAccessor<Self>> {
        vec![
            FieldAccessor::new("Key", |s: &Self| FieldValue::Text(s.key.clone())),
            FieldAccessor::new("Value", |s: &Self| FieldValue::Text(s.value.clone())),
        ]
    }
}

fn main() {
    let a = Setting { key: "theme".into(), value: "dark".into() };
    let b = Setting { key: "theme".into(), value: "light".into() };
    let count = RecordDiff::new(&a, &b).unwrap().count().unwrap();
    assert_eq!(count, 1);
}
