use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::FieldValue;

/// Both sides of one differing field, keyed by record label.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    left_label: String,
    left: FieldValue,
    right_label: String,
    right: FieldValue,
}

impl FieldChange {
    pub fn new(
        left_label: impl Into<String>,
        left: FieldValue,
        right_label: impl Into<String>,
        right: FieldValue,
    ) -> Self {
        Self {
            left_label: left_label.into(),
            left,
            right_label: right_label.into(),
            right,
        }
    }

    /// Value recorded under `label`, if it is one of the two labels.
    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        if label == self.left_label {
            Some(&self.left)
        } else if label == self.right_label {
            Some(&self.right)
        } else {
            None
        }
    }

    pub fn left(&self) -> (&str, &FieldValue) {
        (&self.left_label, &self.left)
    }

    pub fn right(&self) -> (&str, &FieldValue) {
        (&self.right_label, &self.right)
    }

    pub fn labels(&self) -> [&str; 2] {
        [&self.left_label, &self.right_label]
    }
}

impl Serialize for FieldChange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.left_label, &self.left)?;
        map.serialize_entry(&self.right_label, &self.right)?;
        map.end()
    }
}

/// Differing fields of two records, in schema field order.
///
/// Field names are unique. Recording a name that is already present replaces its change
/// and keeps its original position. Serializes as `{ "<field>": { "<left label>": .., "<right label>": .. } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    entries: IndexMap<String, FieldChange>,
}

impl Diff {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: String, change: FieldChange) -> Option<FieldChange> {
        self.entries.insert(field, change)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.entries.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Field names in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldChange)> {
        self.entries.iter().map(|(name, change)| (name.as_str(), change))
    }
}

impl IntoIterator for Diff {
    type Item = (String, FieldChange);
    type IntoIter = indexmap::map::IntoIter<String, FieldChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Diff {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, change) in &self.entries {
            map.serialize_entry(field, change)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Diff {
        let mut diff = Diff::new();
        diff.insert(
            "person.last_name".into(),
            FieldChange::new("before", "Smith".into(), "after", "Jones".into()),
        );
        diff.insert(
            "person.age".into(),
            FieldChange::new("before", FieldValue::Int(30), "after", FieldValue::Int(31)),
        );
        diff
    }

    #[test]
    fn keeps_insertion_order() {
        let diff = sample();
        assert_eq!(diff.fields().collect::<Vec<_>>(), vec!["person.last_name", "person.age"]);
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn repeated_field_replaces_earlier_change_in_place() {
        let mut diff = sample();
        let previous = diff.insert(
            "person.last_name".into(),
            FieldChange::new("before", "Brown".into(), "after", "Green".into()),
        );
        assert_eq!(previous.and_then(|change| change.get("before").cloned()), Some("Smith".into()));
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.fields().collect::<Vec<_>>(), vec!["person.last_name", "person.age"]);
        assert_eq!(
            serde_json::to_value(&diff).unwrap()["person.last_name"],
            json!({"before": "Brown", "after": "Green"})
        );
    }

    #[test]
    fn changes_are_keyed_by_label() {
        let diff = sample();
        let age = diff.get("person.age").unwrap();
        assert_eq!(age.get("before"), Some(&FieldValue::Int(30)));
        assert_eq!(age.get("after"), Some(&FieldValue::Int(31)));
        assert_eq!(age.get("other"), None);
        assert_eq!(age.labels(), ["before", "after"]);
    }

    #[test]
    fn serializes_as_nested_maps() {
        let rendered = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            rendered,
            r#"{"person.last_name":{"before":"Smith","after":"Jones"},"person.age":{"before":30,"after":31}}"#
        );
        assert_eq!(serde_json::to_value(Diff::new()).unwrap(), json!({}));
    }
}
