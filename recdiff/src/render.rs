use colored::Colorize;
use comfy_table::{Attribute, Cell, Color as TableColor, Table};

use crate::diff::Diff;

/// Options for human-readable diff output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub no_color: bool,
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self { no_color: true }
    }
}

impl Diff {
    /// Renders the diff as a three-column table: field, left value, right value.
    pub fn to_table(&self, options: &RenderOptions) -> Table {
        let mut table = Table::new();
        if options.no_color {
            table.load_preset(comfy_table::presets::ASCII_FULL);
        } else {
            table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
        }

        let Some((_, first)) = self.iter().next() else {
            table.add_row(vec![Cell::new("No differences")]);
            return table;
        };

        let [left_label, right_label] = first.labels();
        let headers = ["Field", left_label, right_label];
        let header_cells: Vec<Cell> = if options.no_color {
            headers.iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)).collect()
        } else {
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(TableColor::Cyan))
                .collect()
        };
        table.set_header(header_cells);

        for (field, change) in self.iter() {
            let (_, left) = change.left();
            let (_, right) = change.right();
            if options.no_color {
                table.add_row(vec![Cell::new(field), Cell::new(left), Cell::new(right)]);
            } else {
                table.add_row(vec![
                    Cell::new(field),
                    Cell::new(left).fg(TableColor::Red),
                    Cell::new(right).fg(TableColor::Green),
                ]);
            }
        }
        table
    }

    /// One line per field: `field: left -> right`.
    pub fn to_compact(&self, options: &RenderOptions) -> String {
        self.iter()
            .map(|(field, change)| {
                let (_, left) = change.left();
                let (_, right) = change.right();
                if options.no_color {
                    format!("{field}: {left} -> {right}")
                } else {
                    format!(
                        "{}: {} -> {}",
                        field.bright_cyan(),
                        left.to_string().red(),
                        right.to_string().green()
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::FieldChange;
    use crate::value::FieldValue;

    fn sample() -> Diff {
        let mut diff = Diff::new();
        diff.insert(
            "person.age".into(),
            FieldChange::new("before", FieldValue::Int(30), "after", FieldValue::Int(31)),
        );
        diff.insert(
            "person.nickname".into(),
            FieldChange::new("before", FieldValue::Null, "after", "Annie".into()),
        );
        diff
    }

    #[test]
    fn compact_output_lists_each_field() {
        let rendered = sample().to_compact(&RenderOptions::plain());
        assert_eq!(rendered, "person.age: 30 -> 31\nperson.nickname: null -> \"Annie\"");
    }

    #[test]
    fn table_uses_labels_as_headers() {
        let rendered = sample().to_table(&RenderOptions::plain()).to_string();
        assert!(rendered.contains("Field"));
        assert!(rendered.contains("before"));
        assert!(rendered.contains("after"));
        assert!(rendered.contains("person.nickname"));
        assert!(rendered.contains("\"Annie\""));
    }

    #[test]
    fn empty_diff_renders_placeholder() {
        let rendered = Diff::new().to_table(&RenderOptions::plain()).to_string();
        assert!(rendered.contains("No differences"));
        assert_eq!(Diff::new().to_compact(&RenderOptions::default()), "");
    }
}
