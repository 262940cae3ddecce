use tabled::{
    Table, Tabled,
    settings::{Remove, Style, object::Rows},
};

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    /// Drop the row of column names.
    pub hide_columns: bool,
}

impl Formatter {
    pub fn build<T: Tabled, I: IntoIterator<Item = T>>(self, data: I) -> Table {
        let mut table = Table::new(data);
        if self.hide_columns {
            table.with(Remove::row(Rows::first()));
        }

        table.with(Style::blank());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        name: &'static str,
        id: i64,
    }

    fn rows() -> Vec<Row> {
        vec![Row { name: "Tag_17", id: 1 }, Row { name: "Tag_18", id: 2 }]
    }

    #[test]
    fn keeps_column_names_by_default() {
        let text = Formatter::default().build(rows()).to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().contains("name"));
    }

    #[test]
    fn hidden_columns_leave_only_rows() {
        let text = Formatter { hide_columns: true }.build(rows()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Tag_17"));
        assert!(!text.contains("name"));
    }
}
