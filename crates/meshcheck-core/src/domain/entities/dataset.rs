use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of a dataset view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub description: String,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: description.into(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Split a rendered `(name;type;description)` triple back into its parts.
    ///
    /// Returns `None` when the string is not wrapped in parentheses or does
    /// not hold three `;`-separated parts. The description keeps any further
    /// `;` characters.
    pub fn parse_rendered(rendered: &str) -> Option<(&str, &str, &str)> {
        let inner = rendered.strip_prefix('(')?.strip_suffix(')')?;
        let mut parts = inner.splitn(3, ';');
        Some((parts.next()?, parts.next()?, parts.next()?))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{};{})", self.name, self.data_type, self.description)
    }
}

/// A plain (non-materialized) view exposed by a data product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetView {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl DatasetView {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_renders_as_delimited_triple() {
        let col = Column::new("id", "bigint", "Order id");
        assert_eq!(col.to_string(), "(id;bigint;Order id)");
    }

    #[test]
    fn parse_rendered_accepts_empty_description() {
        assert_eq!(
            Column::parse_rendered("(id;bigint;)"),
            Some(("id", "bigint", ""))
        );
    }

    #[test]
    fn parse_rendered_rejects_malformed() {
        assert_eq!(Column::parse_rendered("id;bigint;x"), None);
        assert_eq!(Column::parse_rendered("(id;bigint)"), None);
    }

    #[test]
    fn column_type_uses_type_key_in_serde() {
        let col: Column =
            serde_json::from_str(r#"{"name":"id","type":"int","description":"x"}"#).unwrap();
        assert_eq!(col.data_type, "int");
    }
}
