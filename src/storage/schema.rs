//! Database schema definitions

/// SQL to create the entries table
///
/// Deliberately bare: no key, no constraints, no indexes.
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    text TEXT,
    color TEXT
)
"#;

pub const COUNT_ENTRIES: &str = "SELECT COUNT(*) FROM entries";

pub const INSERT_ENTRY: &str = "INSERT INTO entries (text, color) VALUES (?1, ?2)";

/// Unordered read-back; callers must not rely on row order
pub const SELECT_ENTRIES: &str = "SELECT text, color FROM entries";

/// Build a `DELETE` for a table name.
///
/// The name is interpolated, so callers validate it with [`is_valid_table_name`] first.
pub fn delete_all_statement(table_name: &str) -> String {
    format!("DELETE FROM \"{}\"", table_name)
}

/// Plain SQL identifier: ASCII letter or underscore, then letters, digits or underscores
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
