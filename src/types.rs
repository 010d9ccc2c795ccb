use serde::Serialize;

/// One group line that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub name: String,
    pub gid: i64,
}

/// One (group, user) pair taken from a group's member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipRecord {
    pub gid: i64,
    pub user: String,
}

/// Output of a single extraction pass, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupTables {
    pub groups: Vec<GroupRecord>,
    pub memberships: Vec<MembershipRecord>,
}

/// Column types understood by the host's table registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    Varchar,
    BigInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    /// Maximum length for text columns; zero where the type has no size
    pub size: u32,
}

impl Column {
    pub const fn varchar(name: &'static str, size: u32) -> Self {
        Self {
            name,
            sql_type: SqlType::Varchar,
            size,
        }
    }

    pub const fn bigint(name: &'static str) -> Self {
        Self {
            name,
            sql_type: SqlType::BigInt,
            size: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.to_string()).collect()
    }
}

/// A single cell in a result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    BigInt(i64),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::BigInt(n) => write!(f, "{}", n),
        }
    }
}

/// Rows destined for one table. The first row is always the header row
/// naming the table's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub table: String,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn with_header(schema: &TableSchema) -> Self {
        let header = schema
            .columns
            .iter()
            .map(|c| Value::Text(c.name.to_string()))
            .collect();
        Self {
            table: schema.name.to_string(),
            rows: vec![header],
        }
    }

    pub fn push(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[Value] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows, header excluded
    pub fn records(&self) -> &[Vec<Value>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMA: TableSchema = TableSchema {
        name: "T",
        columns: &[Column::varchar("A", 10), Column::bigint("B")],
    };

    #[test]
    fn result_set_starts_with_header_row() {
        let mut rs = ResultSet::with_header(&SCHEMA);
        assert_eq!(
            rs.header(),
            &[Value::Text("A".to_string()), Value::Text("B".to_string())]
        );
        assert!(rs.records().is_empty());

        rs.push(vec![Value::Text("x".to_string()), Value::BigInt(7)]);
        assert_eq!(rs.records().len(), 1);
        assert_eq!(rs.rows.len(), 2);
    }

    #[test]
    fn values_serialize_untagged() {
        let row = vec![Value::Text("wheel".to_string()), Value::BigInt(10)];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["wheel",10]"#);
    }
}
