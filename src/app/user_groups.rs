use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::ports::Collector;
use crate::constants::{
    COMPATIBLE_OS, DEFAULT_GROUP_FILE, DESCRIPTION, GID_COLUMN, GROUPS_TABLE,
    GROUP_MEMBERS_TABLE, GROUP_NAME_COLUMN, RELEASE, USER_NAME_COLUMN,
};
use crate::error::Result;
use crate::parser::extract_group_file;
use crate::types::{Column, GroupTables, ResultSet, TableSchema, Value};

pub static TABLES: [TableSchema; 2] = [
    TableSchema {
        name: GROUPS_TABLE,
        columns: &[
            Column::varchar(GROUP_NAME_COLUMN, 50),
            Column::bigint(GID_COLUMN),
        ],
    },
    TableSchema {
        name: GROUP_MEMBERS_TABLE,
        columns: &[
            Column::bigint(GID_COLUMN),
            Column::varchar(USER_NAME_COLUMN, 32),
        ],
    },
];

/// Collects groups and group members from the system group database.
pub struct UserGroupsCollector {
    source: PathBuf,
}

impl UserGroupsCollector {
    /// Collector reading the system group file
    pub fn new() -> Self {
        Self::at(DEFAULT_GROUP_FILE)
    }

    /// Collector reading a group file at another location, e.g. inside a
    /// mounted system image
    pub fn at(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Default for UserGroupsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for UserGroupsCollector {
    fn tables(&self) -> &'static [TableSchema] {
        &TABLES
    }

    fn compatible_os(&self) -> &'static [&'static str] {
        COMPATIBLE_OS
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn release(&self) -> u32 {
        RELEASE
    }

    fn execute(&self) -> Result<Vec<ResultSet>> {
        let tables = extract_group_file(&self.source)?;
        info!(source = %self.source.display(), "collected group tables");
        Ok(to_result_sets(tables))
    }
}

/// Lay the extracted records out as the two declared tables
pub fn to_result_sets(tables: GroupTables) -> Vec<ResultSet> {
    let mut groups = ResultSet::with_header(&TABLES[0]);
    for group in tables.groups {
        groups.push(vec![Value::Text(group.name), Value::BigInt(group.gid)]);
    }

    let mut members = ResultSet::with_header(&TABLES[1]);
    for member in tables.memberships {
        members.push(vec![Value::BigInt(member.gid), Value::Text(member.user)]);
    }

    vec![groups, members]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupRecord, MembershipRecord, SqlType};

    #[test]
    fn declares_two_tables_in_order() {
        let collector = UserGroupsCollector::new();
        let tables = collector.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "UNIX_GROUPS_V1");
        assert_eq!(tables[0].column_names(), vec!["GROUP_NAME", "GID"]);
        assert_eq!(tables[0].columns[0].size, 50);
        assert_eq!(tables[0].columns[1].sql_type, SqlType::BigInt);
        assert_eq!(tables[1].name, "UNIX_GROUP_MEMBERS_V1");
        assert_eq!(tables[1].column_names(), vec!["GID", "USER_NAME"]);
        assert_eq!(tables[1].columns[1].size, 32);
    }

    #[test]
    fn metadata_matches_collector_registration() {
        let collector = UserGroupsCollector::default();
        assert_eq!(collector.source(), Path::new("/etc/group"));
        assert_eq!(collector.compatible_os(), &["AIX", "HP-UX", "LINUX", "SUNOS"]);
        assert!(collector.parameters().is_empty());
        assert_eq!(collector.release(), 1);
        assert!(collector.description().starts_with("Description:"));
    }

    #[test]
    fn result_sets_carry_headers_then_rows() {
        let tables = GroupTables {
            groups: vec![GroupRecord {
                name: "admin".to_string(),
                gid: 100,
            }],
            memberships: vec![MembershipRecord {
                gid: 100,
                user: "alice".to_string(),
            }],
        };
        let sets = to_result_sets(tables);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].table, "UNIX_GROUPS_V1");
        assert_eq!(
            sets[0].records(),
            &[vec![Value::Text("admin".to_string()), Value::BigInt(100)]]
        );
        assert_eq!(
            sets[1].header(),
            &[Value::Text("GID".to_string()), Value::Text("USER_NAME".to_string())]
        );
        assert_eq!(
            sets[1].records(),
            &[vec![Value::BigInt(100), Value::Text("alice".to_string())]]
        );
    }
}
