//! Source file and delimiter constants for the group database.
//! These never vary per invocation; configuration does not touch them.

// Group database location
pub const DEFAULT_GROUP_FILE: &str = "/etc/group";

// Line syntax
pub const COMMENT_MARKER: char = '#';
pub const FIELD_DELIMITER: char = ':';
pub const MEMBER_DELIMITER: char = ',';

/// Number of colon-separated fields in a well-formed group line
pub const GROUP_FIELD_COUNT: usize = 4;

// Field positions within a group line
pub const NAME_FIELD: usize = 0;
pub const GID_FIELD: usize = 2;
pub const MEMBERS_FIELD: usize = 3;

// Table names registered with the host
pub const GROUPS_TABLE: &str = "UNIX_GROUPS_V1";
pub const GROUP_MEMBERS_TABLE: &str = "UNIX_GROUP_MEMBERS_V1";

// Column names
pub const GROUP_NAME_COLUMN: &str = "GROUP_NAME";
pub const GID_COLUMN: &str = "GID";
pub const USER_NAME_COLUMN: &str = "USER_NAME";

/// Collector release number, bumped whenever the collector changes
pub const RELEASE: u32 = 1;

pub const DESCRIPTION: &str =
    "Description: Collects group and group member information from the /etc/group file.";

/// Operating systems the collector can run on
pub const COMPATIBLE_OS: &[&str] = &["AIX", "HP-UX", "LINUX", "SUNOS"];

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "unix-groups.toml";
