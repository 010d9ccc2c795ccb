mod tokenizer;

pub use tokenizer::split_all;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::constants::{
    COMMENT_MARKER, FIELD_DELIMITER, GID_FIELD, GROUP_FIELD_COUNT, MEMBERS_FIELD, MEMBER_DELIMITER,
    NAME_FIELD,
};
use crate::error::{CollectorError, Result};
use crate::types::{GroupRecord, GroupTables, MembershipRecord};

/// Records produced by one accepted group line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub group: GroupRecord,
    pub members: Vec<MembershipRecord>,
}

/// Why a line produced no records. Only used for debug tracing; skipped
/// lines are never reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    FieldCount(usize),
    EmptyName,
    BadGid,
}

/// Parse one line of a group file.
///
/// Comment and blank lines, lines without exactly four fields, lines with an
/// empty group name and lines whose gid is not an integer are rejected as a
/// whole; no partial records come out of a rejected line.
pub fn parse_group_line(line: &str) -> std::result::Result<ParsedLine, SkipReason> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SkipReason::Blank);
    }
    if line.starts_with(COMMENT_MARKER) {
        return Err(SkipReason::Comment);
    }

    let fields = split_all(line, FIELD_DELIMITER);
    if fields.len() != GROUP_FIELD_COUNT {
        return Err(SkipReason::FieldCount(fields.len()));
    }

    let name = fields[NAME_FIELD].trim();
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let gid: i64 = fields[GID_FIELD]
        .trim()
        .parse()
        .map_err(|_| SkipReason::BadGid)?;

    let group = GroupRecord {
        name: name.to_string(),
        gid,
    };

    let users = fields[MEMBERS_FIELD].trim();
    let members = if users.is_empty() {
        Vec::new()
    } else {
        // Empty names between adjacent commas are kept
        split_all(users, MEMBER_DELIMITER)
            .into_iter()
            .map(|user| MembershipRecord {
                gid,
                user: user.trim().to_string(),
            })
            .collect()
    };

    Ok(ParsedLine { group, members })
}

/// Run every line of `reader` through [`parse_group_line`], accumulating
/// the accepted records. `path` is only used for error reporting.
///
/// Lines are decoded lossily: undecodable bytes become U+FFFD and the line
/// is judged like any other. Only real I/O failures abort the run.
pub fn parse_group_lines<R: BufRead>(mut reader: R, path: &Path) -> Result<GroupTables> {
    let mut tables = GroupTables::default();
    let mut skipped = 0usize;
    let mut buf = Vec::new();
    let mut index = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| CollectorError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        index += 1;

        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\r', '\n']);

        match parse_group_line(line) {
            Ok(parsed) => {
                tables.groups.push(parsed.group);
                tables.memberships.extend(parsed.members);
            }
            Err(SkipReason::Blank) | Err(SkipReason::Comment) => {}
            Err(reason) => {
                skipped += 1;
                debug!(line = index, ?reason, "skipping malformed group line");
            }
        }
    }

    if tables.groups.is_empty() {
        return Err(CollectorError::EmptyOrInvalid(path.to_path_buf()));
    }

    info!(
        groups = tables.groups.len(),
        memberships = tables.memberships.len(),
        skipped,
        "parsed group file"
    );
    Ok(tables)
}

/// Read and parse the group file at `path`.
///
/// The file handle lives in this frame only and is closed on every return
/// path, successful or not.
pub fn extract_group_file(path: &Path) -> Result<GroupTables> {
    if !path.exists() {
        return Err(CollectorError::NotFound(path.to_path_buf()));
    }

    let file = open_group_file(path)?;
    debug!(path = %path.display(), "opened group file");

    parse_group_lines(BufReader::new(file), path)
}

/// Open `path` for reading. A directory is refused here rather than
/// failing on the first read.
fn open_group_file(path: &Path) -> Result<File> {
    let open_error = |source| CollectorError::Open {
        path: path.to_path_buf(),
        source,
    };
    if path.is_dir() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source is a directory",
        )));
    }
    File::open(path).map_err(open_error)
}
