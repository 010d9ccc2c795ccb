//! Minimal in-process host: drives a [`Collector`] the way a hosting
//! framework would and turns its outcome into messages.

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{error, info, info_span};

use crate::app::ports::Collector;
use crate::error::{CollectorError, Result};
use crate::types::{ResultSet, TableSchema};

/// What the host receives back from one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Table(ResultSet),
    Error { kind: String, message: String },
}

impl Message {
    pub fn error(err: &CollectorError) -> Self {
        Message::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Message::Error { .. })
    }
}

/// Registration snapshot of a collector
#[derive(Debug, Clone, Serialize)]
pub struct CollectorInfo {
    pub description: &'static str,
    pub release: u32,
    pub compatible_os: &'static [&'static str],
    pub parameters: Vec<String>,
    pub tables: &'static [TableSchema],
}

pub fn describe(collector: &dyn Collector) -> CollectorInfo {
    CollectorInfo {
        description: collector.description(),
        release: collector.release(),
        compatible_os: collector.compatible_os(),
        parameters: collector.parameters(),
        tables: collector.tables(),
    }
}

/// Run `execute`, converting a panic into [`CollectorError::Unexpected`].
pub fn execute_guarded(collector: &dyn Collector) -> Result<Vec<ResultSet>> {
    match panic::catch_unwind(AssertUnwindSafe(|| collector.execute())) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "collector panicked".to_string());
            Err(CollectorError::Unexpected(message))
        }
    }
}

/// Run a collector once. Success gives one table message per result set;
/// any failure gives a single error message and no table data.
pub fn run_collector(collector: &dyn Collector) -> Vec<Message> {
    let span = info_span!("execute", release = collector.release());
    let _enter = span.enter();
    info!("collector entered");

    let messages = match execute_guarded(collector) {
        Ok(sets) => sets.into_iter().map(Message::Table).collect(),
        Err(err) => {
            error!(kind = err.kind(), "collector failed: {}", err);
            vec![Message::error(&err)]
        }
    };

    info!(messages = messages.len(), "collector exited");
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Value};
    use std::path::PathBuf;

    static TABLES: [TableSchema; 1] = [TableSchema {
        name: "T",
        columns: &[Column::bigint("N")],
    }];

    enum Behaviour {
        Rows,
        Fail,
        Panic,
    }

    struct StubCollector(Behaviour);

    impl Collector for StubCollector {
        fn tables(&self) -> &'static [TableSchema] {
            &TABLES
        }
        fn compatible_os(&self) -> &'static [&'static str] {
            &["LINUX"]
        }
        fn description(&self) -> &'static str {
            "stub"
        }
        fn release(&self) -> u32 {
            3
        }
        fn execute(&self) -> Result<Vec<ResultSet>> {
            match self.0 {
                Behaviour::Rows => {
                    let mut rs = ResultSet::with_header(&TABLES[0]);
                    rs.push(vec![Value::BigInt(1)]);
                    Ok(vec![rs])
                }
                Behaviour::Fail => Err(CollectorError::NotFound(PathBuf::from("/etc/group"))),
                Behaviour::Panic => panic!("boom"),
            }
        }
    }

    #[test]
    fn success_yields_table_messages() {
        let messages = run_collector(&StubCollector(Behaviour::Rows));
        assert_eq!(messages.len(), 1);
        match &messages[0] {
            Message::Table(rs) => assert_eq!(rs.records().len(), 1),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn failure_yields_single_error_message() {
        let messages = run_collector(&StubCollector(Behaviour::Fail));
        assert_eq!(
            messages,
            vec![Message::Error {
                kind: "not_found".to_string(),
                message: "The required file /etc/group does not exist.".to_string(),
            }]
        );
    }

    #[test]
    fn panic_is_reported_as_unexpected() {
        let err = execute_guarded(&StubCollector(Behaviour::Panic)).unwrap_err();
        assert!(matches!(err, CollectorError::Unexpected(ref m) if m == "boom"));
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred. The exception was: boom"
        );
    }

    #[test]
    fn describe_snapshots_metadata() {
        let info = describe(&StubCollector(Behaviour::Rows));
        assert_eq!(info.release, 3);
        assert_eq!(info.compatible_os, &["LINUX"]);
        assert!(info.parameters.is_empty());
        assert_eq!(info.tables.len(), 1);
    }
}
