use crate::error::Result;
use crate::types::{ResultSet, TableSchema};

/// The contract a hosting framework expects from a collector.
///
/// The host reads the metadata methods when registering the collector and
/// its tables, then calls [`Collector::execute`] on demand. On success
/// `execute` returns one result set per declared table, in declaration
/// order.
pub trait Collector: Send + Sync {
    /// Tables this collector fills, registered before the first run
    fn tables(&self) -> &'static [TableSchema];

    /// Operating system identifiers the collector supports
    fn compatible_os(&self) -> &'static [&'static str];

    /// Names of supported parameters; empty when none
    fn parameters(&self) -> Vec<String> {
        Vec::new()
    }

    fn description(&self) -> &'static str;

    fn release(&self) -> u32;

    fn execute(&self) -> Result<Vec<ResultSet>>;
}
