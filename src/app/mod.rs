pub mod ports;
pub mod user_groups;
