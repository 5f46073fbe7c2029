mod tables;

pub use self::tables::{key_table as print_key_table, scoring as print_scoring_report};
