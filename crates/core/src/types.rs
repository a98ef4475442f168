/// Primary keys of the franchise tables.
pub type DbId = i64;

/// `DATETIME` columns carry no zone information.
pub type Timestamp = chrono::NaiveDateTime;
