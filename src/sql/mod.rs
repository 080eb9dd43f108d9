pub mod exec;
pub mod row;

pub use exec::{run_raw_query, RawQueryError};
pub use row::row_to_json;
