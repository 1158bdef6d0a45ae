pub mod normalize;
pub mod resolve;
pub mod table;
pub mod types;

pub use resolve::{resolve_count, resolve_count_with};
pub use table::{MagnitudeEntry, MagnitudeTable, TableError};
pub use types::{Confidence, CountError, Decimal, ParsedCount};
