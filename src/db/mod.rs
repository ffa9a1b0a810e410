pub mod bootstrap;
pub mod handle;

pub use handle::{Cursor, Database, ResultSet};
