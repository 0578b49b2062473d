pub mod entry;
pub mod scan;

pub use crate::domain::model::{MediaProbe, MediaType};
pub use crate::utils::error::Result;
pub use entry::{init, print_vector, write_vector};
pub use scan::{MediaScanner, ScanOptions, ScanReport};
