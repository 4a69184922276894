pub mod scanner;
pub mod yahoo;

pub use scanner::{Scanner, ScannerHandle};
pub use yahoo::YahooClient;
