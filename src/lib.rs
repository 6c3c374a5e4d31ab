//! In-memory string to string dataset with unique insertion and prefix lookups.
//!
//! ```
//! use dataset::Dataset;
//!
//! let mut dataset = Dataset::new();
//! dataset.add("app.name", "demo").unwrap();
//! dataset.set("app.version", "1.0");
//!
//! assert!(dataset.add("app.name", "other").is_err());
//! assert_eq!(dataset.get_started_with("app.").len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod store;

pub use error::{DatasetError, Result, UniquenessViolation};
pub use store::Dataset;
