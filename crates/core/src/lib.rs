pub mod config;
pub mod error;
pub mod location;
pub mod query;
pub mod review;

pub use config::Config;
pub use error::*;
pub use location::{canonical_location, ALLOWED_LOCATIONS};
pub use query::{QueryRule, ReviewQuery};
pub use review::*;
