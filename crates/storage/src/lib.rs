pub mod store;

pub use store::ReviewStore;
