pub mod errors;
pub mod exposure;
pub mod filters;
pub mod metrics;
pub mod models;
pub mod selector;
pub mod store;

pub use errors::*;
pub use exposure::*;
pub use filters::*;
pub use metrics::*;
pub use models::*;
pub use selector::*;
pub use store::*;
