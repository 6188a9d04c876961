//! Outbound clients: resolving user names for order enrichment.

pub mod http_resolver;
pub mod mock;
pub mod name_resolver;

pub use http_resolver::*;
pub use mock::*;
pub use name_resolver::*;
