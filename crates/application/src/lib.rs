//! Warden DNS Application Layer
pub mod ports;
pub mod synthesis;
pub mod use_cases;

pub use synthesis::synthesize;
pub use use_cases::ResolveQuery;
