pub mod extractors;

pub use extractors::{JsonBody, ProductId};
