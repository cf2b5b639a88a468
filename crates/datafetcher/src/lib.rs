pub mod classifier;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod markup;
pub mod patterns;
pub mod util;
