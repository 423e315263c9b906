pub mod matcher;
pub mod string;

pub use matcher::{find_placeholder, Placeholder};
