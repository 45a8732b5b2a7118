pub mod initializer;
pub mod multiplier;

pub use initializer::Initializer;
pub use multiplier::Multiplier;
