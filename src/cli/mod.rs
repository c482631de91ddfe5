pub mod shopping;

pub use shopping::*;
