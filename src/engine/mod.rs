mod core;
mod errors;

pub use core::NumberEnumerator;
pub use errors::EngineError;

#[cfg(test)]
mod tests;
