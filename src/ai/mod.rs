mod client;

pub use client::{AiClient, AiError, Recommendation};

#[cfg(test)]
mod tests;
