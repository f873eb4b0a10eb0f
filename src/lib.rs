//! wordcard library exports for testing

pub mod core;
pub mod services;
pub mod tui;

#[cfg(test)]
pub mod test_support;
