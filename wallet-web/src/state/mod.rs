//! Page state

pub mod wallet;
