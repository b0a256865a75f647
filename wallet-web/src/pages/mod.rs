//! Page modules

pub mod not_found;
pub mod transfer;

pub use not_found::NotFoundPage;
pub use transfer::TransferPage;
