//! UI Components

pub mod banner;
pub mod footer;
pub mod navbar;

pub use banner::{FailureBanner, SuccessBanner};
pub use footer::Footer;
pub use navbar::Navbar;
