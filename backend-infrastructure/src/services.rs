pub mod ipfs_service;
pub mod mint_service;
pub mod rate_service;

pub use ipfs_service::*;
pub use mint_service::*;
pub use rate_service::*;
