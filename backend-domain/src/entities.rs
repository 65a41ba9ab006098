// Domain entities

pub mod config;
pub mod event;
pub mod metadata;
pub mod show;
pub mod ticket;

pub use config::*;
pub use event::*;
pub use metadata::*;
pub use show::*;
pub use ticket::*;
