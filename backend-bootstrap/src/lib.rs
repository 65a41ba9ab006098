// Backend bootstrap: wiring and process lifecycle

pub mod context;
pub mod lifecycle;

pub use context::AppContext;
pub use lifecycle::run_standalone;
