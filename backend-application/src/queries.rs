// Application queries (read-only operations)

pub mod event_queries;
pub mod show_queries;
pub mod ticket_queries;
