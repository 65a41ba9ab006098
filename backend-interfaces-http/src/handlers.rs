pub mod admin_event_handlers;
pub mod admin_show_handlers;
pub mod ops_handlers;
pub mod ticket_handlers;
