// Ticket metadata composition
// Turns a show's template into the final per-ticket document

use crate::entities::{MetadataTemplate, Show, TicketMetadata};

/// Uniqueness token appended to every ticket name and pin name:
/// show id, next serial (sold count + 1), and a millisecond timestamp.
pub fn unique_ticket_suffix(show_id: i64, serial: i32, issued_at_millis: i64) -> String {
    format!("{show_id}-{serial}-{issued_at_millis}")
}

/// Compose the final metadata document for one ticket. Name falls back
/// from the template to the show name to a bare "Ticket"; the description
/// falls back to naming the show (or its event). Attributes are copied
/// through unchanged.
pub fn compose_ticket_metadata(
    template: &MetadataTemplate,
    show: &Show,
    event_name: &str,
    serial: i32,
    issued_at_millis: i64,
    image_url: String,
) -> TicketMetadata {
    let suffix = unique_ticket_suffix(show.show_id, serial, issued_at_millis);
    let base_name = template
        .name
        .clone()
        .or_else(|| show.show_name.clone())
        .unwrap_or_else(|| "Ticket".to_string());
    let subject = show
        .show_name
        .clone()
        .unwrap_or_else(|| event_name.to_string());

    TicketMetadata {
        name: format!("{base_name} #{suffix}"),
        description: template
            .description
            .clone()
            .unwrap_or_else(|| format!("Ticket for {subject}")),
        image: image_url,
        attributes: template.attributes.clone(),
    }
}
