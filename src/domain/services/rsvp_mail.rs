use crate::domain::models::email::OutboundEmail;
use crate::domain::models::rsvp::Guest;

/// Substituted into the email body when the guest leaves no message.
pub const NO_MESSAGE_PLACEHOLDER: &str = "No message provided.";

/// One line per guest, 1-indexed in draft order. The dietary note rides in
/// parentheses after the name; an empty note leaves the line bare.
fn guest_line(position: usize, guest: &Guest) -> String {
    let dietary = if guest.dietary.is_empty() {
        String::new()
    } else {
        format!("({})", guest.dietary)
    };
    format!("Guest {}: {} {}", position, guest.name, dietary)
}

pub fn render_body(guests: &[Guest], message: &str) -> String {
    let guest_details = guests
        .iter()
        .enumerate()
        .map(|(idx, guest)| guest_line(idx + 1, guest))
        .collect::<Vec<_>>()
        .join("\n");

    let message = if message.is_empty() {
        NO_MESSAGE_PLACEHOLDER
    } else {
        message
    };

    format!("{}\n\nMessage:\n{}", guest_details, message)
}

/// Guest #1's name labels the submission.
pub fn subject(guests: &[Guest]) -> String {
    let primary = guests.first().map(|g| g.name.as_str()).unwrap_or_default();
    format!("RSVP for Wedding - {}", primary)
}

pub fn compose(from: &str, to: &str, guests: &[Guest], message: &str) -> OutboundEmail {
    OutboundEmail {
        from: from.to_string(),
        to: to.to_string(),
        subject: subject(guests),
        body: render_body(guests, message),
    }
}
