pub mod email;
pub mod rsvp;
pub mod translation;
