pub mod health;
pub mod rsvp;
pub mod translation;
