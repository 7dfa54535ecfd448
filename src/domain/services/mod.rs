pub mod rsvp_mail;
