pub mod smtp_mailer;
