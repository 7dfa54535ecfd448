use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_secure: bool, // true = implicit TLS, false = STARTTLS
    pub smtp_username: String,
    pub smtp_password: String,
    pub email_from: String,
    pub email_to: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            smtp_host: env::var("EMAIL_HOST").expect("EMAIL_HOST must be set"),
            smtp_port: env::var("EMAIL_PORT").unwrap_or_else(|_| "587".to_string()).parse().expect("EMAIL_PORT must be a number"),
            smtp_secure: env::var("EMAIL_SECURE").map(|v| v == "true").unwrap_or(false),
            smtp_username: env::var("EMAIL_USER").expect("EMAIL_USER must be set"),
            smtp_password: env::var("EMAIL_PASSWORD").expect("EMAIL_PASSWORD must be set"),
            email_from: env::var("EMAIL_FROM").expect("EMAIL_FROM must be set"),
            email_to: env::var("EMAIL_TO").expect("EMAIL_TO must be set"),
        }
    }
}
