use std::sync::Arc;

use crate::config::Config;
use crate::infra::email::smtp_mailer::SmtpMailer;
use crate::infra::translations::TranslationCatalog;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    let mailer = Arc::new(
        SmtpMailer::new(config).expect("Failed to configure SMTP transport"),
    );
    let translations = Arc::new(
        TranslationCatalog::load().expect("Failed to parse translation bundles"),
    );

    AppState {
        config: config.clone(),
        mailer,
        translations,
    }
}
