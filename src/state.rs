use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::Mailer;
use crate::infra::translations::TranslationCatalog;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
    pub translations: Arc<TranslationCatalog>,
}
