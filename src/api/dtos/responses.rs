use serde::Serialize;

#[derive(Serialize)]
pub struct RsvpAccepted {
    pub success: bool,
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<&'static str>,
}
