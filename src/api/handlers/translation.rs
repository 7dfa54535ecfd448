use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::responses::LanguagesResponse;
use crate::domain::models::translation::Language;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_languages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(LanguagesResponse {
        languages: state.translations.languages(),
    })
}

pub async fn get_translation(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let language = Language::parse(&lang)
        .ok_or_else(|| AppError::NotFound(format!("Unknown language: {}", lang)))?;

    let bundle = state
        .translations
        .get(language)
        .ok_or_else(|| AppError::NotFound(format!("Unknown language: {}", lang)))?;

    Ok(Json(bundle.clone()))
}
