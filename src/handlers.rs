use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    dto::{HealthResponse, MoleculeRequest, SpectroscopyResponse},
    service,
    state::{AppState, SpectraBackend},
};

pub fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    Router::new()
        .route("/", get(health_handler))
        .route("/spectroscopy", post(spectroscopy_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}

pub async fn spectroscopy_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoleculeRequest>,
) -> service::Result<Json<SpectroscopyResponse>> {
    let molecule = request.molecule.trim();
    if molecule.is_empty() {
        return Err(service::Error::BadRequest("molecule is required".into()));
    }

    match &state.backend {
        SpectraBackend::Dummy => {
            tracing::info!("Serving dummy spectra for '{}'", molecule);
            Ok(Json(SpectroscopyResponse::dummy(molecule)))
        }
        SpectraBackend::OpenAi { client, revision } => {
            tracing::info!(
                "Requesting spectra for '{}' from {} (prompt revision {})",
                molecule,
                client.model(),
                revision.number()
            );
            let prompt = revision.render(molecule);
            let spectra_markdown = client.complete(&prompt).await?;
            Ok(Json(SpectroscopyResponse::delegated(molecule, spectra_markdown)))
        }
    }
}
