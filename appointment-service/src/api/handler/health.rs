use axum::Json;
use shared::responses::HeadpatResponse;

pub async fn headpat() -> Json<HeadpatResponse> {
    Json(HeadpatResponse::healthy("appointment-service"))
}
