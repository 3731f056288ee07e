use actix_web::{http::header::ContentType, web, HttpResponse};
use restaurant_bridge::{Escaping, Restaurant, RestaurantJsonEncoder};

pub(super) struct ApiState {
    encoder: RestaurantJsonEncoder,
}

impl ApiState {
    pub(super) fn new(escaping: Escaping) -> Self {
        Self {
            encoder: RestaurantJsonEncoder::new(escaping),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

#[derive(serde::Deserialize)]
pub(super) struct EncodeQuery {
    // parsed with `Escaping::from_str` so it matches the config rules
    escaping: Option<String>,
}

#[actix_web::post("/api/v1/restaurants/encode")]
pub(super) async fn encode(
    data: web::Data<ApiState>,
    query: web::Query<EncodeQuery>,
    body: web::Bytes,
) -> HttpResponse {
    let restaurant = match Restaurant::from_slice(&body) {
        Ok(restaurant) => restaurant,
        Err(err) => {
            tracing::warn!("rejected restaurant payload: {err:#}");
            return HttpResponse::BadRequest().json(ErrJsonResp {
                message: format!("{err:#}"),
            });
        }
    };

    let encoder = match query.escaping.as_deref().map(str::parse::<Escaping>) {
        None => data.encoder,
        Some(Ok(escaping)) => RestaurantJsonEncoder::new(escaping),
        Some(Err(err)) => {
            return HttpResponse::BadRequest().json(ErrJsonResp {
                message: format!("{err:#}"),
            })
        }
    };
    tracing::info!(restaurant = %restaurant.id, escaping = ?encoder.escaping(), "encode request");

    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(encoder.encode(&restaurant))
}

#[actix_web::get("/api/v1/health")]
pub(super) async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
