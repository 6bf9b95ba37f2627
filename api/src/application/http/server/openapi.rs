use crate::application::http::{
    bmi::router::BmiApiDoc, health::router::HealthApiDoc,
    recommendation::router::RecommendationApiDoc, suitability::router::SuitabilityApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Olive ML API",
        description = "Health-based food recommendation service"
    ),
    nest(
        (path = "/api/ml", api = RecommendationApiDoc),
        (path = "/api/ml", api = SuitabilityApiDoc),
        (path = "/api/ml", api = BmiApiDoc),
        (path = String::new(), api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
