use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

/// Height in centimeters, weight in kilograms.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct CalculateBmiRequest {
    #[validate(range(exclusive_min = 0.0, message = "Invalid height or weight"))]
    pub height: f64,
    #[validate(range(exclusive_min = 0.0, message = "Invalid height or weight"))]
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBmiResponse {
    pub success: bool,
    pub bmi: f64,
    pub category: String,
    pub status: String,
    pub health_risk: String,
}

struct BmiAssessment {
    category: &'static str,
    status: &'static str,
    health_risk: &'static str,
}

fn assess(bmi: f64) -> BmiAssessment {
    if bmi < 18.5 {
        BmiAssessment {
            category: "Underweight",
            status: "You are underweight. Consider eating more nutritious foods.",
            health_risk: "low",
        }
    } else if bmi < 25.0 {
        BmiAssessment {
            category: "Normal",
            status: "You have a healthy weight. Maintain your current lifestyle!",
            health_risk: "minimal",
        }
    } else if bmi < 30.0 {
        BmiAssessment {
            category: "Overweight",
            status: "You are overweight. Consider a balanced diet and exercise.",
            health_risk: "medium",
        }
    } else {
        BmiAssessment {
            category: "Obese",
            status: "You are obese. Please consult a healthcare professional.",
            health_risk: "high",
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[utoipa::path(
    post,
    path = "/calculate-bmi",
    tag = "ml",
    summary = "Calculate BMI",
    description = "Body mass index with category and health-risk assessment",
    request_body = CalculateBmiRequest,
    responses(
        (status = 200, body = CalculateBmiResponse),
        (status = 400, description = "Non-positive height or weight")
    )
)]
pub async fn calculate_bmi(
    Json(request): Json<CalculateBmiRequest>,
) -> Result<Response<CalculateBmiResponse>, ApiError> {
    request
        .validate()
        .map_err(|_| ApiError::BadRequest("Invalid height or weight".to_string()))?;

    let height_m = request.height / 100.0;
    let bmi = round2(request.weight / (height_m * height_m));
    let assessment = assess(bmi);

    Ok(Response::OK(CalculateBmiResponse {
        success: true,
        bmi,
        category: assessment.category.to_string(),
        status: assessment.status.to_string(),
        health_risk: assessment.health_risk.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_example_is_normal() {
        // height 170 cm, weight 70 kg
        let bmi = round2(70.0 / (1.7 * 1.7));
        assert_eq!(bmi, 24.22);
        assert_eq!(assess(bmi).category, "Normal");
    }

    #[test]
    fn categories_split_at_the_documented_cutoffs() {
        assert_eq!(assess(18.49).category, "Underweight");
        assert_eq!(assess(18.5).category, "Normal");
        assert_eq!(assess(24.99).category, "Normal");
        assert_eq!(assess(25.0).category, "Overweight");
        assert_eq!(assess(30.0).category, "Obese");
    }

    #[test]
    fn non_positive_input_fails_validation() {
        assert!(
            CalculateBmiRequest {
                height: 0.0,
                weight: 70.0
            }
            .validate()
            .is_err()
        );
        assert!(
            CalculateBmiRequest {
                height: 170.0,
                weight: -1.0
            }
            .validate()
            .is_err()
        );
        assert!(
            CalculateBmiRequest {
                height: 170.0,
                weight: 70.0
            }
            .validate()
            .is_ok()
        );
    }
}
