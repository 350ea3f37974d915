//! REST API endpoints for page analysis

use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::{AnalysisResult, DeceptionFinding, PageSnapshot, ScoringProfile};
use crate::service::AnalysisService;

/// Response envelope for a page analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// URL the snapshot was captured from
    pub url: String,
    /// Analysis timestamp (RFC 3339)
    pub timestamp: String,
    /// Which path produced the result: "llm" or "rule-based"
    pub model: String,
    pub analysis: AnalysisResult,
}

/// Request body for the text-only endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeceptionResponse {
    pub deception_indicators: Vec<DeceptionFinding>,
    /// Total occurrences across all patterns, not just distinct patterns.
    pub total_matches: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplianceResponse {
    pub ferpa_compliance: Vec<String>,
    pub gdpr_compliance: Vec<String>,
    pub issue_count: usize,
}

/// Effective analysis configuration, as served to clients
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub scoring_profile: ScoringProfile,
    pub max_text_length: usize,
    pub classifier_timeout_secs: u64,
    pub classifier_available: bool,
}

/// Analyze a captured page snapshot
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = PageSnapshot,
    responses(
        (status = 200, description = "Analysis completed", body = AnalyzeResponse),
        (status = 400, description = "Invalid snapshot"),
        (status = 500, description = "Internal server error")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze")]
pub async fn analyze(
    service: web::Data<AnalysisService>,
    snapshot: web::Json<PageSnapshot>,
) -> Result<HttpResponse, ApiError> {
    let snapshot = snapshot.into_inner();
    if snapshot.url.trim().is_empty() {
        return Err(ApiError::BadRequest("url must not be empty".to_string()));
    }

    let url = snapshot.url.clone();
    let (analysis, model) = service.analyze(snapshot).await;

    tracing::info!(
        url = %url,
        model = model.as_str(),
        risk_score = analysis.risk_score,
        recommendation = %analysis.recommendation,
        "Page analysis completed"
    );

    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        url,
        timestamp: Utc::now().to_rfc3339(),
        model: model.as_str().to_string(),
        analysis,
    }))
}

/// Detect deceptive language patterns in free text
#[utoipa::path(
    post,
    path = "/v1/deception",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Deception scan completed", body = DeceptionResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "analysis"
)]
#[post("/v1/deception")]
pub async fn deception(
    service: web::Data<AnalysisService>,
    request: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let deception_indicators = service.detect_deception(&request.text);
    let total_matches = deception_indicators.iter().map(|f| f.matches).sum();
    Ok(HttpResponse::Ok().json(DeceptionResponse {
        deception_indicators,
        total_matches,
    }))
}

/// Run FERPA and GDPR compliance checks over free text
#[utoipa::path(
    post,
    path = "/v1/compliance",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Compliance scan completed", body = ComplianceResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "analysis"
)]
#[post("/v1/compliance")]
pub async fn compliance(
    service: web::Data<AnalysisService>,
    request: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let (ferpa_compliance, gdpr_compliance) = service.check_compliance(&request.text);
    let issue_count = ferpa_compliance.len() + gdpr_compliance.len();
    Ok(HttpResponse::Ok().json(ComplianceResponse {
        ferpa_compliance,
        gdpr_compliance,
        issue_count,
    }))
}

/// Report the effective analysis configuration
#[utoipa::path(
    get,
    path = "/v1/config",
    responses(
        (status = 200, description = "Effective configuration", body = ConfigResponse)
    ),
    tag = "analysis"
)]
#[get("/v1/config")]
pub async fn config_view(service: web::Data<AnalysisService>) -> HttpResponse {
    let config = service.config();
    HttpResponse::Ok().json(ConfigResponse {
        scoring_profile: config.scoring_profile,
        max_text_length: config.max_text_length,
        classifier_timeout_secs: config.classifier_timeout_secs,
        classifier_available: service.classifier_available(),
    })
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze)
        .service(deception)
        .service(compliance)
        .service(config_view);
}

/// OpenAPI documentation for the analysis API
#[derive(OpenApi)]
#[openapi(
    paths(
        analyze,
        deception,
        compliance,
        config_view,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(
        PageSnapshot,
        crate::model::Form,
        crate::model::Field,
        crate::model::Image,
        crate::model::RiskIndicator,
        crate::model::IndicatorKind,
        crate::model::RiskLevel,
        AnalysisResult,
        crate::model::Recommendation,
        DeceptionFinding,
        AnalyzeResponse,
        TextRequest,
        DeceptionResponse,
        ComplianceResponse,
        ConfigResponse,
        ScoringProfile,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth
    )),
    tags(
        (name = "analysis", description = "Page risk analysis endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
