use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::config::AppConfig;
use crate::models::system::responses::SystemStatusResponse;
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

pub async fn get_status(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let Some(start_time) = request.app_data::<web::Data<AppStartTime>>() else {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Start time not found in app data",
            )),
        );
    };

    let now = chrono::Utc::now();
    let response = SystemStatusResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        start_time: start_time.start_datetime,
        uptime_seconds: now
            .signed_duration_since(start_time.start_datetime)
            .num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "System status loaded")))
}
