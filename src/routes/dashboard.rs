use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

// HTTP处理程序
pub async fn get_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_dashboard(&req).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/dashboard").route("", web::get().to(get_dashboard)));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};

    use super::*;
    use crate::storage::testing::{FailingStorage, MemStorage};
    use crate::storage::Storage;

    #[actix_web::test]
    async fn test_dashboard_route_returns_stats() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_dashboard_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/dashboard")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["stats"]["total_students"], 0);
        assert_eq!(body["data"]["stats"]["today_attendance"]["percentage"], 0.0);
    }

    #[actix_web::test]
    async fn test_dashboard_route_fails_with_generic_error() {
        // 任一集合读取失败，整屏失败并提示重试
        let storage: Arc<dyn Storage> = Arc::new(FailingStorage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_dashboard_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/dashboard")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Failed to load dashboard data. Please try again."
        );
    }
}
