//! 路径参数提取器
//!
//! 把 `/{id}` 解析为正整数，解析失败直接返回 400 JSON 响应，
//! 业务处理函数拿到的一定是合法 ID。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 合法的 i64 路径 ID（> 0）
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        let parsed = raw.parse::<i64>().ok().filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => {
                let message = format!("Invalid id in path: '{raw}'");
                let response = HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, message.as_str()));
                Err(InternalError::from_response(message, response).into())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id_is_extracted() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_rejected() {
        let req = TestRequest::default()
            .param("id", "abc")
            .to_http_request();
        assert!(
            SafeIDI64::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );
    }

    #[actix_web::test]
    async fn test_non_positive_id_is_rejected() {
        let req = TestRequest::default().param("id", "0").to_http_request();
        assert!(
            SafeIDI64::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );
    }
}
