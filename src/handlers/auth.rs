//! Authentication HTTP Handlers
//!
//! 로그인과 로그아웃 엔드포인트입니다. 두 엔드포인트 모두 인증 미들웨어 밖에 있습니다.
//!
//! - `POST /api/v1/auth/login` - 사용자명/이메일 + 비밀번호 로그인
//! - `POST /api/v1/auth/logout` - 리프레시 토큰의 세션 삭제
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::auth::{LoginRequest, LogoutRequest};
use crate::domain::dto::tokens::ApiResponse;
use crate::domain::models::auth::ClientMetadata;
use crate::services::auth::AuthService;

/// 로그인 핸들러
///
/// 자격 증명을 확인하고 액세스/리프레시 토큰 쌍을 발급합니다.
/// 요청의 User-Agent와 클라이언트 IP가 세션에 기록됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// # Errors
///
/// * 400 - 요청 본문 검증 실패
/// * 401 `invalid_credentials` - 사용자 없음 또는 비밀번호 불일치
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let client = ClientMetadata::from_http_request(&req);

    let response = auth_service
        .login_with_password(&payload.username_or_email, &payload.password, client)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/logout`
#[post("/logout")]
pub async fn logout(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    auth_service.logout(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("로그아웃이 성공적으로 처리되었습니다")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use crate::repositories::sessions::SessionStore;
    use crate::services::auth::testing::fixture;
    use crate::services::auth::TokenCodec;

    #[actix_web::test]
    async fn test_login_returns_token_pair() {
        let f = fixture();
        let codec = f.codec.clone();
        let store = f.store.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.service))
                .service(web::scope("/api/v1/auth").service(login)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("User-Agent", "tinygram-android/3.0"))
            .insert_header(("X-Real-IP", "203.0.113.5"))
            .set_json(serde_json::json!({
                "username_or_email": "robot",
                "password": "secret-password",
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let access_token = body["access_token"].as_str().unwrap();
        let session_id = body["session_id"].as_str().unwrap().parse().unwrap();
        assert_eq!(codec.verify(access_token).unwrap().user_id, "user-1");

        let session = store.get(&session_id).await.unwrap();
        assert_eq!(session.refresh_token, body["refresh_token"].as_str().unwrap());
        assert_eq!(session.user_agent, "tinygram-android/3.0");
        assert_eq!(session.client_ip, "203.0.113.5");
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_input() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.service))
                .service(web::scope("/api/v1/auth").service(login)),
        )
        .await;

        let wrong_password = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "username_or_email": "robot",
                "password": "not-the-password",
            }))
            .to_request();
        let resp = test::call_service(&app, wrong_password).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_credentials");

        let short_password = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "username_or_email": "robot",
                "password": "short",
            }))
            .to_request();
        let resp = test::call_service(&app, short_password).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_logout_removes_session() {
        let f = fixture();
        let issued = f.service.login("user-1", crate::services::auth::testing::client()).await.unwrap();
        let store = f.store.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(f.service))
                .service(web::scope("/api/v1/auth").service(logout)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": issued.refresh_token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.len().unwrap(), 0);

        let again = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": issued.refresh_token }))
            .to_request();
        let resp = test::call_service(&app, again).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
