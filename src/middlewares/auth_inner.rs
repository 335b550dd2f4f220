//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::config::AuthHeaderConfig;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::Payload;
use crate::services::auth::{AuthError, TokenCodec, TokenError};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub codec: Arc<dyn TokenCodec>,
    pub config: Rc<AuthHeaderConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let codec = self.codec.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let header = match req.headers().get(config.header_name.as_str()) {
                None => Ok(None),
                Some(value) => value.to_str().map(Some).map_err(|_| AuthError::MalformedHeader),
            };

            let result = header.and_then(|header| authorize(header, &config.scheme, codec.as_ref()));

            match result {
                Ok(payload) => {
                    log::debug!("인증 성공: 사용자 ID {}", payload.user_id);
                    req.extensions_mut().insert(AuthenticatedUser::from_payload(payload));
                }
                Err(err) => {
                    log_rejection(&req, &err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 인증 헤더 값을 검사하고 토큰을 검증합니다.
///
/// 첫 실패에서 멈추며, 각 단계는 서로 다른 에러로 구분됩니다.
///
/// 1. 헤더 없음, 또는 값이 비어 있거나 공백뿐 → `MissingHeader`
/// 2. 공백 기준 필드가 2개 미만 → `MalformedHeader`
/// 3. 첫 필드가 설정된 스킴과 다름 (대소문자 무관) → `UnsupportedScheme`
/// 4. 두 번째 필드 검증 실패 → `Token(..)`
pub fn authorize(header: Option<&str>, scheme: &str, codec: &dyn TokenCodec) -> Result<Payload, AuthError> {
    let header = header
        .filter(|value| !value.trim().is_empty())
        .ok_or(AuthError::MissingHeader)?;

    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(AuthError::MalformedHeader);
    }

    if !fields[0].eq_ignore_ascii_case(scheme) {
        return Err(AuthError::UnsupportedScheme(fields[0].to_lowercase()));
    }

    Ok(codec.verify(fields[1])?)
}

fn log_rejection(req: &ServiceRequest, err: &AuthError) {
    match err {
        AuthError::Token(TokenError::ExpiredToken) => {
            log::warn!("인증 실패: 만료된 토큰 ({} {})", req.method(), req.path());
        }
        AuthError::Token(TokenError::InvalidToken) => {
            log::warn!("인증 실패: 유효하지 않은 토큰 ({} {})", req.method(), req.path());
        }
        other => {
            log::warn!("인증 실패: {} ({} {})", other, req.method(), req.path());
        }
    }
}
