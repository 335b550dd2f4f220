use actix_web::HttpRequest;
use crate::utils::client_info::{extract_client_ip, extract_user_agent};

/// 로그인 요청의 클라이언트 정보
///
/// 세션 레코드에 함께 저장되며 인증 판단에는 사용되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMetadata {
    pub user_agent: String,
    pub client_ip: String,
}

impl ClientMetadata {
    pub fn from_http_request(req: &HttpRequest) -> Self {
        Self {
            user_agent: extract_user_agent(req).unwrap_or_default(),
            client_ip: extract_client_ip(req).unwrap_or_default(),
        }
    }
}
