//! 요청 클라이언트 정보 추출 유틸리티

use actix_web::HttpRequest;

/// 클라이언트 IP 주소를 추출합니다.
///
/// 프록시 환경을 고려하여 다음 순서로 확인합니다.
///
/// 1. `X-Forwarded-For` (첫 번째 IP)
/// 2. `X-Real-IP`
/// 3. `X-Client-IP`
/// 4. `CF-Connecting-IP` (Cloudflare)
/// 5. 연결 peer 주소
pub fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded_for) = header_value(req, "X-Forwarded-For") {
        // 체인의 첫 번째가 원본 클라이언트
        if let Some(first_ip) = forwarded_for.split(',').next() {
            let trimmed_ip = first_ip.trim();
            if !trimmed_ip.is_empty() {
                return Some(trimmed_ip.to_string());
            }
        }
    }

    for name in ["X-Real-IP", "X-Client-IP", "CF-Connecting-IP"] {
        if let Some(ip) = header_value(req, name) {
            return Some(ip.to_string());
        }
    }

    req.peer_addr().map(|peer_addr| peer_addr.ip().to_string())
}

/// `User-Agent` 헤더 값을 추출합니다.
pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    header_value(req, "User-Agent").map(|s| s.to_string())
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|h| h.to_str().ok())
}
