//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응하는 문서 구조체를 정의합니다.
//!
//! - **BSON 매핑**: `_id` 필드와 `bson::DateTime` 사용
//! - **도메인 변환**: 서비스 계층은 `models`의 값 객체만 다루며, 변환은 리포지토리에서 수행
//!
//! ```text
//! entities/
//! ├── sessions/   ← sessions 컬렉션 (SessionDocument)
//! └── users/      ← users 컬렉션 (User, 자격 증명 조회 전용)
//! ```

pub mod sessions;
pub mod users;
