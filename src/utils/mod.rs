//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`client_info`] - 요청 헤더에서 클라이언트 IP와 User-Agent 추출
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::client_info::extract_client_ip;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let ip = extract_client_ip(&req);
//! print_boxed_title("System Initialized");
//! ```

pub mod client_info;
pub mod display_terminal;
