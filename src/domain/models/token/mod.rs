//! 토큰 도메인 모델

pub mod payload;

pub use payload::*;
