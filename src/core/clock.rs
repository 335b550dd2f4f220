//! 시간 소스 추상화
//!
//! 토큰 발급/검증과 세션 만료 판단은 모두 "현재 시각"에 의존합니다.
//! 운영 환경에서는 [`SystemClock`]을, 테스트에서는 [`ManualClock`]을 주입하여
//! 만료 시나리오를 실제로 기다리지 않고 재현합니다.

use chrono::{DateTime, Utc};

/// 현재 시각을 제공하는 시계
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 벽시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_manual_clock_advance() {
        let start = Utc::now();
        let clock = ManualClock::new(start);

        assert_eq!(clock.now(), start);
        clock.advance(Duration::minutes(20));
        assert_eq!(clock.now(), start + Duration::minutes(20));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
