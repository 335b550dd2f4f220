//! 시작 과정 터미널 출력
//!
//! `ServiceLocator::initialize_all`이 리포지토리/서비스 생성 단계를 표시할 때 사용합니다.
//! 각 출력 함수는 문자열을 만드는 `format_*` 함수와 짝을 이루어 형식만 따로 검증할 수 있습니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║         🔄 INITIALIZING SERVICE REGISTRY          ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Creating Repository instances
//!    ├─ session_repository: ✓ Created
//!    ├─ session_repository: ✓ Initialized
//! ✓ Step 1: Repository instances created (2 items)
//! ```

const BOX_WIDTH: usize = 50;

/// 박스 제목 (내부 폭 50칸, 가운데 정렬)
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝", width = BOX_WIDTH - 1)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn format_step_complete(step: u8, description: &str, count: usize) -> String {
    let unit = if count == 1 { "item" } else { "items" };
    format!("✓ Step {}: {} ({} {})", step, description, count, unit)
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("{}", format_step_complete(step, description, count));
}

/// 트리 형태의 하위 작업 한 줄
///
/// ```text
///    ├─ user_repository: ✓ Created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 이름 캐시 구성 결과 (`Repository`, `Service`)
pub fn print_registry_indexed(kind: &str, count: usize) {
    println!("   ├─ {} registry: {} names indexed", kind, count);
}

/// 초기화 요약
///
/// # Arguments
///
/// * `repos` - 생성된 리포지토리 수
/// * `services` - 생성된 서비스 수
pub fn format_final_summary(repos: usize, services: usize) -> String {
    format!(
        "{}\n   📦 Repositories: {}\n   🔧 Services: {}\n   🚀 Total Components: {}",
        format_boxed_title("🎉 SERVICE REGISTRY INITIALIZED"),
        repos,
        services,
        repos + services
    )
}

pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    println!("{}", format_final_summary(repos, services));
    println!();
}
