//! 터미널 출력 포맷팅 유틸리티
//!
//! 데모 바이너리의 레지스트리 조립 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 요약 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// use entity_registry::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("Registry Ready");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Registry Ready                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 박스 제목 문자열을 만듭니다 (고정 너비 50칸)
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(50);
    format!("╔{border}╗\n║{title:^50}║\n╚{border}╝")
}

/// 진행 단계 시작을 표시합니다
///
/// Output:
/// ```text
/// → Step 1: Binding contracts
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// 처리된 항목 수를 함께 표시합니다.
///
/// Output:
/// ```text
/// ✓ Step 1: Contracts bound (3 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// Output:
/// ```text
///    ├─ dyn Board: BoardModel
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", sub_task(name, status));
}

pub fn sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 레지스트리 조립 완료 후 요약 정보를 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 ENTITY REGISTRY RESOLVED           ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Singletons: 1
///    🔧 Instances: 4
///    ⏳ Pending injections: 0
/// ```
pub fn print_final_summary(singletons: usize, instances: usize, pending: usize) {
    println!();
    print_boxed_title("🎉 ENTITY REGISTRY RESOLVED");
    println!("   📦 Singletons: {}", singletons);
    println!("   🔧 Instances: {}", instances);
    println!("   ⏳ Pending injections: {}", pending);
    println!();
}
