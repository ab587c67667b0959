//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 바인딩 주소와 보호 경로 테이블을 보기 좋게 출력합니다.

use crate::config::GuardConfig;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  CMDOLA WEB                      ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 들여쓰기된 트리 항목을 출력합니다
///
/// ```text
///    ├─ /admin: admin
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 보호 경로 테이블 한 줄 요약 (역할 목록이 비면 "로그인만 필요")
pub fn describe_rule_roles(roles: &[&str]) -> String {
    if roles.is_empty() {
        "로그인만 필요".to_string()
    } else {
        roles.join(", ")
    }
}

/// 가드 설정을 출력합니다
pub fn print_guard_table(config: &GuardConfig) {
    print_boxed_title("🛡️ ROUTE GUARD");
    print_sub_task("쿠키", &config.cookie_name);
    print_sub_task("로그인 페이지", &config.login_page);

    for rule in &config.routes {
        let roles: Vec<&str> = rule.allowed_roles.iter().map(String::as_str).collect();
        print_sub_task(&rule.prefix, &describe_rule_roles(&roles));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_rule_roles() {
        assert_eq!(describe_rule_roles(&["admin", "chef"]), "admin, chef");
        assert_eq!(describe_rule_roles(&[]), "로그인만 필요");
    }
}
