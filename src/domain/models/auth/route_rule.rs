use std::collections::BTreeSet;

/// 보호 경로 규칙
///
/// 요청 경로가 `prefix`와 같거나 `prefix + "/"`로 시작하면 매칭됩니다.
/// `allowed_roles` 중 하나라도 가진 사용자만 통과합니다.
/// 역할 집합이 비어 있으면 유효한 토큰 보유 여부만 확인합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRule {
    pub prefix: String,
    pub allowed_roles: BTreeSet<String>,
}

impl RouteRule {
    pub fn new(prefix: &str, roles: &[&str]) -> Self {
        Self {
            prefix: prefix.to_string(),
            allowed_roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// 경로 세그먼트 단위로 prefix가 일치하는지 확인
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// 사용자 역할이 이 규칙을 만족하는지 확인 (OR 조건)
    pub fn admits(&self, user_roles: &BTreeSet<String>) -> bool {
        self.allowed_roles.is_empty() || !self.allowed_roles.is_disjoint(user_roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let rule = RouteRule::new("/cuisine", &["admin", "chef"]);

        assert!(rule.matches("/cuisine"));
        assert!(rule.matches("/cuisine/"));
        assert!(rule.matches("/cuisine/commandes/12"));
        assert!(!rule.matches("/cuisines"));
        assert!(!rule.matches("/admin/cuisine"));
    }

    #[test]
    fn test_admits_any_listed_role() {
        let rule = RouteRule::new("/cuisine", &["admin", "chef"]);
        let chef: BTreeSet<String> = ["chef".to_string()].into_iter().collect();
        let livreur: BTreeSet<String> = ["livreur".to_string()].into_iter().collect();

        assert!(rule.admits(&chef));
        assert!(!rule.admits(&livreur));
        assert!(!rule.admits(&BTreeSet::new()));
    }

    #[test]
    fn test_empty_role_set_admits_everyone() {
        let rule = RouteRule::new("/admin", &[]);

        assert!(rule.admits(&BTreeSet::new()));
    }
}
