//! 토큰 페이로드에서 추출한 신원 클레임
//!
//! 발급자(CMDOLA API)가 서명한 토큰의 두 번째 세그먼트를 그대로 읽은 값입니다.
//! 서명은 검증하지 않으므로 화면 표시와 라우팅 판단에만 사용합니다.
//! 실제 권한 검증은 API가 매 요청마다 수행합니다.

use std::collections::BTreeSet;

use serde_json::Value;

use super::authenticated_user::AuthenticatedUser;

/// 사용자명이 없을 때 사용하는 값
pub const UNKNOWN_IDENTITY: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityClaims {
    pub username: Option<String>,
    pub roles: BTreeSet<String>,
    pub name: Option<String>,
    pub restaurant: Option<String>,
    /// 만료 시각 (Unix timestamp, 초)
    pub exp: Option<i64>,
}

impl IdentityClaims {
    /// JSON 페이로드에서 클레임을 관대하게 추출합니다.
    ///
    /// 객체가 아닌 페이로드는 빈 클레임으로 취급합니다.
    /// `roles`가 배열이 아니면 빈 집합, 문자열이 아닌 원소는 무시합니다.
    /// `restaurant`는 문자열 또는 `id`를 가진 객체를 허용합니다.
    pub fn from_payload(payload: &Value) -> Self {
        let roles = payload
            .get("roles")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let restaurant = match payload.get("restaurant") {
            Some(Value::Object(map)) => map.get("id").and_then(non_empty_str),
            Some(other) => non_empty_str(other),
            None => None,
        };

        let exp = payload.get("exp").and_then(timestamp_value);

        Self {
            username: payload.get("username").and_then(non_empty_str),
            roles,
            name: payload.get("name").and_then(non_empty_str),
            restaurant,
            exp,
        }
    }

    /// 만료 여부를 확인합니다.
    ///
    /// `exp`가 없거나 0이면 만료되지 않은 것으로 봅니다.
    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.exp, Some(exp) if exp != 0 && exp < now)
    }

    /// 로그에 사용할 사용자명 (없으면 `unknown`)
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or(UNKNOWN_IDENTITY)
    }

    /// 다운스트림 핸들러에 넘길 사용자 정보로 변환합니다.
    pub fn into_user(self) -> AuthenticatedUser {
        let username = self.username.unwrap_or_else(|| UNKNOWN_IDENTITY.to_string());

        AuthenticatedUser {
            name: self.name.unwrap_or_else(|| username.clone()),
            restaurant: self.restaurant.unwrap_or_else(|| UNKNOWN_IDENTITY.to_string()),
            username,
            roles: self.roles,
        }
    }
}

/// 숫자 또는 숫자 문자열(`"1700000000"`)을 초 단위 timestamp로 읽습니다.
fn timestamp_value(value: &Value) -> Option<i64> {
    let seconds = match value {
        Value::Number(n) => return n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    seconds.is_finite().then(|| seconds.floor() as i64)
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
