//! 토큰 페이로드 디코더
//!
//! JWT 형식 토큰의 두 번째 세그먼트(base64url JSON)를 로컬에서 읽습니다.
//! 서명은 검증하지 않습니다. 토큰 발급과 검증은 CMDOLA API의 책임이며,
//! 여기서 읽은 클레임은 라우팅 판단과 화면 표시에만 사용됩니다.
//!
//! ```text
//! header.payload.signature
//!        ^^^^^^^
//!        base64url → UTF-8 → JSON
//! ```

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde_json::Value;

use crate::domain::models::auth::IdentityClaims;
use crate::errors::GuardError;

/// 패딩 유무와 남는 비트를 모두 허용하는 표준 알파벳 엔진
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// 첫 번째와 두 번째 `.` 사이의 세그먼트를 반환합니다.
pub fn payload_segment(token: &str) -> Option<&str> {
    token.split('.').nth(1).filter(|segment| !segment.is_empty())
}

/// 토큰 페이로드를 JSON 값으로 디코딩합니다.
///
/// # Errors
///
/// * `GuardError::MalformedToken` - 세그먼트 없음, base64/UTF-8/JSON 오류,
///   또는 `null`/`false`/`0`/`""` 같은 빈 페이로드
pub fn decode_payload(token: &str) -> Result<Value, GuardError> {
    let segment = payload_segment(token)
        .ok_or_else(|| GuardError::MalformedToken("payload segment is missing".to_string()))?;

    // base64url 알파벳을 표준 알파벳으로 변환
    let standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = FORGIVING_STANDARD
        .decode(standard.as_bytes())
        .map_err(|e| GuardError::MalformedToken(format!("base64: {}", e)))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| GuardError::MalformedToken(format!("utf-8: {}", e)))?;

    let payload: Value = serde_json::from_str(&text)
        .map_err(|e| GuardError::MalformedToken(format!("json: {}", e)))?;

    if is_empty_payload(&payload) {
        return Err(GuardError::MalformedToken("payload is empty".to_string()));
    }

    Ok(payload)
}

/// 토큰에서 신원 클레임을 추출합니다.
pub fn decode_claims(token: &str) -> Result<IdentityClaims, GuardError> {
    decode_payload(token).map(|payload| IdentityClaims::from_payload(&payload))
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
