use super::authenticated_user::AuthenticatedUser;

/// 라우트 가드의 판정 결과
///
/// 가드는 이 값만 만들고, 응답 변환은 미들웨어가 담당합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// 검사 없이 통과 (정적 파일, 로그인 페이지, 비보호 경로)
    Continue,
    /// 통과하면서 확인된 사용자 정보를 전달
    ContinueWithIdentity(AuthenticatedUser),
    /// 302 리다이렉트
    RedirectTo(String),
    /// 토큰 쿠키를 지우고 302 리다이렉트
    ClearCredentialAndRedirect(String),
}

impl GuardDecision {
    /// 요청을 다음 서비스로 넘기는 결정인지 여부
    pub fn is_continue(&self) -> bool {
        matches!(self, GuardDecision::Continue | GuardDecision::ContinueWithIdentity(_))
    }
}
