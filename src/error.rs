//! 계산 엔진의 오류 정의.

use thiserror::Error;

/// 계산 결과 타입.
pub type CalcResult<T> = Result<T, CalcError>;

/// 물성 제공자가 상태를 평가하지 못한 경우의 오류.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("property evaluation failed: {message}")]
pub struct PropertyError {
    pub message: String,
}

impl PropertyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 계산기 오류. 모두 호출자 입력 문제이며 재시도 대상이 아니다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 물리적으로 불가능하거나 정의역을 벗어난 입력. 메시지는 위반한 제약을 명시한다.
    #[error("validation error: {0}")]
    Validation(String),

    /// 증기/물 물성 조회 실패
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl CalcError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        CalcError::Validation(msg.into())
    }
}
