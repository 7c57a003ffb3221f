//! 계산을 막지 않는 경고(advisory) 정의.

use serde::Serialize;
use std::fmt;

/// 경고 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    /// 분사수 플래싱 위험
    Flashing,
    /// 노즐 사이징 재검토 필요
    Sizing,
    /// 포화 경계 근접
    Saturation,
    /// 상관식 적용 범위 밖 외삽
    Extrapolation,
    /// 펌프 공동현상 위험
    Cavitation,
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningCategory::Flashing => "flashing",
            WarningCategory::Sizing => "sizing",
            WarningCategory::Saturation => "saturation",
            WarningCategory::Extrapolation => "extrapolation",
            WarningCategory::Cavitation => "cavitation",
        };
        f.write_str(name)
    }
}

/// 결과에 함께 실리는 비치명적 경고.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub category: WarningCategory,
    pub message: String,
}

impl Warning {
    pub fn new(category: WarningCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// 계산 중 경고를 누적하고 로그로도 남긴다.
pub(crate) fn push(warnings: &mut Vec<Warning>, category: WarningCategory, message: impl Into<String>) {
    let warning = Warning::new(category, message);
    tracing::warn!(category = %warning.category, "{}", warning.message);
    warnings.push(warning);
}
