//! 열공정 계산 엔진. 감온기 분사수량, 수증기/NCG 혼합물 물성, 펌프 NPSH 계산을
//! 라이브러리로 분리하여 CLI 외의 호출자(보고서, 저장 계층)도 같은 결과 타입을 쓰게 한다.
//!
//! 모든 계산기는 입력과 [`steam::SteamProperties`] 조회만으로 결정되는 순수 함수이며
//! 호출 간 공유 상태가 없다.

pub mod app;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod desuperheating;
pub mod error;
pub mod ncg;
pub mod pump_npsh;
pub mod steam;
pub mod ui_cli;
pub mod units;
pub mod warning;

pub use error::{CalcError, CalcResult, PropertyError};
pub use warning::{Warning, WarningCategory};
