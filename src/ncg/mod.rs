//! 수증기/비응축성 기체(NCG) 혼합물 물성 계산 모듈.
//! 혼합물 열역학 물성, 수송 물성 혼합 규칙, 해수 용존 기체 용해도로 구성한다.

pub mod calculator;
pub mod solubility;
pub mod transport;

pub use calculator::{
    NcgCalculator, NcgFlowBreakdown, NcgInput, NcgMode, NcgPressure, NcgResult,
};
pub use solubility::{dissolved_gases, DissolvedGas, SolubilityRange};
