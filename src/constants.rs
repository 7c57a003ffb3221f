//! 계산 모듈 전반에서 공유하는 물리 상수.

/// 중력가속도 [m/s²]. 수두 환산 전용 값.
pub const G: f64 = 9.81;

/// 일반 기체상수 [J/(mol·K)]
pub const R_UNIVERSAL: f64 = 8.314_462_618;

/// 0 °C 의 켈빈 값
pub const ZERO_C_IN_K: f64 = 273.15;

/// 1 bar = 100 000 Pa
pub const PA_PER_BAR: f64 = 100_000.0;

/// 표준상태(STP) 이상기체 몰부피 [L/mol]
pub const MOLAR_VOLUME_STP_L: f64 = 22.414;

/// 물(수증기) 몰질량 [g/mol]
pub const M_WATER: f64 = 18.015;
/// 건공기 등가 NCG 몰질량 [g/mol]
pub const M_AIR: f64 = 28.97;
/// 산소 몰질량 [g/mol]
pub const M_O2: f64 = 31.998;
/// 질소 몰질량 [g/mol]
pub const M_N2: f64 = 28.014;

/// 수증기 이상기체 정압비열 [kJ/(kg·K)]
pub const CP_WATER_VAPOUR: f64 = 1.872;
/// 수증기 이상기체 정적비열 [kJ/(kg·K)]
pub const CV_WATER_VAPOUR: f64 = 1.410;
/// 공기 정압비열 [kJ/(kg·K)]
pub const CP_AIR: f64 = 1.005;
/// 공기 정적비열 [kJ/(kg·K)]
pub const CV_AIR: f64 = 0.718;
