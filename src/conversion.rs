//! 게이지/절대 모드를 포함한 압력 환산과 단위 문자열 해석.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::pressure::{from_bar, to_bar, ATM_BAR};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

/// 게이지/절대 모드를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

/// 압력 변환 (모드 포함). 내부 기준은 bar(abs)로 처리한 뒤 요청 모드로 반환한다.
pub fn convert_pressure_mode(
    value: f64,
    from_unit: PressureUnit,
    from_mode: PressureMode,
    to_unit: PressureUnit,
    to_mode: PressureMode,
) -> f64 {
    let base = to_bar(value, from_unit);
    let bar_abs = match from_mode {
        PressureMode::Gauge => base + ATM_BAR,
        PressureMode::Absolute => base,
    };
    let bar_target = match to_mode {
        PressureMode::Absolute => bar_abs,
        PressureMode::Gauge => bar_abs - ATM_BAR,
    };
    from_bar(bar_target, to_unit)
}

/// 입력 압력을 계산 기준인 bar(abs)로 환산한다.
pub fn to_bar_abs(value: f64, unit: PressureUnit, mode: PressureMode) -> f64 {
    convert_pressure_mode(value, unit, mode, PressureUnit::Bar, PressureMode::Absolute)
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "bar" | "bara" | "barg" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        "psi" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atm),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_flow_unit(s: &str) -> Result<MassFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/s" => Ok(MassFlowUnit::KgPerSecond),
        "kg/h" | "kg/hr" => Ok(MassFlowUnit::KgPerHour),
        "t/h" | "t/hr" | "tph" => Ok(MassFlowUnit::TonPerHour),
        "lb/h" | "lb/hr" => Ok(MassFlowUnit::PoundPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmhg_gauge_to_abs_bar() {
        // 0 mmHg(g) => 1 atm abs
        let bar_abs = to_bar_abs(0.0, PressureUnit::MmHg, PressureMode::Gauge);
        assert!((bar_abs - 1.01325).abs() < 1e-4);
    }

    #[test]
    fn full_vacuum_is_zero_abs() {
        let bar_abs = to_bar_abs(-760.0, PressureUnit::MmHg, PressureMode::Gauge);
        assert!(bar_abs.abs() < 1e-5);
    }

    #[test]
    fn kpa_gauge_to_bar_gauge_keeps_reference() {
        let barg = convert_pressure_mode(
            250.0,
            PressureUnit::KiloPascal,
            PressureMode::Gauge,
            PressureUnit::Bar,
            PressureMode::Gauge,
        );
        assert!((barg - 2.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert_eq!(
            parse_pressure_unit("furlong"),
            Err(ConversionError::UnknownUnit("furlong".into()))
        );
        assert_eq!(parse_mass_flow_unit("T/H"), Ok(MassFlowUnit::TonPerHour));
    }
}
