use serde::{Deserialize, Serialize};

use crate::constants::{G, PA_PER_BAR};

/// 압력 단위. 내부 기준은 bar이다.
/// 게이지/절대 구분은 `conversion::PressureMode`에서 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    MilliBar,
    Pascal,
    KiloPascal,
    MegaPascal,
    KgPerCm2,
    Psi,
    Atm,
    MmHg,
}

pub(crate) const ATM_BAR: f64 = 1.01325;
const MMHG_PER_BAR: f64 = 750.062;

/// 주어진 압력을 bar 로 변환한다. 기준점(게이지/절대)은 바꾸지 않는다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::MilliBar => value / 1000.0,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::KgPerCm2 => value * 0.980665,
        PressureUnit::Psi => value * 0.0689476,
        PressureUnit::Atm => value * ATM_BAR,
        PressureUnit::MmHg => value / MMHG_PER_BAR,
    }
}

/// bar 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::MilliBar => value_bar * 1000.0,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::KgPerCm2 => value_bar / 0.980665,
        PressureUnit::Psi => value_bar / 0.0689476,
        PressureUnit::Atm => value_bar / ATM_BAR,
        PressureUnit::MmHg => value_bar * MMHG_PER_BAR,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let bar = to_bar(value, from);
    from_bar(bar, to)
}

/// 압력(bar)을 밀도 `rho_kg_m3` 유체의 수두(m)로 환산한다. h = P / (ρ·g)
pub fn bar_to_head(pressure_bar: f64, rho_kg_m3: f64) -> f64 {
    pressure_bar * PA_PER_BAR / (rho_kg_m3 * G)
}

/// 수두(m)를 압력(bar)으로 환산한다. `bar_to_head`의 역함수.
pub fn head_to_bar(head_m: f64, rho_kg_m3: f64) -> f64 {
    head_m * rho_kg_m3 * G / PA_PER_BAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bar_of_water_is_about_ten_metres() {
        let h = bar_to_head(1.0, 1000.0);
        assert!((h - 10.193_679_918).abs() < 1e-6, "h={h}");
        assert!((head_to_bar(h, 1000.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kpa_to_psi() {
        let psi = convert_pressure(100.0, PressureUnit::KiloPascal, PressureUnit::Psi);
        assert!((psi - 14.5038).abs() < 1e-3);
    }
}
