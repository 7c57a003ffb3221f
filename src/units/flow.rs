use serde::{Deserialize, Serialize};

/// 질량유량 단위. 내부 기준은 kg/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassFlowUnit {
    KgPerSecond,
    KgPerHour,
    TonPerHour,
    PoundPerHour,
}

fn to_kg_s(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KgPerSecond => value,
        MassFlowUnit::KgPerHour => value / 3600.0,
        MassFlowUnit::TonPerHour => ton_hr_to_kg_s(value),
        MassFlowUnit::PoundPerHour => value * 0.453592 / 3600.0,
    }
}

fn from_kg_s(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KgPerSecond => value,
        MassFlowUnit::KgPerHour => value * 3600.0,
        MassFlowUnit::TonPerHour => kg_s_to_ton_hr(value),
        MassFlowUnit::PoundPerHour => value * 3600.0 / 0.453592,
    }
}

/// 질량유량을 변환한다.
pub fn convert_mass_flow(value: f64, from: MassFlowUnit, to: MassFlowUnit) -> f64 {
    let base = to_kg_s(value, from);
    from_kg_s(base, to)
}

/// t/h → kg/s
pub fn ton_hr_to_kg_s(value: f64) -> f64 {
    value * 1000.0 / 3600.0
}

/// kg/s → t/h. `ton_hr_to_kg_s`의 역함수.
pub fn kg_s_to_ton_hr(value: f64) -> f64 {
    value * 3600.0 / 1000.0
}

/// t/h 질량유량을 밀도 `rho_kg_m3`로 나누어 체적유량(m³/s)으로 환산한다.
pub fn ton_hr_to_m3_s(value: f64, rho_kg_m3: f64) -> f64 {
    ton_hr_to_kg_s(value) / rho_kg_m3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_ton_per_hour_in_kg_s() {
        assert!((ton_hr_to_kg_s(10.0) - 2.777_777_777_8).abs() < 1e-9);
        assert!((kg_s_to_ton_hr(ton_hr_to_kg_s(10.0)) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn volumetric_flow_of_water() {
        // 3.6 t/h 물 = 1 kg/s = 0.001 m³/s
        assert!((ton_hr_to_m3_s(3.6, 1000.0) - 0.001).abs() < 1e-12);
    }

    #[test]
    fn kg_per_hour_to_ton_per_hour() {
        let t_h = convert_mass_flow(2500.0, MassFlowUnit::KgPerHour, MassFlowUnit::TonPerHour);
        assert!((t_h - 2.5).abs() < 1e-12);
    }
}
