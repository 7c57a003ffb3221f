//! 과열 증기 감온기(desuperheater)의 분사수량 계산.
//!
//! 과열 증기에 분사수를 단열 혼합해 목표 온도까지 낮출 때의 질량/에너지 수지를 푼다.
//!
//! ```text
//! ratio        = (h_steam − h_target) / (h_target − h_water)
//! spray        = steam × ratio
//! outlet       = steam + spray
//! heat_removed = steam[kg/s] × (h_steam − h_target)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::steam::SteamProperties;
use crate::units::ton_hr_to_kg_s;
use crate::warning::{self, Warning, WarningCategory};

/// 감온기 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesuperheatingInput {
    /// 증기 압력(bar abs)
    pub steam_pressure_bar: f64,
    /// 입구 증기 온도(°C)
    pub steam_temperature_c: f64,
    /// 목표 출구 온도(°C)
    pub target_temperature_c: f64,
    /// 분사수 온도(°C)
    pub spray_water_temperature_c: f64,
    /// 입구 증기 유량(t/h)
    pub steam_flow_ton_per_hr: f64,
}

/// 감온기 계산 결과. 유량은 t/h, 엔탈피는 kJ/kg, 열량은 kW.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesuperheatingResult {
    pub steam_enthalpy: f64,
    pub target_enthalpy: f64,
    pub spray_water_enthalpy: f64,
    pub water_to_steam_ratio: f64,
    pub spray_water_flow: f64,
    pub total_outlet_flow: f64,
    pub heat_removed: f64,
    pub degrees_of_superheat: f64,
    pub outlet_superheat: f64,
    pub saturation_temperature: f64,
    pub warnings: Vec<Warning>,
}

/// 경고 판정 및 포화 판정 기준값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesuperheaterLimits {
    /// 목표 온도가 포화온도 + 이 값 이내이면 포화 증기로 취급한다(°C).
    pub saturated_band_c: f64,
    /// 이 비율을 넘는 분사수/증기 비는 노즐 재검토 경고.
    pub high_ratio_threshold: f64,
    /// 출구 과열도가 이 값보다 작으면 미증발 액적 경고(°C).
    pub min_outlet_superheat_c: f64,
}

impl Default for DesuperheaterLimits {
    fn default() -> Self {
        Self {
            saturated_band_c: 0.1,
            high_ratio_threshold: 0.3,
            min_outlet_superheat_c: 3.0,
        }
    }
}

/// 감온기 계산기. 물성 제공자를 주입받는다.
#[derive(Debug, Clone)]
pub struct DesuperheatingCalculator<P> {
    provider: P,
    limits: DesuperheaterLimits,
}

impl<P: SteamProperties> DesuperheatingCalculator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_limits(provider, DesuperheaterLimits::default())
    }

    pub fn with_limits(provider: P, limits: DesuperheaterLimits) -> Self {
        Self { provider, limits }
    }

    /// 입력을 검증한 뒤 분사수량과 에너지 수지를 계산한다.
    pub fn calculate(&self, input: &DesuperheatingInput) -> CalcResult<DesuperheatingResult> {
        let p = input.steam_pressure_bar;
        let t_in = input.steam_temperature_c;
        let t_target = input.target_temperature_c;
        let steam_flow = input.steam_flow_ton_per_hr;

        if p <= 0.0 || !p.is_finite() {
            return Err(CalcError::validation("Steam pressure must be positive"));
        }
        if !t_in.is_finite() || !t_target.is_finite() || !input.spray_water_temperature_c.is_finite()
        {
            return Err(CalcError::validation("Temperatures must be finite"));
        }
        if !self.provider.is_superheated(p, t_in)? {
            return Err(CalcError::validation(format!(
                "Steam must be superheated: {t_in} °C is not above saturation at {p} bar"
            )));
        }
        let t_sat = self.provider.saturation_temperature(p)?;
        if t_target < t_sat {
            return Err(CalcError::validation(format!(
                "Target temperature {t_target} °C cannot be below saturation ({t_sat:.2} °C)"
            )));
        }
        if t_target >= t_in {
            return Err(CalcError::validation(format!(
                "Target temperature {t_target} °C must be below inlet temperature ({t_in} °C)"
            )));
        }
        if steam_flow <= 0.0 || !steam_flow.is_finite() {
            return Err(CalcError::validation("Steam flow must be positive"));
        }

        let h_steam = self.provider.enthalpy_superheated(p, t_in)?;
        let h_target = if t_target - t_sat <= self.limits.saturated_band_c {
            self.provider.enthalpy_vapor(t_sat)?
        } else {
            self.provider.enthalpy_superheated(p, t_target)?
        };
        let h_water = self.provider.enthalpy_liquid(input.spray_water_temperature_c)?;

        if h_target <= h_water {
            return Err(CalcError::validation(format!(
                "Spray water enthalpy ({h_water:.2} kJ/kg) must be below target enthalpy ({h_target:.2} kJ/kg)"
            )));
        }

        let ratio = (h_steam - h_target) / (h_target - h_water);
        let spray_water_flow = steam_flow * ratio;
        let total_outlet_flow = steam_flow + spray_water_flow;
        let heat_removed = ton_hr_to_kg_s(steam_flow) * (h_steam - h_target);
        let degrees_of_superheat = t_in - t_sat;
        let outlet_superheat = (t_target - t_sat).max(0.0);

        let mut warnings = Vec::new();
        if input.spray_water_temperature_c >= t_sat {
            warning::push(
                &mut warnings,
                WarningCategory::Flashing,
                format!(
                    "Spray water at {:.1} °C is at or above saturation ({t_sat:.1} °C): risk of flashing",
                    input.spray_water_temperature_c
                ),
            );
        }
        if ratio > self.limits.high_ratio_threshold {
            warning::push(
                &mut warnings,
                WarningCategory::Sizing,
                format!("High water-to-steam ratio {ratio:.3}: verify nozzle sizing"),
            );
        }
        if outlet_superheat < self.limits.min_outlet_superheat_c {
            warning::push(
                &mut warnings,
                WarningCategory::Saturation,
                format!(
                    "Outlet superheat {outlet_superheat:.2} °C is close to saturation: spray may not fully evaporate"
                ),
            );
        }

        tracing::debug!(
            t_sat,
            h_steam,
            h_target,
            h_water,
            ratio,
            spray_water_flow,
            "desuperheating balance solved"
        );

        Ok(DesuperheatingResult {
            steam_enthalpy: h_steam,
            target_enthalpy: h_target,
            spray_water_enthalpy: h_water,
            water_to_steam_ratio: ratio,
            spray_water_flow,
            total_outlet_flow,
            heat_removed,
            degrees_of_superheat,
            outlet_superheat,
            saturation_temperature: t_sat,
            warnings,
        })
    }
}
