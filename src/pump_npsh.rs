//! 펌프 흡입측 NPSH(available) 계산.

use serde::{Deserialize, Serialize};

use crate::conversion::{to_bar_abs, PressureMode};
use crate::error::{CalcError, CalcResult};
use crate::steam::SteamProperties;
use crate::units::{bar_to_head, PressureUnit};
use crate::warning::{self, Warning, WarningCategory};

/// 펌프 NPSH 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpNpshInput {
    /// 흡입 측 압력(bar)
    pub suction_pressure_bar: f64,
    /// 게이지/절대 구분
    pub suction_pressure_mode: PressureMode,
    /// 유체 온도(°C) - 물로 가정하여 증기압을 구한다
    pub liquid_temp_c: f64,
    /// 정수두(m) - 액면에서 펌프 중심까지의 높이(+상승, -낙차)
    pub static_head_m: f64,
    /// 흡입 배관 마찰손실(m 수두)
    pub friction_loss_m: f64,
    /// 요구 NPSH (제조사 값, m)
    pub npshr_m: f64,
    /// 유체 밀도(kg/m³)
    pub rho_kg_m3: f64,
}

/// 펌프 NPSH 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpNpshResult {
    /// 흡입 절대압(bar abs)
    pub suction_pressure_bar_abs: f64,
    /// 유체 증기압(bar abs)
    pub vapour_pressure_bar_abs: f64,
    /// 사용 가능 NPSH(m)
    pub npsha_m: f64,
    /// Margin = NPSHa / NPSHr
    pub margin_ratio: f64,
    pub warnings: Vec<Warning>,
}

/// 펌프 NPSH 판정 기준.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpLimits {
    pub min_npsh_margin: f64,
}

impl Default for PumpLimits {
    fn default() -> Self {
        Self {
            min_npsh_margin: 1.1,
        }
    }
}

/// 펌프 NPSH를 계산한다. 증기압은 물성 제공자의 포화압력을 사용한다.
pub fn compute_pump_npsh<P: SteamProperties>(
    provider: &P,
    input: &PumpNpshInput,
    limits: &PumpLimits,
) -> CalcResult<PumpNpshResult> {
    if input.rho_kg_m3 <= 0.0 || !input.rho_kg_m3.is_finite() {
        return Err(CalcError::validation("Liquid density must be positive"));
    }
    let p_suction_abs_bar = to_bar_abs(
        input.suction_pressure_bar,
        PressureUnit::Bar,
        input.suction_pressure_mode,
    );
    if p_suction_abs_bar <= 0.0 {
        return Err(CalcError::validation(
            "Suction pressure must be above absolute vacuum",
        ));
    }
    let pv_bar = provider.saturation_pressure(input.liquid_temp_c)?;

    let head_from_pressure = bar_to_head(p_suction_abs_bar - pv_bar, input.rho_kg_m3);
    let npsha = head_from_pressure + input.static_head_m - input.friction_loss_m;

    let margin = if input.npshr_m > 0.0 {
        npsha / input.npshr_m
    } else {
        f64::INFINITY
    };
    let mut warnings = Vec::new();
    if margin < limits.min_npsh_margin {
        warning::push(
            &mut warnings,
            WarningCategory::Cavitation,
            format!(
                "NPSH margin {margin:.2} is below {:.2}: cavitation risk",
                limits.min_npsh_margin
            ),
        );
    }
    tracing::debug!(p_suction_abs_bar, pv_bar, npsha, margin, "pump NPSH computed");
    Ok(PumpNpshResult {
        suction_pressure_bar_abs: p_suction_abs_bar,
        vapour_pressure_bar_abs: pv_bar,
        npsha_m: npsha,
        margin_ratio: margin,
        warnings,
    })
}
