//! 수증기 + 비응축성 기체(NCG) 혼합물의 물성 계산.
//!
//! NCG는 건공기 등가(28.97 g/mol)로 취급하고, 혼합물은 이상기체로 본다.
//! 수증기 분압은 포화압력을 넘을 수 없으므로 `min(Psat, P_total)`로 제한한다.

use serde::{Deserialize, Serialize};

use super::solubility::{dissolved_gases, DissolvedGas, SolubilityRange};
use super::transport::{
    air_conductivity, air_viscosity, mason_saxena_conductivity, water_vapour_conductivity,
    water_vapour_viscosity, wilke_viscosity, MixComponent,
};
use crate::constants::{
    CP_AIR, CP_WATER_VAPOUR, CV_AIR, CV_WATER_VAPOUR, M_AIR, M_WATER, PA_PER_BAR, R_UNIVERSAL,
    ZERO_C_IN_K,
};
use crate::error::{CalcError, CalcResult};
use crate::steam::SteamProperties;
use crate::units::celsius_to_kelvin;
use crate::warning::{self, Warning, WarningCategory};

/// 압력 입력의 의미. 절대 전압인지, 포화압력 위에 얹힌 NCG 분압인지를 타입으로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum NcgPressure {
    /// 혼합물 전압(bar abs)
    Total { bar: f64 },
    /// 포화압력에 더해지는 NCG 분압(bar). 전압 = Psat(T) + bar
    NcgAboveSaturation { bar: f64 },
}

impl NcgPressure {
    /// `use_sat_pressure` 플래그 형식의 입력을 변환한다.
    pub fn from_flag(pressure_bar: f64, use_sat_pressure: bool) -> Self {
        if use_sat_pressure {
            NcgPressure::NcgAboveSaturation { bar: pressure_bar }
        } else {
            NcgPressure::Total { bar: pressure_bar }
        }
    }

    pub fn value_bar(&self) -> f64 {
        match *self {
            NcgPressure::Total { bar } | NcgPressure::NcgAboveSaturation { bar } => bar,
        }
    }
}

/// 유량 산정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NcgMode {
    /// 해수 유량으로부터 방출되는 용존 기체를 NCG로 본다.
    Seawater {
        /// 해수 유량(m³/h)
        flow_m3_h: Option<f64>,
        /// 해수 온도(°C)
        temperature_c: f64,
        /// 염분(g/kg)
        salinity_g_kg: f64,
    },
    /// 건조 NCG 질량유량(kg/h)
    DryNcg { flow_kg_h: Option<f64> },
    /// 수증기를 포함한 전체 질량유량(kg/h)
    WetNcg { flow_kg_h: Option<f64> },
}

/// NCG 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NcgInput {
    /// 혼합물 온도(°C)
    pub temperature_c: f64,
    pub pressure: NcgPressure,
    pub mode: NcgMode,
}

/// 유량 분해 결과(kg/h, m³/h).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NcgFlowBreakdown {
    pub dry_ncg_flow_kg_h: f64,
    pub water_vapour_flow_kg_h: f64,
    pub total_flow_kg_h: f64,
    pub volumetric_flow_m3_h: f64,
}

/// NCG 혼합물 물성 결과.
///
/// 단위: 압력 bar(abs), 몰질량 g/mol, 밀도 kg/m³, 비체적 m³/kg,
/// 엔탈피 kJ/kg, 비열 kJ/(kg·K), 점도 Pa·s, 열전도율 W/(m·K).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NcgResult {
    pub total_pressure_bar: f64,
    pub saturation_pressure_bar: f64,
    pub water_vapour_partial_pressure_bar: f64,
    pub ncg_partial_pressure_bar: f64,

    pub water_vapour_mole_fraction: f64,
    pub ncg_mole_fraction: f64,
    pub water_vapour_mass_fraction: f64,
    pub ncg_mass_fraction: f64,
    pub mixture_molar_mass: f64,

    pub density: f64,
    pub specific_volume: f64,
    pub specific_enthalpy: f64,
    /// 수증기 기여분 x_w·h_v(T)
    pub water_vapour_enthalpy: f64,
    /// NCG 기여분 x_ncg·cp_air·T
    pub ncg_enthalpy: f64,
    pub cp: f64,
    pub cv: f64,
    pub gamma: f64,

    pub dynamic_viscosity: f64,
    pub thermal_conductivity: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<NcgFlowBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seawater_info: Option<DissolvedGas>,
    pub warnings: Vec<Warning>,
}

/// NCG 물성 계산기.
#[derive(Debug, Clone)]
pub struct NcgCalculator<P> {
    provider: P,
    solubility_range: SolubilityRange,
}

impl<P: SteamProperties> NcgCalculator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_solubility_range(provider, SolubilityRange::default())
    }

    pub fn with_solubility_range(provider: P, solubility_range: SolubilityRange) -> Self {
        Self {
            provider,
            solubility_range,
        }
    }

    pub fn calculate(&self, input: &NcgInput) -> CalcResult<NcgResult> {
        validate(input)?;
        let t_c = input.temperature_c;
        let mut warnings = Vec::new();

        // 1~2. 압력 해석과 분압
        let psat = self.provider.saturation_pressure(t_c)?;
        let total_pressure = match input.pressure {
            NcgPressure::Total { bar } => bar,
            NcgPressure::NcgAboveSaturation { bar } => psat + bar,
        };
        let p_vapour = psat.min(total_pressure);
        let p_ncg = total_pressure - p_vapour;
        if total_pressure < psat {
            warning::push(
                &mut warnings,
                WarningCategory::Saturation,
                format!(
                    "Total pressure {total_pressure:.4} bar is below saturation pressure {psat:.4} bar: vapour partial pressure capped, mixture is pure vapour"
                ),
            );
        }

        // 3~4. 조성
        let y_w = p_vapour / total_pressure;
        let y_ncg = 1.0 - y_w;
        let m_mix = y_w * M_WATER + y_ncg * M_AIR;
        let x_w = y_w * M_WATER / m_mix;
        let x_ncg = y_ncg * M_AIR / m_mix;

        // 5. 이상기체 밀도
        let t_k = celsius_to_kelvin(t_c);
        let density = total_pressure * PA_PER_BAR * (m_mix / 1000.0) / (R_UNIVERSAL * t_k);
        let specific_volume = 1.0 / density;

        // 6. 엔탈피 (수증기: 포화 증기 엔탈피, NCG: 0 °C 기준 cp·T)
        let water_vapour_enthalpy = x_w * self.provider.enthalpy_vapor(t_c)?;
        let ncg_enthalpy = x_ncg * CP_AIR * t_c;
        let specific_enthalpy = water_vapour_enthalpy + ncg_enthalpy;

        // 7. 비열
        let cp = x_w * CP_WATER_VAPOUR + x_ncg * CP_AIR;
        let cv = x_w * CV_WATER_VAPOUR + x_ncg * CV_AIR;
        let gamma = cp / cv;

        // 8. 수송 물성
        let viscosity_components = [
            MixComponent {
                mole_fraction: y_w,
                molar_mass: M_WATER,
                value: water_vapour_viscosity(t_c),
            },
            MixComponent {
                mole_fraction: y_ncg,
                molar_mass: M_AIR,
                value: air_viscosity(t_c),
            },
        ];
        let conductivity_components = [
            MixComponent {
                value: water_vapour_conductivity(t_c),
                ..viscosity_components[0]
            },
            MixComponent {
                value: air_conductivity(t_c),
                ..viscosity_components[1]
            },
        ];
        let dynamic_viscosity = wilke_viscosity(&viscosity_components);
        let thermal_conductivity = mason_saxena_conductivity(&conductivity_components);

        // 9. 유량 분해
        let mut seawater_info = None;
        let dry_and_vapour = match input.mode {
            NcgMode::DryNcg { flow_kg_h } => flow_kg_h
                .map(|dry| split_dry_flow(dry, x_w, x_ncg))
                .transpose()?,
            NcgMode::WetNcg { flow_kg_h } => flow_kg_h.map(|total| (total * x_ncg, total * x_w)),
            NcgMode::Seawater {
                flow_m3_h,
                temperature_c,
                salinity_g_kg,
            } => {
                let gas = dissolved_gases(temperature_c, salinity_g_kg, &self.solubility_range);
                if gas.extrapolated {
                    warning::push(
                        &mut warnings,
                        WarningCategory::Extrapolation,
                        format!(
                            "Seawater at {temperature_c} °C / {salinity_g_kg} g/kg is outside the Weiss (1970) fitted range: dissolved gas extrapolated"
                        ),
                    );
                }
                seawater_info = Some(gas);
                flow_m3_h
                    .map(|q| split_dry_flow(released_ncg_kg_h(q, &gas), x_w, x_ncg))
                    .transpose()?
            }
        };
        let flow = dry_and_vapour.map(|(dry, vapour)| {
            let total = dry + vapour;
            NcgFlowBreakdown {
                dry_ncg_flow_kg_h: dry,
                water_vapour_flow_kg_h: vapour,
                total_flow_kg_h: total,
                volumetric_flow_m3_h: total / density,
            }
        });

        tracing::debug!(
            total_pressure,
            psat,
            y_w,
            m_mix,
            density,
            dynamic_viscosity,
            thermal_conductivity,
            "NCG mixture properties computed"
        );

        Ok(NcgResult {
            total_pressure_bar: total_pressure,
            saturation_pressure_bar: psat,
            water_vapour_partial_pressure_bar: p_vapour,
            ncg_partial_pressure_bar: p_ncg,
            water_vapour_mole_fraction: y_w,
            ncg_mole_fraction: y_ncg,
            water_vapour_mass_fraction: x_w,
            ncg_mass_fraction: x_ncg,
            mixture_molar_mass: m_mix,
            density,
            specific_volume,
            specific_enthalpy,
            water_vapour_enthalpy,
            ncg_enthalpy,
            cp,
            cv,
            gamma,
            dynamic_viscosity,
            thermal_conductivity,
            flow,
            seawater_info,
            warnings,
        })
    }
}

/// 해수에서 완전히 방출된 용존 O₂ + N₂ 질량유량(kg/h).
pub fn released_ncg_kg_h(seawater_flow_m3_h: f64, gas: &DissolvedGas) -> f64 {
    // m³/h × 1000 L/m³ × mg/L × 1e-6 kg/mg
    seawater_flow_m3_h * 1000.0 * gas.total_mg_per_l() * 1e-6
}

/// 건조 NCG 유량에 질량분율 비로 동반 수증기량을 붙인다.
fn split_dry_flow(dry: f64, x_w: f64, x_ncg: f64) -> CalcResult<(f64, f64)> {
    if dry == 0.0 {
        return Ok((0.0, 0.0));
    }
    if x_ncg <= 0.0 {
        return Err(CalcError::validation(
            "Total pressure must exceed saturation pressure to carry NCG",
        ));
    }
    Ok((dry, dry * x_w / x_ncg))
}

fn validate(input: &NcgInput) -> CalcResult<()> {
    if !input.temperature_c.is_finite() || input.temperature_c <= -ZERO_C_IN_K {
        return Err(CalcError::validation(
            "Temperature must be finite and above absolute zero",
        ));
    }
    let p = input.pressure.value_bar();
    match input.pressure {
        NcgPressure::Total { .. } if p <= 0.0 || !p.is_finite() => {
            return Err(CalcError::validation("Pressure must be positive"));
        }
        NcgPressure::NcgAboveSaturation { .. } if p < 0.0 || !p.is_finite() => {
            return Err(CalcError::validation(
                "NCG partial pressure above saturation must not be negative",
            ));
        }
        _ => {}
    }
    let check_flow = |flow: Option<f64>, what: &str| match flow {
        Some(f) if f < 0.0 || !f.is_finite() => Err(CalcError::validation(format!(
            "{what} must not be negative"
        ))),
        _ => Ok(()),
    };
    match input.mode {
        NcgMode::Seawater {
            flow_m3_h,
            temperature_c,
            salinity_g_kg,
        } => {
            check_flow(flow_m3_h, "Seawater flow")?;
            if !temperature_c.is_finite() || temperature_c <= -ZERO_C_IN_K {
                return Err(CalcError::validation(
                    "Seawater temperature must be finite and above absolute zero",
                ));
            }
            if salinity_g_kg < 0.0 || !salinity_g_kg.is_finite() {
                return Err(CalcError::validation("Salinity must not be negative"));
            }
        }
        NcgMode::DryNcg { flow_kg_h } => check_flow(flow_kg_h, "Dry NCG flow")?,
        NcgMode::WetNcg { flow_kg_h } => check_flow(flow_kg_h, "Wet NCG flow")?,
    }
    Ok(())
}
