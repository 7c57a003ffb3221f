//! 해수 용존 기체(O₂, N₂) 용해도. Weiss (1970) 상관식.
//!
//! ```text
//! ln C = A1 + A2·(100/T) + A3·ln(T/100) + A4·(T/100)
//!        + S·[B1 + B2·(T/100) + B3·(T/100)²]
//! ```
//! C: mL(STP)/L, T: K, S: g/kg (‰). 대기 평형(습윤 공기, 1 atm) 기준.

use serde::{Deserialize, Serialize};

use crate::constants::{MOLAR_VOLUME_STP_L, M_N2, M_O2};
use crate::units::celsius_to_kelvin;

#[derive(Debug, Clone, Copy)]
struct WeissCoefficients {
    a: [f64; 4],
    b: [f64; 3],
}

const O2: WeissCoefficients = WeissCoefficients {
    a: [-173.4292, 249.6339, 143.3483, -21.8492],
    b: [-0.033_096, 0.014_259, -0.001_700_0],
};

const N2: WeissCoefficients = WeissCoefficients {
    a: [-172.4965, 248.4262, 143.0738, -21.7120],
    b: [-0.049_781, 0.025_018, -0.003_486_1],
};

/// 상관식이 맞춰진 온도/염분 범위. 범위 밖은 오류가 아니라 외삽 표시 대상이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolubilityRange {
    pub t_min_c: f64,
    pub t_max_c: f64,
    pub s_min_g_kg: f64,
    pub s_max_g_kg: f64,
}

impl Default for SolubilityRange {
    fn default() -> Self {
        Self {
            t_min_c: 0.0,
            t_max_c: 40.0,
            s_min_g_kg: 0.0,
            s_max_g_kg: 40.0,
        }
    }
}

impl SolubilityRange {
    pub fn contains(&self, temperature_c: f64, salinity_g_kg: f64) -> bool {
        (self.t_min_c..=self.t_max_c).contains(&temperature_c)
            && (self.s_min_g_kg..=self.s_max_g_kg).contains(&salinity_g_kg)
    }
}

/// 해수 용존 기체 농도.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DissolvedGas {
    pub o2_ml_per_l: f64,
    pub n2_ml_per_l: f64,
    pub o2_mg_per_l: f64,
    pub n2_mg_per_l: f64,
    /// 적합 범위 밖에서 계산되었는지 여부
    pub extrapolated: bool,
}

impl DissolvedGas {
    /// O₂ + N₂ 합계(mg/L)
    pub fn total_mg_per_l(&self) -> f64 {
        self.o2_mg_per_l + self.n2_mg_per_l
    }
}

fn weiss_ml_per_l(k: &WeissCoefficients, t_k: f64, salinity: f64) -> f64 {
    let t100 = t_k / 100.0;
    let ln_c = k.a[0]
        + k.a[1] / t100
        + k.a[2] * t100.ln()
        + k.a[3] * t100
        + salinity * (k.b[0] + k.b[1] * t100 + k.b[2] * t100 * t100);
    ln_c.exp()
}

fn ml_to_mg(ml_per_l: f64, molar_mass: f64) -> f64 {
    ml_per_l / MOLAR_VOLUME_STP_L * molar_mass
}

/// 해수 온도(°C)와 염분(g/kg)으로 용존 O₂/N₂ 농도를 계산한다.
pub fn dissolved_gases(
    temperature_c: f64,
    salinity_g_kg: f64,
    range: &SolubilityRange,
) -> DissolvedGas {
    let t_k = celsius_to_kelvin(temperature_c);
    let o2_ml = weiss_ml_per_l(&O2, t_k, salinity_g_kg);
    let n2_ml = weiss_ml_per_l(&N2, t_k, salinity_g_kg);
    DissolvedGas {
        o2_ml_per_l: o2_ml,
        n2_ml_per_l: n2_ml,
        o2_mg_per_l: ml_to_mg(o2_ml, M_O2),
        n2_mg_per_l: ml_to_mg(n2_ml, M_N2),
        extrapolated: !range.contains(temperature_c, salinity_g_kg),
    }
}
