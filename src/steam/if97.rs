//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 물성 제공자.
//! 입력: 압력(bar, 절대), 온도(°C)
//! 영역 강제 계산 출력: (엔탈피[J/kg], 비체적[m³/kg], 엔트로피[J/kg·K])

use seuif97::{pt, OH, OS, OV};

use super::provider::SteamProperties;
use crate::constants::ZERO_C_IN_K;
use crate::error::PropertyError;

// ---------------- Region 4 (포화) ----------------
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];
/// 삼중점 부근 하한 (IF97 Region 4 유효 하한)
const T4_MIN_K: f64 = ZERO_C_IN_K;
const P4_MIN_BAR: f64 = 0.006_112_13;

fn check_props(
    region: u8,
    p_bar_abs: f64,
    t_c: f64,
    h_kj: f64,
    v: f64,
    s_kj: f64,
) -> Result<(f64, f64, f64), PropertyError> {
    if h_kj.is_nan() || v.is_nan() || s_kj.is_nan() {
        return Err(PropertyError::new(format!(
            "IF97 region {region} failed at {p_bar_abs} bar, {t_c} °C (out of range or not converged)"
        )));
    }
    Ok((h_kj * 1000.0, v, s_kj * 1000.0))
}

/// Region 1(압축수) 강제 계산. 입력은 bar(abs)/°C.
pub fn region1_props(p_bar_abs: f64, t_c: f64) -> Result<(f64, f64, f64), PropertyError> {
    let p_mpa = p_bar_abs / 10.0;
    let h_kj = pt(p_mpa, t_c, (OH, 1));
    let v = pt(p_mpa, t_c, (OV, 1));
    let s_kj = pt(p_mpa, t_c, (OS, 1));
    check_props(1, p_bar_abs, t_c, h_kj, v, s_kj)
}

/// Region 2(과열 증기) 강제 계산. 입력은 bar(abs)/°C.
pub fn region2_props(p_bar_abs: f64, t_c: f64) -> Result<(f64, f64, f64), PropertyError> {
    let p_mpa = p_bar_abs / 10.0;
    let h_kj = pt(p_mpa, t_c, (OH, 2));
    let v = pt(p_mpa, t_c, (OV, 2));
    let s_kj = pt(p_mpa, t_c, (OS, 2));
    check_props(2, p_bar_abs, t_c, h_kj, v, s_kj)
}

fn region4_ln_ratio(t_k: f64) -> f64 {
    let theta = 1.0 - t_k / T4_STAR_K;
    (T4_STAR_K / t_k)
        * (R4_N[0] * theta
            + R4_N[1] * theta.powf(1.5)
            + R4_N[2] * theta.powi(3)
            + R4_N[3] * theta.powf(3.5)
            + R4_N[4] * theta.powi(4)
            + R4_N[5] * theta.powf(7.5))
}

/// 포화압력(bar abs) - 입력 온도는 °C.
pub fn saturation_pressure_bar_abs_from_temp_c(t_c: f64) -> Result<f64, PropertyError> {
    let t_k = t_c + ZERO_C_IN_K;
    if !t_k.is_finite() || t_k < T4_MIN_K || t_k > T4_STAR_K {
        return Err(PropertyError::new(format!(
            "saturation temperature {t_c} °C outside IF97 region 4 (0 ~ 373.946 °C)"
        )));
    }
    let p_mpa = P4_STAR_MPA * region4_ln_ratio(t_k).exp();
    Ok(p_mpa * 10.0)
}

/// 포화온도(°C) - 입력 압력은 bar abs. Newton 반복으로 Region 4 식을 역산한다.
pub fn saturation_temp_c_from_pressure_bar_abs(p_bar_abs: f64) -> Result<f64, PropertyError> {
    if !p_bar_abs.is_finite() || p_bar_abs <= 0.0 {
        return Err(PropertyError::new("pressure must be positive"));
    }
    if p_bar_abs < P4_MIN_BAR || p_bar_abs > P4_STAR_MPA * 10.0 {
        return Err(PropertyError::new(format!(
            "saturation pressure {p_bar_abs} bar outside IF97 region 4 (0.00611 ~ 220.64 bar)"
        )));
    }
    let target = (p_bar_abs / 10.0 / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..50 {
        let theta = 1.0 - t_k / T4_STAR_K;
        let f = region4_ln_ratio(t_k) - target;
        let dtheta_dt = -1.0 / T4_STAR_K;
        let dfdtheta = R4_N[0]
            + 1.5 * R4_N[1] * theta.powf(0.5)
            + 3.0 * R4_N[2] * theta.powi(2)
            + 3.5 * R4_N[3] * theta.powf(2.5)
            + 4.0 * R4_N[4] * theta.powi(3)
            + 7.5 * R4_N[5] * theta.powf(6.5);
        let dfd_t = -(region4_ln_ratio(t_k) / t_k) + (T4_STAR_K / t_k) * dfdtheta * dtheta_dt;
        let delta = f / dfd_t;
        // 임계점 근처에서 theta가 음수가 되지 않도록 제한
        t_k = (t_k - delta).clamp(T4_MIN_K - 10.0, T4_STAR_K);
        if delta.abs() < 1e-8 {
            return Ok(t_k - ZERO_C_IN_K);
        }
    }
    Err(PropertyError::new(format!(
        "saturation temperature did not converge at {p_bar_abs} bar"
    )))
}

// ---------------- Region 2/3 경계 (B23) ----------------
const B23_N: [f64; 3] = [
    0.348_051_856_289_69e3,
    -0.116_718_598_799_75e1,
    0.101_929_700_393_26e-2,
];
/// 이 온도 이하의 증기는 압력과 무관하게 Region 2에 속한다.
const T_B23_MIN_K: f64 = 623.15;

/// B23 경계 압력(bar abs). 입력은 K.
pub fn b23_pressure_bar_abs(t_k: f64) -> f64 {
    (B23_N[0] + B23_N[1] * t_k + B23_N[2] * t_k * t_k) * 10.0
}

/// 상태가 Region 2 유효 범위 안인지 확인한다. 350 °C 이상에서는 B23 위쪽이 Region 3이다.
fn ensure_region2(p_bar_abs: f64, t_c: f64) -> Result<(), PropertyError> {
    let t_k = t_c + ZERO_C_IN_K;
    if t_k > T_B23_MIN_K && p_bar_abs > b23_pressure_bar_abs(t_k) {
        return Err(PropertyError::new(format!(
            "{p_bar_abs} bar, {t_c} °C lies in IF97 region 3 (near-critical vapour is not supported)"
        )));
    }
    Ok(())
}

/// IAPWS-IF97 기반 운영용 물성 제공자.
///
/// 과열 증기와 포화 증기는 Region 2, 액체는 포화압력에서의 Region 1로 계산한다.
/// Region 3에 걸리는 증기 상태(포화 증기는 350 °C 초과, 과열 증기는 B23 경계 위)는
/// 오류로 돌려준다.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Steam;

impl SteamProperties for If97Steam {
    fn saturation_temperature(&self, pressure_bar: f64) -> Result<f64, PropertyError> {
        saturation_temp_c_from_pressure_bar_abs(pressure_bar)
    }

    fn saturation_pressure(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        saturation_pressure_bar_abs_from_temp_c(temperature_c)
    }

    fn enthalpy_superheated(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, PropertyError> {
        ensure_region2(pressure_bar, temperature_c)?;
        let (h, _, _) = region2_props(pressure_bar, temperature_c)?;
        Ok(h / 1000.0)
    }

    fn enthalpy_vapor(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        let psat = saturation_pressure_bar_abs_from_temp_c(temperature_c)?;
        ensure_region2(psat, temperature_c)?;
        let (h, _, _) = region2_props(psat, temperature_c)?;
        Ok(h / 1000.0)
    }

    fn enthalpy_liquid(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        let psat = saturation_pressure_bar_abs_from_temp_c(temperature_c)?;
        let (h, _, _) = region1_props(psat, temperature_c)?;
        Ok(h / 1000.0)
    }
}
