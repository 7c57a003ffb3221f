//! 기체 혼합물 수송 물성(점도, 열전도율) 혼합 규칙.
//!
//! - 점도: Wilke (1950)
//! - 열전도율: Wassiljewa (1904) 형식 + Mason–Saxena (1958) 상호작용 계수
//!
//! 두 규칙 모두 같은 구조를 가진다.
//!
//! ```text
//! φ_ij  = [1 + sqrt(p_i/p_j)·(M_j/M_i)^0.25]² / sqrt(8·(1 + M_i/M_j))
//! p_mix = Σ_i y_i·p_i / Σ_j y_j·φ_ij
//! ```

use crate::constants::ZERO_C_IN_K;

/// 혼합 계산에 쓰이는 순성분 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixComponent {
    /// 몰분율
    pub mole_fraction: f64,
    /// 몰질량 [g/mol]
    pub molar_mass: f64,
    /// 순성분 물성값 (점도 또는 열전도율)
    pub value: f64,
}

/// 성분 i, j 사이의 상호작용 계수 φ_ij.
pub fn interaction(value_i: f64, value_j: f64, m_i: f64, m_j: f64) -> f64 {
    let num = 1.0 + (value_i / value_j).sqrt() * (m_j / m_i).powf(0.25);
    num * num / (8.0 * (1.0 + m_i / m_j)).sqrt()
}

fn mix(components: &[MixComponent]) -> f64 {
    components
        .iter()
        .filter(|c| c.mole_fraction > 0.0)
        .map(|ci| {
            let denom: f64 = components
                .iter()
                .map(|cj| {
                    cj.mole_fraction * interaction(ci.value, cj.value, ci.molar_mass, cj.molar_mass)
                })
                .sum();
            ci.mole_fraction * ci.value / denom
        })
        .sum()
}

/// Wilke 규칙으로 혼합 점도(Pa·s)를 구한다.
pub fn wilke_viscosity(components: &[MixComponent]) -> f64 {
    mix(components)
}

/// Wassiljewa/Mason–Saxena 규칙으로 혼합 열전도율(W/(m·K))을 구한다.
pub fn mason_saxena_conductivity(components: &[MixComponent]) -> f64 {
    mix(components)
}

// ---------------- 순성분 상관식 ----------------

/// 공기 점도(Pa·s), Sutherland 식.
pub fn air_viscosity(t_c: f64) -> f64 {
    sutherland(t_c + ZERO_C_IN_K, 1.716e-5, 110.4)
}

/// 공기 열전도율(W/(m·K)), Sutherland 식.
pub fn air_conductivity(t_c: f64) -> f64 {
    sutherland(t_c + ZERO_C_IN_K, 0.0241, 194.0)
}

fn sutherland(t_k: f64, ref_value: f64, s: f64) -> f64 {
    let t0 = ZERO_C_IN_K;
    ref_value * (t_k / t0).powf(1.5) * (t0 + s) / (t_k + s)
}

/// 저압 수증기 점도(Pa·s). 선형 근사.
pub fn water_vapour_viscosity(t_c: f64) -> f64 {
    (0.407 * t_c + 80.4) * 1e-7
}

/// 저압 수증기 열전도율(W/(m·K)). 2차 근사.
pub fn water_vapour_conductivity(t_c: f64) -> f64 {
    0.0176 + 5.87e-5 * t_c + 1.04e-7 * t_c * t_c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(y_a: f64, value_a: f64, value_b: f64) -> [MixComponent; 2] {
        [
            MixComponent {
                mole_fraction: y_a,
                molar_mass: 18.015,
                value: value_a,
            },
            MixComponent {
                mole_fraction: 1.0 - y_a,
                molar_mass: 28.97,
                value: value_b,
            },
        ]
    }

    #[test]
    fn self_interaction_is_unity() {
        assert!((interaction(1.2e-5, 1.2e-5, 28.97, 28.97) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pure_component_limits() {
        let mu_w = water_vapour_viscosity(60.0);
        let mu_a = air_viscosity(60.0);
        assert!((wilke_viscosity(&binary(1.0, mu_w, mu_a)) - mu_w).abs() < 1e-15);
        assert!((wilke_viscosity(&binary(0.0, mu_w, mu_a)) - mu_a).abs() < 1e-15);
    }

    #[test]
    fn order_of_components_does_not_matter() {
        let mix_ab = binary(0.3, 1.1e-5, 1.9e-5);
        let mix_ba = [mix_ab[1], mix_ab[0]];
        assert!((mason_saxena_conductivity(&mix_ab) - mason_saxena_conductivity(&mix_ba)).abs() < 1e-18);
    }

    #[test]
    fn mixture_lies_between_pure_values() {
        let lam_w = water_vapour_conductivity(80.0);
        let lam_a = air_conductivity(80.0);
        let lam = mason_saxena_conductivity(&binary(0.5, lam_w, lam_a));
        assert!(lam > lam_w.min(lam_a) && lam < lam_w.max(lam_a), "lam={lam}");
    }

    #[test]
    fn air_reference_values() {
        // 20 °C 공기: μ ≈ 1.81e-5 Pa·s, λ ≈ 0.0257 W/(m·K)
        assert!((air_viscosity(20.0) - 1.81e-5).abs() < 2e-7);
        assert!((air_conductivity(20.0) - 0.0257).abs() < 5e-4);
    }

    #[test]
    fn equimolar_vapour_air_at_100c() {
        // 100 °C, y_w = 0.5. φ 값은 식에 직접 대입해 손으로 구한 값.
        let mu_w = water_vapour_viscosity(100.0);
        let mu_a = air_viscosity(100.0);
        assert!((mu_w - 1.211e-5).abs() < 1e-12);
        assert!((mu_a - 2.173_308e-5).abs() < 1e-10);

        let phi_wa = interaction(mu_w, mu_a, 18.015, 28.97);
        let phi_aw = interaction(mu_a, mu_w, 28.97, 18.015);
        assert!((phi_wa - 0.940_522_18).abs() < 1e-8, "phi_wa={phi_wa}");
        assert!((phi_aw - 1.049_619_56).abs() < 1e-8, "phi_aw={phi_aw}");

        // μ = 0.5·μ_w/(0.5 + 0.5·φ_wa) + 0.5·μ_a/(0.5·φ_aw + 0.5)
        let mu = wilke_viscosity(&binary(0.5, mu_w, mu_a));
        assert!((mu - 1.684_405_77e-5).abs() < 1e-13, "mu={mu}");

        let lam_w = water_vapour_conductivity(100.0);
        let lam_a = air_conductivity(100.0);
        let phi_wa = interaction(lam_w, lam_a, 18.015, 28.97);
        let phi_aw = interaction(lam_a, lam_w, 28.97, 18.015);
        assert!((phi_wa - 1.099_691_39).abs() < 1e-8, "phi_wa={phi_wa}");
        assert!((phi_aw - 0.884_325_42).abs() < 1e-8, "phi_aw={phi_aw}");
        let lam = mason_saxena_conductivity(&binary(0.5, lam_w, lam_a));
        assert!((lam - 0.028_493_799).abs() < 1e-9, "lam={lam}");
    }
}
