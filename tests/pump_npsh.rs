mod common;

use approx::assert_relative_eq;
use thermal_process_toolbox::conversion::PressureMode;
use thermal_process_toolbox::pump_npsh::{compute_pump_npsh, PumpLimits, PumpNpshInput};
use thermal_process_toolbox::WarningCategory;

use common::{assert_validation, FakeSteam};

fn base_input() -> PumpNpshInput {
    PumpNpshInput {
        suction_pressure_bar: 0.5,
        suction_pressure_mode: PressureMode::Gauge,
        liquid_temp_c: 25.0,
        static_head_m: 3.0,
        friction_loss_m: 1.0,
        npshr_m: 3.0,
        rho_kg_m3: 998.0,
    }
}

#[test]
fn pump_npsh_margin_above_one() {
    let res = compute_pump_npsh(&FakeSteam, &base_input(), &PumpLimits::default())
        .expect("npsh calc");
    assert_relative_eq!(res.suction_pressure_bar_abs, 1.51325, epsilon = 1e-9);
    assert_relative_eq!(res.vapour_pressure_bar_abs, (-2.5_f64).exp(), epsilon = 1e-12);
    assert_relative_eq!(res.npsha_m, 16.618, epsilon = 1e-3);
    assert!(res.margin_ratio > 1.1);
    assert!(res.warnings.is_empty());
}

#[test]
fn hot_liquid_under_vacuum_warns_about_cavitation() {
    let input = PumpNpshInput {
        suction_pressure_bar: 0.3,
        suction_pressure_mode: PressureMode::Absolute,
        liquid_temp_c: 60.0,
        static_head_m: 0.0,
        ..base_input()
    };
    let res = compute_pump_npsh(&FakeSteam, &input, &PumpLimits::default()).expect("npsh calc");
    assert!(res.margin_ratio < 1.1, "margin={}", res.margin_ratio);
    assert!(res
        .warnings
        .iter()
        .any(|w| w.category == WarningCategory::Cavitation));
}

#[test]
fn zero_npshr_gives_unbounded_margin() {
    let input = PumpNpshInput {
        npshr_m: 0.0,
        ..base_input()
    };
    let res = compute_pump_npsh(&FakeSteam, &input, &PumpLimits::default()).expect("npsh calc");
    assert!(res.margin_ratio.is_infinite());
}

#[test]
fn invalid_density_and_vacuum_are_rejected() {
    let limits = PumpLimits::default();
    assert_validation(
        compute_pump_npsh(
            &FakeSteam,
            &PumpNpshInput {
                rho_kg_m3: 0.0,
                ..base_input()
            },
            &limits,
        ),
        "density",
    );
    assert_validation(
        compute_pump_npsh(
            &FakeSteam,
            &PumpNpshInput {
                suction_pressure_bar: -1.2,
                ..base_input()
            },
            &limits,
        ),
        "absolute vacuum",
    );
}
