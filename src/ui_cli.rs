//! 명령행 인터페이스 정의와 결과 출력.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::conversion::{
    parse_mass_flow_unit, parse_pressure_unit, parse_temperature_unit, PressureMode,
};
use crate::desuperheating::DesuperheatingResult;
use crate::ncg::NcgResult;
use crate::pump_npsh::PumpNpshResult;
use crate::units::{MassFlowUnit, PressureUnit, TemperatureUnit};
use crate::warning::Warning;

#[derive(Debug, Parser)]
#[command(name = "thermal_process_toolbox")]
#[command(about = "Thermal process calculators: desuperheating, NCG mixture properties, pump NPSH")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 결과를 TOML로 출력
    #[arg(long, global = true)]
    pub toml: bool,
    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Spray-water sizing for a desuperheater
    Desuperheat(DesuperheatArgs),
    /// Water vapour / non-condensable gas mixture properties
    Ncg(NcgArgs),
    /// Net positive suction head available
    Npsh(NpshArgs),
}

/// 압력 입력 공통 옵션.
#[derive(Debug, Args)]
pub struct PressureArgs {
    /// 압력 값
    #[arg(long)]
    pub pressure: f64,
    /// 압력 단위 (bar, kPa, MPa, psi, atm, mmHg ...)
    #[arg(long, default_value = "bar", value_parser = parse_pressure_unit)]
    pub pressure_unit: PressureUnit,
    /// 게이지 압력으로 해석
    #[arg(long)]
    pub gauge: bool,
}

impl PressureArgs {
    pub fn mode(&self) -> PressureMode {
        if self.gauge {
            PressureMode::Gauge
        } else {
            PressureMode::Absolute
        }
    }
}

#[derive(Debug, Args)]
pub struct DesuperheatArgs {
    #[command(flatten)]
    pub pressure: PressureArgs,
    /// 입구 증기 온도
    #[arg(long)]
    pub inlet_temp: f64,
    /// 목표 출구 온도
    #[arg(long)]
    pub target_temp: f64,
    /// 분사수 온도
    #[arg(long)]
    pub spray_temp: f64,
    /// 온도 단위 (C, K, F)
    #[arg(long, default_value = "C", value_parser = parse_temperature_unit)]
    pub temp_unit: TemperatureUnit,
    /// 증기 유량
    #[arg(long)]
    pub flow: f64,
    /// 유량 단위 (t/h, kg/h, kg/s, lb/h)
    #[arg(long, default_value = "t/h", value_parser = parse_mass_flow_unit)]
    pub flow_unit: MassFlowUnit,
}

#[derive(Debug, Args)]
pub struct NcgArgs {
    /// 혼합물 온도(°C)
    #[arg(long)]
    pub temp: f64,
    #[command(flatten)]
    pub pressure: PressureArgs,
    /// 압력을 포화압력 위의 NCG 분압으로 해석 (차압이므로 --gauge와 함께 쓸 수 없다)
    #[arg(long, conflicts_with = "gauge")]
    pub above_saturation: bool,
    #[command(subcommand)]
    pub mode: NcgModeArgs,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum NcgModeArgs {
    /// NCG released from a seawater feed
    Seawater {
        /// 해수 유량(m³/h)
        #[arg(long)]
        flow_m3h: Option<f64>,
        /// 해수 온도(°C)
        #[arg(long)]
        seawater_temp: f64,
        /// 염분(g/kg)
        #[arg(long, default_value_t = 35.0)]
        salinity: f64,
    },
    /// Dry NCG mass flow given
    Dry {
        /// 건조 NCG 유량(kg/h)
        #[arg(long)]
        flow_kg_h: Option<f64>,
    },
    /// Wet (vapour + NCG) mass flow given
    Wet {
        /// 전체 유량(kg/h)
        #[arg(long)]
        flow_kg_h: Option<f64>,
    },
}

#[derive(Debug, Args)]
pub struct NpshArgs {
    /// 흡입 압력(bar)
    #[arg(long)]
    pub suction_pressure: f64,
    /// 게이지 압력으로 해석
    #[arg(long)]
    pub gauge: bool,
    /// 액체 온도(°C)
    #[arg(long)]
    pub liquid_temp: f64,
    /// 정수두(m)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub static_head: f64,
    /// 흡입 마찰손실(m)
    #[arg(long, default_value_t = 0.0)]
    pub friction_loss: f64,
    /// 요구 NPSH(m)
    #[arg(long)]
    pub npshr: f64,
    /// 밀도(kg/m³)
    #[arg(long, default_value_t = 998.0)]
    pub density: f64,
}

fn print_warnings(warnings: &[Warning]) {
    for w in warnings {
        println!("경고 {w}");
    }
}

pub fn print_desuperheating(r: &DesuperheatingResult) {
    println!("포화 온도: {:.2} °C", r.saturation_temperature);
    println!(
        "입구 과열도: {:.2} °C, 출구 과열도: {:.2} °C",
        r.degrees_of_superheat, r.outlet_superheat
    );
    println!(
        "엔탈피 [kJ/kg]: 증기 {:.2}, 목표 {:.2}, 분사수 {:.2}",
        r.steam_enthalpy, r.target_enthalpy, r.spray_water_enthalpy
    );
    println!("분사수/증기 비: {:.4}", r.water_to_steam_ratio);
    println!(
        "분사수 유량: {:.3} t/h, 출구 유량: {:.3} t/h",
        r.spray_water_flow, r.total_outlet_flow
    );
    println!("제거 열량: {:.1} kW", r.heat_removed);
    print_warnings(&r.warnings);
}

pub fn print_ncg(r: &NcgResult) {
    println!(
        "압력 [bar a]: 전압 {:.5}, 포화 {:.5}, 수증기 분압 {:.5}, NCG 분압 {:.5}",
        r.total_pressure_bar,
        r.saturation_pressure_bar,
        r.water_vapour_partial_pressure_bar,
        r.ncg_partial_pressure_bar
    );
    println!(
        "몰분율: 수증기 {:.4}, NCG {:.4} / 질량분율: 수증기 {:.4}, NCG {:.4}",
        r.water_vapour_mole_fraction,
        r.ncg_mole_fraction,
        r.water_vapour_mass_fraction,
        r.ncg_mass_fraction
    );
    println!("혼합 몰질량: {:.3} g/mol", r.mixture_molar_mass);
    println!(
        "밀도: {:.5} kg/m³, 비체적: {:.4} m³/kg",
        r.density, r.specific_volume
    );
    println!(
        "비엔탈피: {:.2} kJ/kg (수증기 {:.2} + NCG {:.2})",
        r.specific_enthalpy, r.water_vapour_enthalpy, r.ncg_enthalpy
    );
    println!(
        "cp: {:.4}, cv: {:.4} kJ/(kg·K), γ: {:.4}",
        r.cp, r.cv, r.gamma
    );
    println!(
        "점도: {:.4e} Pa·s, 열전도율: {:.5} W/(m·K)",
        r.dynamic_viscosity, r.thermal_conductivity
    );
    if let Some(f) = &r.flow {
        println!(
            "유량 [kg/h]: 건조 NCG {:.3}, 수증기 {:.3}, 합계 {:.3} ({:.3} m³/h)",
            f.dry_ncg_flow_kg_h, f.water_vapour_flow_kg_h, f.total_flow_kg_h, f.volumetric_flow_m3_h
        );
    }
    if let Some(sw) = &r.seawater_info {
        println!(
            "용존 기체: O₂ {:.3} mL/L ({:.3} mg/L), N₂ {:.3} mL/L ({:.3} mg/L){}",
            sw.o2_ml_per_l,
            sw.o2_mg_per_l,
            sw.n2_ml_per_l,
            sw.n2_mg_per_l,
            if sw.extrapolated { " [외삽]" } else { "" }
        );
    }
    print_warnings(&r.warnings);
}

pub fn print_pump_npsh(r: &PumpNpshResult) {
    println!(
        "흡입 절대압: {:.4} bar, 증기압: {:.4} bar",
        r.suction_pressure_bar_abs, r.vapour_pressure_bar_abs
    );
    println!("NPSHa: {:.2} m, Margin: {:.2}", r.npsha_m, r.margin_ratio);
    print_warnings(&r.warnings);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_saturation_rejects_gauge() {
        let err = Cli::try_parse_from([
            "thermal_process_toolbox",
            "ncg",
            "--temp",
            "60",
            "--pressure",
            "0.1",
            "--gauge",
            "--above-saturation",
            "dry",
        ])
        .expect_err("conflicting flags");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn above_saturation_alone_parses() {
        let cli = Cli::try_parse_from([
            "thermal_process_toolbox",
            "ncg",
            "--temp",
            "60",
            "--pressure",
            "0.1",
            "--above-saturation",
            "dry",
            "--flow-kg-h",
            "5",
        ])
        .expect("valid arguments");
        match cli.command {
            Command::Ncg(args) => {
                assert!(args.above_saturation);
                assert!(!args.pressure.gauge);
                assert_eq!(args.mode, NcgModeArgs::Dry { flow_kg_h: Some(5.0) });
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
