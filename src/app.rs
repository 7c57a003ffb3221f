use serde::Serialize;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::{to_bar_abs, PressureMode};
use crate::desuperheating::{DesuperheatingCalculator, DesuperheatingInput};
use crate::error::CalcError;
use crate::ncg::{NcgCalculator, NcgInput, NcgMode, NcgPressure};
use crate::pump_npsh::{compute_pump_npsh, PumpNpshInput};
use crate::steam::If97Steam;
use crate::ui_cli::{self, Command, DesuperheatArgs, NcgArgs, NcgModeArgs, NpshArgs};
use crate::units::pressure::to_bar;
use crate::units::{convert_mass_flow, convert_temperature, MassFlowUnit, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 계산 오류
    #[error(transparent)]
    Calc(#[from] CalcError),
    /// 결과 직렬화 오류
    #[error("failed to render result: {0}")]
    Render(#[from] toml::ser::Error),
}

impl AppError {
    /// 사용자에게 보여줄 오류 한 줄.
    pub fn report(&self) -> String {
        format!("오류: {self}")
    }
}

/// 명령 하나를 실행하고 결과를 출력한다.
pub fn run(command: &Command, config: &Config, as_toml: bool) -> Result<(), AppError> {
    let provider = If97Steam;
    match command {
        Command::Desuperheat(args) => {
            let calc = DesuperheatingCalculator::with_limits(provider, config.desuperheater);
            let result = calc.calculate(&desuperheating_input(args))?;
            emit(&result, as_toml, ui_cli::print_desuperheating)
        }
        Command::Ncg(args) => {
            let calc = NcgCalculator::with_solubility_range(provider, config.solubility);
            let result = calc.calculate(&ncg_input(args))?;
            emit(&result, as_toml, ui_cli::print_ncg)
        }
        Command::Npsh(args) => {
            let result = compute_pump_npsh(&provider, &npsh_input(args), &config.pump)?;
            emit(&result, as_toml, ui_cli::print_pump_npsh)
        }
    }
}

fn emit<T: Serialize>(result: &T, as_toml: bool, print: fn(&T)) -> Result<(), AppError> {
    if as_toml {
        print!("{}", toml::to_string_pretty(result)?);
    } else {
        print(result);
    }
    Ok(())
}

fn desuperheating_input(args: &DesuperheatArgs) -> DesuperheatingInput {
    let to_c = |t: f64| convert_temperature(t, args.temp_unit, TemperatureUnit::Celsius);
    DesuperheatingInput {
        steam_pressure_bar: to_bar_abs(
            args.pressure.pressure,
            args.pressure.pressure_unit,
            args.pressure.mode(),
        ),
        steam_temperature_c: to_c(args.inlet_temp),
        target_temperature_c: to_c(args.target_temp),
        spray_water_temperature_c: to_c(args.spray_temp),
        steam_flow_ton_per_hr: convert_mass_flow(
            args.flow,
            args.flow_unit,
            MassFlowUnit::TonPerHour,
        ),
    }
}

fn ncg_input(args: &NcgArgs) -> NcgInput {
    let p = &args.pressure;
    let pressure = if args.above_saturation {
        // 포화압력 위의 분압은 차압이므로 게이지/절대 환산을 하지 않는다.
        NcgPressure::NcgAboveSaturation {
            bar: to_bar(p.pressure, p.pressure_unit),
        }
    } else {
        NcgPressure::Total {
            bar: to_bar_abs(p.pressure, p.pressure_unit, p.mode()),
        }
    };
    let mode = match args.mode {
        NcgModeArgs::Seawater {
            flow_m3h,
            seawater_temp,
            salinity,
        } => NcgMode::Seawater {
            flow_m3_h: flow_m3h,
            temperature_c: seawater_temp,
            salinity_g_kg: salinity,
        },
        NcgModeArgs::Dry { flow_kg_h } => NcgMode::DryNcg { flow_kg_h },
        NcgModeArgs::Wet { flow_kg_h } => NcgMode::WetNcg { flow_kg_h },
    };
    NcgInput {
        temperature_c: args.temp,
        pressure,
        mode,
    }
}

fn npsh_input(args: &NpshArgs) -> PumpNpshInput {
    PumpNpshInput {
        suction_pressure_bar: args.suction_pressure,
        suction_pressure_mode: if args.gauge {
            PressureMode::Gauge
        } else {
            PressureMode::Absolute
        },
        liquid_temp_c: args.liquid_temp,
        static_head_m: args.static_head,
        friction_loss_m: args.friction_loss,
        npshr_m: args.npshr,
        rho_kg_m3: args.density,
    }
}
