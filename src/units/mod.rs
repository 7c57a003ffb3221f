//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod pressure;
pub mod temperature;

pub use flow::{convert_mass_flow, kg_s_to_ton_hr, ton_hr_to_kg_s, ton_hr_to_m3_s, MassFlowUnit};
pub use pressure::{bar_to_head, convert_pressure, head_to_bar, PressureUnit};
pub use temperature::{celsius_to_kelvin, convert_temperature, TemperatureUnit};
