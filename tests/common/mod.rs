//! 실제 증기표 대신 쓰는 결정적 가짜 물성 제공자.
#![allow(dead_code)]

use thermal_process_toolbox::steam::SteamProperties;
use thermal_process_toolbox::PropertyError;

/// Tsat(P) = 100 + 30·ln(P), h_super = 2500 + Tsat + 2·(T − Tsat),
/// h_vapor(T) = 2500 + T, h_liquid(T) = 4.18·T
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeSteam;

impl SteamProperties for FakeSteam {
    fn saturation_temperature(&self, pressure_bar: f64) -> Result<f64, PropertyError> {
        if pressure_bar <= 0.0 {
            return Err(PropertyError::new("pressure must be positive"));
        }
        Ok(100.0 + 30.0 * pressure_bar.ln())
    }

    fn saturation_pressure(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        Ok(((temperature_c - 100.0) / 30.0).exp())
    }

    fn enthalpy_superheated(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, PropertyError> {
        let tsat = self.saturation_temperature(pressure_bar)?;
        Ok(2500.0 + tsat + 2.0 * (temperature_c - tsat))
    }

    fn enthalpy_vapor(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        Ok(2500.0 + temperature_c)
    }

    fn enthalpy_liquid(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        Ok(4.18 * temperature_c)
    }
}

/// 포화 증기 엔탈피만 `offset`만큼 어긋난 가짜 제공자. 어떤 식이 쓰였는지 구분하는 용도.
#[derive(Debug, Clone, Copy)]
pub struct OffsetVapour(pub f64);

impl SteamProperties for OffsetVapour {
    fn saturation_temperature(&self, pressure_bar: f64) -> Result<f64, PropertyError> {
        FakeSteam.saturation_temperature(pressure_bar)
    }

    fn saturation_pressure(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        FakeSteam.saturation_pressure(temperature_c)
    }

    fn enthalpy_superheated(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, PropertyError> {
        FakeSteam.enthalpy_superheated(pressure_bar, temperature_c)
    }

    fn enthalpy_vapor(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        Ok(FakeSteam.enthalpy_vapor(temperature_c)? + self.0)
    }

    fn enthalpy_liquid(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        FakeSteam.enthalpy_liquid(temperature_c)
    }
}

pub fn assert_validation<T: std::fmt::Debug>(
    result: Result<T, thermal_process_toolbox::CalcError>,
    needle: &str,
) {
    match result {
        Err(thermal_process_toolbox::CalcError::Validation(msg)) => assert!(
            msg.contains(needle),
            "expected message containing {needle:?}, got {msg:?}"
        ),
        other => panic!("expected validation error containing {needle:?}, got {other:?}"),
    }
}
