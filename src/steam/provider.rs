//! 계산기가 요구하는 증기/물 물성 제공자 계약.
//!
//! 계산기는 구체 물성 라이브러리에 묶이지 않고 이 트레이트만 사용한다.
//! 운영 환경에서는 [`super::if97::If97Steam`]을, 테스트에서는 결정적인 가짜 구현을 주입한다.
//! 모든 메서드는 부수효과가 없어야 하며 동시에 여러 계산에서 호출될 수 있다.

use crate::error::PropertyError;

/// 증기/물 물성 제공자. 압력은 bar(abs), 온도는 °C, 엔탈피는 kJ/kg.
pub trait SteamProperties {
    /// 압력에 대한 포화온도(°C)
    fn saturation_temperature(&self, pressure_bar: f64) -> Result<f64, PropertyError>;

    /// 온도에 대한 포화압력(bar abs)
    fn saturation_pressure(&self, temperature_c: f64) -> Result<f64, PropertyError>;

    /// 주어진 상태가 과열 증기인지 판정한다.
    fn is_superheated(&self, pressure_bar: f64, temperature_c: f64) -> Result<bool, PropertyError> {
        Ok(temperature_c > self.saturation_temperature(pressure_bar)?)
    }

    /// 과열 증기 비엔탈피
    fn enthalpy_superheated(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, PropertyError>;

    /// 해당 온도의 포화 증기 비엔탈피
    fn enthalpy_vapor(&self, temperature_c: f64) -> Result<f64, PropertyError>;

    /// 해당 온도의 포화(압축)수 비엔탈피
    fn enthalpy_liquid(&self, temperature_c: f64) -> Result<f64, PropertyError>;
}

impl<T: SteamProperties + ?Sized> SteamProperties for &T {
    fn saturation_temperature(&self, pressure_bar: f64) -> Result<f64, PropertyError> {
        (**self).saturation_temperature(pressure_bar)
    }

    fn saturation_pressure(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        (**self).saturation_pressure(temperature_c)
    }

    fn is_superheated(&self, pressure_bar: f64, temperature_c: f64) -> Result<bool, PropertyError> {
        (**self).is_superheated(pressure_bar, temperature_c)
    }

    fn enthalpy_superheated(
        &self,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<f64, PropertyError> {
        (**self).enthalpy_superheated(pressure_bar, temperature_c)
    }

    fn enthalpy_vapor(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        (**self).enthalpy_vapor(temperature_c)
    }

    fn enthalpy_liquid(&self, temperature_c: f64) -> Result<f64, PropertyError> {
        (**self).enthalpy_liquid(temperature_c)
    }
}
