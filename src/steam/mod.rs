//! 증기/물 물성 제공자 계약과 IAPWS-IF97 구현.

pub mod if97;
pub mod provider;

pub use if97::If97Steam;
pub use provider::SteamProperties;
