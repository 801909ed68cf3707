//! # 🫁 ronqi-core — Contrato do Dispositivo RonQI2
//!
//! Define a fronteira entre o monitor de apneia e o hardware: o trait
//! [`SensorDevice`], os canais de sensor, a leitura pareada e os erros do
//! monitor.
//!
//! ## Canais
//!
//! | Canal | Grandeza | Operações |
//! |:------|:---------|:----------|
//! | Pressão | Fluxo/pressão respiratória | conectar, configurar, ler |
//! | Som | Ronco/ruído respiratório | conectar, configurar, ler |
//!
//! ## Exemplo
//!
//! ```
//! use ronqi_core::prelude::*;
//!
//! let mut device = ScriptedDevice::healthy().with_readings(25.0, 35.0);
//! assert!(device.connect(SensorChannel::Pressure));
//! assert_eq!(device.read(SensorChannel::Sound), 35.0);
//! ```
//!
//! ## Módulos
//!
//! - [`traits`]: `SensorDevice` e `SensorChannel`
//! - [`reading`]: `Reading` — par (pressão, som) capturado num instante
//! - [`error`]: `MonitorError` e `MonitorResult`
//! - [`devices`]: dispositivos em memória (roteirizado e simulado)

pub mod devices;
pub mod error;
pub mod prelude;
pub mod reading;
pub mod traits;

pub use devices::{BreathingProfile, CallCounts, DeviceCall, ScriptedDevice, SimulatedDevice};
pub use error::{MonitorError, MonitorResult};
pub use reading::Reading;
pub use traits::{SensorChannel, SensorDevice};
