//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use ronqi_core::prelude::*;
//! ```

// Contrato do dispositivo
pub use crate::traits::{SensorChannel, SensorDevice};

// Dados
pub use crate::reading::Reading;

// Erros
pub use crate::error::{MonitorError, MonitorResult};

// Dispositivos em memória
pub use crate::devices::{
    BreathingProfile,
    CallCounts,
    DeviceCall,
    ScriptedDevice,
    SimulatedDevice,
};
