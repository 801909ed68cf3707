//! # 🌙 ronqi-monitor — Monitor de Apneia do Sono
//!
//! Implementa a lógica RonQI2 sobre um [`ronqi_core::SensorDevice`]:
//! inicialização e reconexão dos dois sensores, janela deslizante das
//! últimas leituras e avaliação de apneia por limiar.
//!
//! ## Regra Silver
//!
//! | Canal | Limiar (média) |
//! |:------|:---------------|
//! | Pressão | ≥ 20.0 |
//! | Som | ≥ 30.0 |
//!
//! Apneia somente quando **ambos** os limiares são atingidos, sobre as
//! últimas 5 leituras (ou menos, se ainda não houver 5).
//!
//! ## Exemplo
//!
//! ```
//! use ronqi_core::ScriptedDevice;
//! use ronqi_monitor::{ApneaMonitor, MonitorState};
//!
//! let mut monitor = ApneaMonitor::new();
//! monitor.attach_device(ScriptedDevice::healthy().with_readings(10.0, 10.0));
//!
//! assert!(monitor.initialize()?);
//! assert_eq!(monitor.state(), MonitorState::Ready);
//!
//! monitor.acquire_reading()?;
//! assert!(!monitor.evaluate_apnea());
//! # Ok::<(), ronqi_core::MonitorError>(())
//! ```

pub mod config;
pub mod history;
pub mod monitor;
pub mod rule;

pub use config::MonitorConfig;
pub use history::{HISTORY_CAPACITY, Means, ReadingHistory};
pub use monitor::{ApneaAssessment, ApneaMonitor, MonitorState};
pub use rule::{ApneaRule, Combination, PRESSURE_THRESHOLD, SOUND_THRESHOLD};

// Re-export core types
pub use ronqi_core::prelude::*;
