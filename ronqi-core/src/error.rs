//! Erros do monitor de apneia
//!
//! Falhas de sensor não são erros: o contrato do dispositivo as reporta como
//! `false`. Os erros aqui cobrem uso incorreto do monitor e configuração.

use thiserror::Error;

pub type MonitorResult<T> = Result<T, MonitorError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MonitorError {
    #[error("No sensor device attached")]
    NoDeviceAttached,

    #[error("Reading history is empty")]
    EmptyHistory,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
