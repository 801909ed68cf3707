//! Configuração do monitor (`ronqi.toml` + ambiente)
//!
//! Os valores vêm de, em ordem crescente de prioridade:
//! 1. padrões embutidos (limiares Silver, janela de 5 leituras)
//! 2. um arquivo TOML
//! 3. variáveis de ambiente `RONQI_*`, opcionalmente carregadas de `.env`

use std::env;
use std::path::Path;

use once_cell::sync::Lazy;
use ronqi_core::{MonitorError, MonitorResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::history::HISTORY_CAPACITY;
use crate::rule::{ApneaRule, Combination, PRESSURE_THRESHOLD, SOUND_THRESHOLD};

pub const ENV_PRESSURE_THRESHOLD: &str = "RONQI_PRESSURE_THRESHOLD";
pub const ENV_SOUND_THRESHOLD: &str = "RONQI_SOUND_THRESHOLD";
pub const ENV_HISTORY_CAPACITY: &str = "RONQI_HISTORY_CAPACITY";
pub const ENV_COMBINATION: &str = "RONQI_COMBINATION";

// Carrega o .env uma única vez, na primeira consulta ao ambiente
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Configuração do monitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Limiar da média de pressão (inclusivo)
    #[serde(default = "default_pressure_threshold")]
    pub pressure_threshold: f32,

    /// Limiar da média de som (inclusivo)
    #[serde(default = "default_sound_threshold")]
    pub sound_threshold: f32,

    /// Número de leituras mantidas na janela deslizante
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Como as verificações dos dois canais são combinadas
    #[serde(default)]
    pub combination: Combination,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            pressure_threshold: default_pressure_threshold(),
            sound_threshold: default_sound_threshold(),
            history_capacity: default_history_capacity(),
            combination: Combination::default(),
        }
    }
}

fn default_pressure_threshold() -> f32 {
    PRESSURE_THRESHOLD
}

fn default_sound_threshold() -> f32 {
    SOUND_THRESHOLD
}

fn default_history_capacity() -> usize {
    HISTORY_CAPACITY
}

impl MonitorConfig {
    /// Lê a configuração de uma string TOML
    pub fn from_toml_str(content: &str) -> MonitorResult<Self> {
        toml::from_str(content)
            .map_err(|e| MonitorError::Config(format!("Failed to parse ronqi.toml: {}", e)))
    }

    /// Carrega a configuração de um arquivo
    pub fn from_file(path: &Path) -> MonitorResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MonitorError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Serializa a configuração em TOML
    pub fn to_toml_string(&self) -> MonitorResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Padrões sobrescritos pelo ambiente do processo (e `.env`)
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Aplica as variáveis `RONQI_*` do ambiente do processo (e `.env`)
    pub fn with_env(self) -> Self {
        let _ = &*DOTENV_INIT;
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Aplica sobrescritas a partir de uma busca arbitrária por chave.
    ///
    /// Valores inválidos são ignorados com um aviso e o valor atual permanece.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_override(&lookup, ENV_PRESSURE_THRESHOLD) {
            self.pressure_threshold = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_SOUND_THRESHOLD) {
            self.sound_threshold = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_HISTORY_CAPACITY) {
            self.history_capacity = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_COMBINATION) {
            self.combination = value;
        }
        self
    }

    /// Verifica se a configuração descreve um monitor utilizável
    pub fn validate(&self) -> MonitorResult<()> {
        if self.history_capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "history_capacity must be >= 1".into(),
            ));
        }

        if !self.pressure_threshold.is_finite() {
            return Err(MonitorError::InvalidConfig(
                "pressure_threshold must be a finite number".into(),
            ));
        }

        if !self.sound_threshold.is_finite() {
            return Err(MonitorError::InvalidConfig(
                "sound_threshold must be a finite number".into(),
            ));
        }

        Ok(())
    }

    /// Regra de apneia descrita por esta configuração
    pub fn rule(&self) -> ApneaRule {
        ApneaRule::new(self.pressure_threshold, self.sound_threshold, self.combination)
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable configuration override");
            None
        }
    }
}
