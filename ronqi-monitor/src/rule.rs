//! Regra de detecção de apneia
//!
//! Limiares fixos mais um predicado de combinação. A variante Silver exige
//! que ambos os canais atinjam seus limiares.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::history::Means;

/// Limiar de pressão média (inclusivo)
pub const PRESSURE_THRESHOLD: f32 = 20.0;

/// Limiar de som médio (inclusivo)
pub const SOUND_THRESHOLD: f32 = 30.0;

/// Como combinar os dois canais
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combination {
    /// Pressão E som acima dos limiares
    #[default]
    Both,
    /// Pressão OU som acima dos limiares
    Either,
}

impl Combination {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Combination::Both => "both",
            Combination::Either => "either",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" | "and" => Ok(Combination::Both),
            "either" | "or" => Ok(Combination::Either),
            other => Err(format!("unknown combination '{}' (expected both or either)", other)),
        }
    }
}

/// Regra de apneia: limiares + combinação
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApneaRule {
    pub pressure_threshold: f32,
    pub sound_threshold: f32,
    pub combination: Combination,
}

impl ApneaRule {
    /// Variante Silver: média de pressão >= 20.0 E média de som >= 30.0
    pub const SILVER: Self = Self {
        pressure_threshold: PRESSURE_THRESHOLD,
        sound_threshold: SOUND_THRESHOLD,
        combination: Combination::Both,
    };

    pub const fn new(pressure_threshold: f32, sound_threshold: f32, combination: Combination) -> Self {
        Self {
            pressure_threshold,
            sound_threshold,
            combination,
        }
    }

    pub fn pressure_exceeded(&self, mean_pressure: f32) -> bool {
        mean_pressure >= self.pressure_threshold
    }

    pub fn sound_exceeded(&self, mean_sound: f32) -> bool {
        mean_sound >= self.sound_threshold
    }

    /// Aplica a regra às médias da janela
    pub fn evaluate(&self, means: &Means) -> bool {
        let pressure = self.pressure_exceeded(means.pressure);
        let sound = self.sound_exceeded(means.sound);

        match self.combination {
            Combination::Both => pressure && sound,
            Combination::Either => pressure || sound,
        }
    }
}

impl Default for ApneaRule {
    fn default() -> Self {
        Self::SILVER
    }
}
