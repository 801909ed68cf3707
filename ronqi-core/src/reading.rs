//! Leitura pareada de pressão e som

use serde::{Deserialize, Serialize};

use crate::traits::SensorChannel;

/// Par (pressão, som) capturado no mesmo instante.
///
/// Imutável depois de criado; o histórico guarda cópias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub pressure: f32,
    pub sound: f32,
}

impl Reading {
    pub const fn new(pressure: f32, sound: f32) -> Self {
        Self { pressure, sound }
    }

    /// Valor de um canal específico
    pub fn value(&self, channel: SensorChannel) -> f32 {
        match channel {
            SensorChannel::Pressure => self.pressure,
            SensorChannel::Sound => self.sound,
        }
    }

    /// Ambos os valores são finitos?
    pub fn is_finite(&self) -> bool {
        self.pressure.is_finite() && self.sound.is_finite()
    }
}

impl From<(f32, f32)> for Reading {
    fn from((pressure, sound): (f32, f32)) -> Self {
        Self::new(pressure, sound)
    }
}
