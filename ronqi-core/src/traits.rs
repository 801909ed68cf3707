//! # 🎯 Traits — Contrato do Dispositivo de Sensores
//!
//! O monitor depende apenas de [`SensorDevice`]. Qualquer driver (hardware
//! real, simulador, dublê de teste) implementa exatamente este conjunto de
//! operações.
//!
//! ## Princípio de Design
//!
//! > *"Trait no core, implementação no driver."*
//!
//! Todas as operações booleanas podem falhar (`false`). O monitor nunca
//! repete uma chamada por conta própria.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

// ═══════════════════════════════════════════════════════════════════════════════
// CANAIS
// ═══════════════════════════════════════════════════════════════════════════════

/// Canal de medição independente do dispositivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorChannel {
    /// Sensor de pressão respiratória
    Pressure,
    /// Sensor de som (ronco)
    Sound,
}

impl SensorChannel {
    /// Ordem fixa de tratamento: pressão antes de som
    pub const ALL: [SensorChannel; 2] = [SensorChannel::Pressure, SensorChannel::Sound];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorChannel::Pressure => "pressure",
            SensorChannel::Sound => "sound",
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DISPOSITIVO
// ═══════════════════════════════════════════════════════════════════════════════

/// Dispositivo com dois canais de sensor (pressão e som).
///
/// # Exemplo
///
/// ```
/// use ronqi_core::traits::SensorDevice;
///
/// #[derive(Debug)]
/// struct Bench {
///     linked: bool,
/// }
///
/// impl SensorDevice for Bench {
///     fn connect_pressure_sensor(&mut self) -> bool { self.linked = true; true }
///     fn configure_pressure_sensor(&mut self) -> bool { true }
///     fn connect_sound_sensor(&mut self) -> bool { true }
///     fn configure_sound_sensor(&mut self) -> bool { true }
///     fn is_connected(&self) -> bool { self.linked }
///     fn read_pressure_sensor(&mut self) -> f32 { 12.5 }
///     fn read_sound_sensor(&mut self) -> f32 { 40.0 }
/// }
///
/// let mut bench = Bench { linked: false };
/// assert!(bench.connect_pressure_sensor());
/// assert!(bench.is_connected());
/// ```
pub trait SensorDevice: Debug {
    /// Conecta o sensor de pressão
    fn connect_pressure_sensor(&mut self) -> bool;

    /// Configura o sensor de pressão
    fn configure_pressure_sensor(&mut self) -> bool;

    /// Conecta o sensor de som
    fn connect_sound_sensor(&mut self) -> bool;

    /// Configura o sensor de som
    fn configure_sound_sensor(&mut self) -> bool;

    /// Dispositivo está conectado?
    fn is_connected(&self) -> bool;

    /// Lê o valor atual de pressão
    fn read_pressure_sensor(&mut self) -> f32;

    /// Lê o valor atual de som
    fn read_sound_sensor(&mut self) -> f32;

    /// Conecta o canal indicado
    fn connect(&mut self, channel: SensorChannel) -> bool {
        match channel {
            SensorChannel::Pressure => self.connect_pressure_sensor(),
            SensorChannel::Sound => self.connect_sound_sensor(),
        }
    }

    /// Configura o canal indicado
    fn configure(&mut self, channel: SensorChannel) -> bool {
        match channel {
            SensorChannel::Pressure => self.configure_pressure_sensor(),
            SensorChannel::Sound => self.configure_sound_sensor(),
        }
    }

    /// Lê o canal indicado
    fn read(&mut self, channel: SensorChannel) -> f32 {
        match channel {
            SensorChannel::Pressure => self.read_pressure_sensor(),
            SensorChannel::Sound => self.read_sound_sensor(),
        }
    }
}

// Referência emprestada: o monitor usa o dispositivo sem possuí-lo.
impl<D: SensorDevice + ?Sized> SensorDevice for &mut D {
    fn connect_pressure_sensor(&mut self) -> bool {
        (**self).connect_pressure_sensor()
    }

    fn configure_pressure_sensor(&mut self) -> bool {
        (**self).configure_pressure_sensor()
    }

    fn connect_sound_sensor(&mut self) -> bool {
        (**self).connect_sound_sensor()
    }

    fn configure_sound_sensor(&mut self) -> bool {
        (**self).configure_sound_sensor()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn read_pressure_sensor(&mut self) -> f32 {
        (**self).read_pressure_sensor()
    }

    fn read_sound_sensor(&mut self) -> f32 {
        (**self).read_sound_sensor()
    }
}

impl<D: SensorDevice + ?Sized> SensorDevice for Box<D> {
    fn connect_pressure_sensor(&mut self) -> bool {
        (**self).connect_pressure_sensor()
    }

    fn configure_pressure_sensor(&mut self) -> bool {
        (**self).configure_pressure_sensor()
    }

    fn connect_sound_sensor(&mut self) -> bool {
        (**self).connect_sound_sensor()
    }

    fn configure_sound_sensor(&mut self) -> bool {
        (**self).configure_sound_sensor()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn read_pressure_sensor(&mut self) -> f32 {
        (**self).read_pressure_sensor()
    }

    fn read_sound_sensor(&mut self) -> f32 {
        (**self).read_sound_sensor()
    }
}
