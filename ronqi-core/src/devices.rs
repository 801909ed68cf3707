//! Dispositivos em memória
//!
//! - [`ScriptedDevice`]: respostas roteirizadas e contadores por chamada,
//!   usado no lugar de um framework de mocks.
//! - [`SimulatedDevice`]: respiração sintética determinística para demos.

use std::cell::Cell;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reading::Reading;
use crate::traits::{SensorChannel, SensorDevice};

// ═══════════════════════════════════════════════════════════════════════════════
// CONTADORES DE CHAMADA
// ═══════════════════════════════════════════════════════════════════════════════

/// Operação do contrato [`SensorDevice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCall {
    ConnectPressure,
    ConfigurePressure,
    ConnectSound,
    ConfigureSound,
    IsConnected,
    ReadPressure,
    ReadSound,
}

impl DeviceCall {
    pub const ALL: [DeviceCall; 7] = [
        DeviceCall::ConnectPressure,
        DeviceCall::ConfigurePressure,
        DeviceCall::ConnectSound,
        DeviceCall::ConfigureSound,
        DeviceCall::IsConnected,
        DeviceCall::ReadPressure,
        DeviceCall::ReadSound,
    ];

    const fn index(self) -> usize {
        match self {
            DeviceCall::ConnectPressure => 0,
            DeviceCall::ConfigurePressure => 1,
            DeviceCall::ConnectSound => 2,
            DeviceCall::ConfigureSound => 3,
            DeviceCall::IsConnected => 4,
            DeviceCall::ReadPressure => 5,
            DeviceCall::ReadSound => 6,
        }
    }

    /// Chamada de conexão do canal
    pub const fn connect(channel: SensorChannel) -> Self {
        match channel {
            SensorChannel::Pressure => DeviceCall::ConnectPressure,
            SensorChannel::Sound => DeviceCall::ConnectSound,
        }
    }

    /// Chamada de configuração do canal
    pub const fn configure(channel: SensorChannel) -> Self {
        match channel {
            SensorChannel::Pressure => DeviceCall::ConfigurePressure,
            SensorChannel::Sound => DeviceCall::ConfigureSound,
        }
    }
}

/// Quantas vezes cada operação foi chamada
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    counts: [u32; 7],
}

impl CallCounts {
    pub fn get(&self, call: DeviceCall) -> u32 {
        self.counts[call.index()]
    }

    /// Total de chamadas de conexão (ambos os canais)
    pub fn connects(&self) -> u32 {
        self.get(DeviceCall::ConnectPressure) + self.get(DeviceCall::ConnectSound)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn record(&mut self, call: DeviceCall) {
        self.counts[call.index()] += 1;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DISPOSITIVO ROTEIRIZADO
// ═══════════════════════════════════════════════════════════════════════════════

/// Dublê de teste com respostas roteirizadas.
///
/// - Conectar/configurar devolvem a resposta roteirizada (padrão `true`).
/// - Uma conexão bem-sucedida marca o canal como ligado; `is_connected` é
///   verdadeiro quando ambos os canais estão ligados.
/// - Leituras percorrem a sequência roteirizada ciclicamente (0.0 se vazia).
/// - Toda chamada é contada, inclusive `is_connected`.
#[derive(Debug, Clone)]
pub struct ScriptedDevice {
    responses: [bool; 4],
    pressure_linked: bool,
    sound_linked: bool,
    readings: Vec<Reading>,
    pressure_cursor: usize,
    sound_cursor: usize,
    calls: Cell<CallCounts>,
}

impl ScriptedDevice {
    /// Dispositivo desconectado cujas operações sempre têm sucesso
    pub fn healthy() -> Self {
        Self {
            responses: [true; 4],
            pressure_linked: false,
            sound_linked: false,
            readings: Vec::new(),
            pressure_cursor: 0,
            sound_cursor: 0,
            calls: Cell::new(CallCounts::default()),
        }
    }

    /// Define a resposta de uma operação de conexão/configuração.
    ///
    /// Status e leituras não têm resposta booleana e são ignorados.
    pub fn with_response(mut self, call: DeviceCall, ok: bool) -> Self {
        if let Some(slot) = self.responses.get_mut(call.index()) {
            *slot = ok;
        }
        self
    }

    /// Atalho para `with_response(call, false)`
    pub fn failing(self, call: DeviceCall) -> Self {
        self.with_response(call, false)
    }

    /// Começa com ambos os canais ligados
    pub fn connected(mut self) -> Self {
        self.pressure_linked = true;
        self.sound_linked = true;
        self
    }

    /// Leituras constantes
    pub fn with_readings(self, pressure: f32, sound: f32) -> Self {
        self.with_sequence(vec![Reading::new(pressure, sound)])
    }

    /// Sequência de leituras, repetida ciclicamente
    pub fn with_sequence(mut self, readings: Vec<Reading>) -> Self {
        self.readings = readings;
        self.pressure_cursor = 0;
        self.sound_cursor = 0;
        self
    }

    /// Simula perda de conexão em ambos os canais
    pub fn disconnect(&mut self) {
        self.pressure_linked = false;
        self.sound_linked = false;
    }

    /// Contadores acumulados
    pub fn calls(&self) -> CallCounts {
        self.calls.get()
    }

    pub fn count(&self, call: DeviceCall) -> u32 {
        self.calls.get().get(call)
    }

    pub fn reset_calls(&mut self) {
        self.calls.set(CallCounts::default());
    }

    fn record(&self, call: DeviceCall) {
        let mut counts = self.calls.get();
        counts.record(call);
        self.calls.set(counts);
    }

    fn respond(&self, call: DeviceCall) -> bool {
        self.record(call);
        self.responses[call.index()]
    }

    fn next_value(&self, cursor: usize, channel: SensorChannel) -> f32 {
        if self.readings.is_empty() {
            return 0.0;
        }
        self.readings[cursor % self.readings.len()].value(channel)
    }
}

impl Default for ScriptedDevice {
    fn default() -> Self {
        Self::healthy()
    }
}

impl SensorDevice for ScriptedDevice {
    fn connect_pressure_sensor(&mut self) -> bool {
        let ok = self.respond(DeviceCall::ConnectPressure);
        self.pressure_linked = ok;
        ok
    }

    fn configure_pressure_sensor(&mut self) -> bool {
        self.respond(DeviceCall::ConfigurePressure)
    }

    fn connect_sound_sensor(&mut self) -> bool {
        let ok = self.respond(DeviceCall::ConnectSound);
        self.sound_linked = ok;
        ok
    }

    fn configure_sound_sensor(&mut self) -> bool {
        self.respond(DeviceCall::ConfigureSound)
    }

    fn is_connected(&self) -> bool {
        self.record(DeviceCall::IsConnected);
        self.pressure_linked && self.sound_linked
    }

    fn read_pressure_sensor(&mut self) -> f32 {
        self.record(DeviceCall::ReadPressure);
        let value = self.next_value(self.pressure_cursor, SensorChannel::Pressure);
        self.pressure_cursor += 1;
        value
    }

    fn read_sound_sensor(&mut self) -> f32 {
        self.record(DeviceCall::ReadSound);
        let value = self.next_value(self.sound_cursor, SensorChannel::Sound);
        self.sound_cursor += 1;
        value
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DISPOSITIVO SIMULADO
// ═══════════════════════════════════════════════════════════════════════════════

/// Perfil respiratório do simulador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingProfile {
    /// Respiração regular, abaixo dos limiares
    Normal,
    /// Episódio de apneia com ronco forte
    Apnea,
}

impl BreathingProfile {
    /// Linha de base (pressão, som)
    const fn baseline(&self) -> (f32, f32) {
        match self {
            BreathingProfile::Normal => (12.0, 18.0),
            BreathingProfile::Apnea => (26.0, 38.0),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            BreathingProfile::Normal => "normal",
            BreathingProfile::Apnea => "apnea",
        }
    }
}

impl FromStr for BreathingProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(BreathingProfile::Normal),
            "apnea" => Ok(BreathingProfile::Apnea),
            other => Err(format!("unknown breathing profile '{}' (expected normal or apnea)", other)),
        }
    }
}

/// Simulador determinístico de respiração.
///
/// Gera uma onda senoidal em torno da linha de base do perfil, com um
/// harmônico pequeno como ruído. A mesma sequência de chamadas produz
/// sempre os mesmos valores.
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    profile: BreathingProfile,
    pressure_linked: bool,
    sound_linked: bool,
    pressure_sample: u64,
    sound_sample: u64,
}

impl SimulatedDevice {
    /// Amostras por ciclo respiratório
    const PERIOD: f32 = 8.0;

    /// Amplitude da variação (fração da linha de base)
    const AMPLITUDE: f32 = 0.15;

    pub fn new(profile: BreathingProfile) -> Self {
        Self {
            profile,
            pressure_linked: false,
            sound_linked: false,
            pressure_sample: 0,
            sound_sample: 0,
        }
    }

    pub fn profile(&self) -> BreathingProfile {
        self.profile
    }

    /// Troca o perfil sem perder a fase
    pub fn set_profile(&mut self, profile: BreathingProfile) {
        self.profile = profile;
    }

    /// Simula perda de conexão
    pub fn disconnect(&mut self) {
        self.pressure_linked = false;
        self.sound_linked = false;
    }

    fn wave(base: f32, sample: u64) -> f32 {
        let t = sample as f32;
        let phase = t / Self::PERIOD * std::f32::consts::TAU;
        let variation = phase.sin() * base * Self::AMPLITUDE;
        let noise = (t * 1.7).sin() * 0.5;
        base + variation + noise
    }
}

impl SensorDevice for SimulatedDevice {
    fn connect_pressure_sensor(&mut self) -> bool {
        self.pressure_linked = true;
        true
    }

    fn configure_pressure_sensor(&mut self) -> bool {
        self.pressure_linked
    }

    fn connect_sound_sensor(&mut self) -> bool {
        self.sound_linked = true;
        true
    }

    fn configure_sound_sensor(&mut self) -> bool {
        self.sound_linked
    }

    fn is_connected(&self) -> bool {
        self.pressure_linked && self.sound_linked
    }

    fn read_pressure_sensor(&mut self) -> f32 {
        if !self.pressure_linked {
            return 0.0;
        }
        let value = Self::wave(self.profile.baseline().0, self.pressure_sample);
        self.pressure_sample += 1;
        value
    }

    fn read_sound_sensor(&mut self) -> f32 {
        if !self.sound_linked {
            return 0.0;
        }
        let value = Self::wave(self.profile.baseline().1, self.sound_sample);
        self.sound_sample += 1;
        value
    }
}
