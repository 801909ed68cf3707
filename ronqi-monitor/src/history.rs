//! Histórico de leituras em janela deslizante

use std::collections::VecDeque;

use ronqi_core::{MonitorError, MonitorResult, Reading};
use serde::{Deserialize, Serialize};

/// Capacidade padrão da janela (últimas 5 leituras)
pub const HISTORY_CAPACITY: usize = 5;

/// Médias aritméticas de cada canal sobre a janela
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Means {
    pub pressure: f32,
    pub sound: f32,
}

/// Janela FIFO limitada de leituras.
///
/// Ao atingir a capacidade, a leitura mais antiga é descartada. A média usa
/// todas as leituras presentes (1 até `capacity`).
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingHistory {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl ReadingHistory {
    /// Cria janela com capacidade específica (mínimo 1)
    pub fn new(capacity: usize) -> MonitorResult<Self> {
        if capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "history_capacity must be >= 1".into(),
            ));
        }

        Ok(Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Insere uma leitura, devolvendo a leitura descartada se a janela estava cheia
    pub fn push(&mut self, reading: Reading) -> Option<Reading> {
        let evicted = if self.readings.len() == self.capacity {
            self.readings.pop_front()
        } else {
            None
        };
        self.readings.push_back(reading);
        evicted
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.readings.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Leitura mais recente
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Leituras da mais antiga para a mais recente
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn mean_pressure(&self) -> MonitorResult<f32> {
        self.mean_of(|r| r.pressure)
    }

    pub fn mean_sound(&self) -> MonitorResult<f32> {
        self.mean_of(|r| r.sound)
    }

    /// Médias de pressão e som
    pub fn means(&self) -> MonitorResult<Means> {
        Ok(Means {
            pressure: self.mean_pressure()?,
            sound: self.mean_sound()?,
        })
    }

    fn mean_of(&self, value: impl Fn(&Reading) -> f32) -> MonitorResult<f32> {
        if self.readings.is_empty() {
            return Err(MonitorError::EmptyHistory);
        }
        let sum: f32 = self.readings.iter().map(value).sum();
        Ok(sum / self.readings.len() as f32)
    }
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self {
            readings: VecDeque::with_capacity(HISTORY_CAPACITY),
            capacity: HISTORY_CAPACITY,
        }
    }
}
