//! # Monitor de Apneia (RonQI2)
//!
//! Orquestra um [`SensorDevice`]: inicialização, reconexão, aquisição de
//! leituras e avaliação da regra de apneia sobre a janela deslizante.
//!
//! ## Ciclo de vida
//!
//! ```text
//! Uninitialized ──attach──► Attached ──initialize──► Ready
//!                              │                  └──► Failed
//!                              └──────reconnect─────► Ready | Failed
//! ```
//!
//! Não há estado terminal: o monitor pode ser reutilizado indefinidamente.

use ronqi_core::{MonitorError, MonitorResult, Reading, SensorChannel, SensorDevice};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::history::{Means, ReadingHistory};
use crate::rule::ApneaRule;

/// Estado do monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorState {
    /// Nenhum dispositivo anexado
    Uninitialized,
    /// Dispositivo anexado, ainda não inicializado
    Attached,
    /// Sensores conectados e configurados
    Ready,
    /// Última inicialização/reconexão falhou
    Failed,
}

/// Resultado estruturado de uma avaliação
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApneaAssessment {
    /// Médias da janela
    pub means: Means,
    /// Número de leituras consideradas
    pub readings: usize,
    /// A regra detectou apneia?
    pub apnea: bool,
}

/// Monitor de apneia do sono.
///
/// Genérico sobre o dispositivo: aceita um driver próprio, uma referência
/// emprestada (`&mut D`) ou um `Box<dyn SensorDevice>`.
///
/// # Exemplo
///
/// ```
/// use ronqi_core::ScriptedDevice;
/// use ronqi_monitor::ApneaMonitor;
///
/// let mut monitor = ApneaMonitor::new();
/// monitor.attach_device(ScriptedDevice::healthy().with_readings(25.0, 35.0));
///
/// assert!(monitor.initialize()?);
/// for _ in 0..5 {
///     monitor.acquire_reading()?;
/// }
/// assert!(monitor.evaluate_apnea());
/// # Ok::<(), ronqi_core::MonitorError>(())
/// ```
#[derive(Debug)]
pub struct ApneaMonitor<D: SensorDevice = Box<dyn SensorDevice>> {
    device: Option<D>,
    history: ReadingHistory,
    rule: ApneaRule,
    state: MonitorState,
}

impl<D: SensorDevice> ApneaMonitor<D> {
    /// Monitor Silver: limiares 20.0/30.0, combinação E, janela de 5
    pub fn new() -> Self {
        Self::with_rule(ApneaRule::SILVER)
    }

    /// Monitor com regra específica e janela padrão
    pub fn with_rule(rule: ApneaRule) -> Self {
        Self {
            device: None,
            history: ReadingHistory::default(),
            rule,
            state: MonitorState::Uninitialized,
        }
    }

    /// Monitor a partir de uma configuração validada
    pub fn with_config(config: &MonitorConfig) -> MonitorResult<Self> {
        config.validate()?;

        Ok(Self {
            device: None,
            history: ReadingHistory::new(config.history_capacity)?,
            rule: config.rule(),
            state: MonitorState::Uninitialized,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DISPOSITIVO
    // ═══════════════════════════════════════════════════════════════════════════

    /// Anexa o dispositivo monitorado, devolvendo o anterior.
    ///
    /// Substituir o dispositivo não apaga o histórico nem muda a regra.
    pub fn attach_device(&mut self, device: D) -> Option<D> {
        let previous = self.device.replace(device);
        if previous.is_some() {
            info!("sensor device replaced");
        } else {
            info!("sensor device attached");
        }
        self.state = MonitorState::Attached;
        previous
    }

    /// Remove o dispositivo anexado
    pub fn detach_device(&mut self) -> Option<D> {
        let device = self.device.take();
        if device.is_some() {
            self.state = MonitorState::Uninitialized;
        }
        device
    }

    pub fn has_device(&self) -> bool {
        self.device.is_some()
    }

    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }

    pub fn device_mut(&mut self) -> Option<&mut D> {
        self.device.as_mut()
    }

    fn require_device(&mut self) -> MonitorResult<&mut D> {
        self.device.as_mut().ok_or(MonitorError::NoDeviceAttached)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONEXÃO
    // ═══════════════════════════════════════════════════════════════════════════

    /// Conecta e configura pressão, depois som.
    ///
    /// As quatro chamadas acontecem sempre, uma vez cada, mesmo após uma
    /// falha intermediária. Retorna `true` somente se todas tiverem sucesso.
    pub fn initialize(&mut self) -> MonitorResult<bool> {
        let device = self.require_device()?;

        let mut ok = true;
        for channel in SensorChannel::ALL {
            let connected = device.connect(channel);
            let configured = device.configure(channel);
            if !(connected && configured) {
                warn!(%channel, connected, configured, "sensor initialization failed");
            }
            ok &= connected && configured;
        }

        self.state = if ok { MonitorState::Ready } else { MonitorState::Failed };
        if ok {
            info!("device initialized");
        }
        Ok(ok)
    }

    /// Reconecta os sensores se o dispositivo estiver desconectado.
    ///
    /// Já conectado: `true` sem nenhuma chamada de conexão. Caso contrário,
    /// conecta pressão e, somente se der certo, som.
    pub fn reconnect(&mut self) -> MonitorResult<bool> {
        let device = self.require_device()?;

        if device.is_connected() {
            debug!("device already connected, nothing to do");
            return Ok(true);
        }

        let ok = device.connect_pressure_sensor() && device.connect_sound_sensor();

        self.state = if ok { MonitorState::Ready } else { MonitorState::Failed };
        if ok {
            info!("device reconnected");
        } else {
            warn!("device reconnection failed");
        }
        Ok(ok)
    }

    /// Status de conexão do dispositivo
    pub fn is_connected(&self) -> MonitorResult<bool> {
        self.device
            .as_ref()
            .map(|d| d.is_connected())
            .ok_or(MonitorError::NoDeviceAttached)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LEITURA E AVALIAÇÃO
    // ═══════════════════════════════════════════════════════════════════════════

    /// Lê pressão e som e insere a leitura na janela
    pub fn acquire_reading(&mut self) -> MonitorResult<Reading> {
        let device = self.require_device()?;

        let pressure = device.read_pressure_sensor();
        let sound = device.read_sound_sensor();
        let reading = Reading::new(pressure, sound);
        if !reading.is_finite() {
            warn!(pressure, sound, "non-finite reading from device");
        }

        let evicted = self.history.push(reading);
        debug!(
            pressure,
            sound,
            window = self.history.len(),
            evicted = evicted.is_some(),
            "reading acquired"
        );
        Ok(reading)
    }

    /// Avalia apneia sobre a janela atual.
    ///
    /// Janela vazia conta como ausência de apneia.
    pub fn evaluate_apnea(&self) -> bool {
        match self.assess() {
            Ok(assessment) => assessment.apnea,
            Err(_) => {
                debug!("no readings yet, reporting no apnea");
                false
            }
        }
    }

    /// Avaliação estruturada; `EmptyHistory` se não houver leituras
    pub fn assess(&self) -> MonitorResult<ApneaAssessment> {
        let means = self.history.means()?;
        let apnea = self.rule.evaluate(&means);

        debug!(
            mean_pressure = means.pressure,
            mean_sound = means.sound,
            readings = self.history.len(),
            apnea,
            "apnea evaluated"
        );

        Ok(ApneaAssessment {
            means,
            readings: self.history.len(),
            apnea,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ACESSO
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn history(&self) -> &ReadingHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn rule(&self) -> &ApneaRule {
        &self.rule
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }
}

impl<D: SensorDevice> Default for ApneaMonitor<D> {
    fn default() -> Self {
        Self::new()
    }
}
