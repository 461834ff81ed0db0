//! Состояние сети и фоновая проверка доступности
//!
//! В браузере источником были события online/offline. На десктопе их
//! заменяет периодическая проверка TCP-подключения к известному адресу.
//! Ручной режим "Simulate offline" перекрывает результат проверки.

use crate::events::AppEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;

/// Адрес для проверки сети по умолчанию
pub const DEFAULT_PROBE_ADDRESS: &str = "1.1.1.1:443";

/// Интервал проверки по умолчанию (секунды)
pub const DEFAULT_PROBE_INTERVAL_SECS: u64 = 10;

/// Таймаут одного подключения
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Переход состояния сети
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    WentOnline,
    WentOffline,
    Unchanged,
}

/// Состояние сети на время сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityState {
    /// Результат последней проверки
    probe_online: bool,
    /// Ручной офлайн-режим
    forced_offline: bool,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        // До первой проверки считаем, что сеть есть
        Self {
            probe_online: true,
            forced_offline: false,
        }
    }
}

impl ConnectivityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Итоговое состояние: онлайн?
    pub fn is_online(&self) -> bool {
        self.probe_online && !self.forced_offline
    }

    pub fn is_forced_offline(&self) -> bool {
        self.forced_offline
    }

    /// Применить результат проверки сети
    pub fn apply_probe(&mut self, online: bool) -> Transition {
        let before = self.is_online();
        self.probe_online = online;
        Self::transition(before, self.is_online())
    }

    /// Включить/выключить ручной офлайн-режим
    pub fn set_forced_offline(&mut self, forced: bool) -> Transition {
        let before = self.is_online();
        self.forced_offline = forced;
        Self::transition(before, self.is_online())
    }

    fn transition(before: bool, after: bool) -> Transition {
        match (before, after) {
            (false, true) => Transition::WentOnline,
            (true, false) => Transition::WentOffline,
            _ => Transition::Unchanged,
        }
    }
}

/// Проверить доступность адреса (TCP connect с таймаутом)
pub async fn check_reachable(address: &str, timeout: Duration) -> bool {
    matches!(
        tokio::time::timeout(timeout, TcpStream::connect(address)).await,
        Ok(Ok(_))
    )
}

/// Периодическая проверка сети
///
/// Отправляет `ConnectivityChanged` только при смене результата
/// (первый результат отправляется всегда).
pub async fn run_probe(
    address: String,
    interval: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    stop_flag: Arc<AtomicBool>,
) {
    let mut last: Option<bool> = None;
    tracing::info!(%address, ?interval, "connectivity probe started");

    while !stop_flag.load(Ordering::SeqCst) {
        let online = check_reachable(&address, PROBE_TIMEOUT).await;

        if last != Some(online) {
            tracing::info!(online, "connectivity changed");
            if event_tx.send(AppEvent::ConnectivityChanged(online)).is_err() {
                // GUI закрыт
                break;
            }
            last = Some(online);
        }

        if !crate::task::simulated_delay(interval, &stop_flag).await {
            break;
        }
    }

    tracing::debug!("connectivity probe stopped");
}
