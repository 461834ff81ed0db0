//! Сохраняемые настройки
//!
//! Настройки читаются один раз при запуске и передаются в приложение.
//! Доступ к хранилищу изолирован за трейтом `SettingsStore`.

use crate::connectivity::{DEFAULT_PROBE_ADDRESS, DEFAULT_PROBE_INTERVAL_SECS};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Ошибки чтения/записи настроек
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Настройки приложения
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Приветственный экран пройден
    pub onboarding_completed: bool,
    /// Язык интерфейса
    pub language: Language,
    pub dark_mode: bool,
    pub notifications_enabled: bool,
    pub sound_enabled: bool,
    /// Запускать синхронизацию при восстановлении сети
    pub auto_sync_on_reconnect: bool,
    /// Адрес для проверки сети (host:port)
    pub probe_address: String,
    /// Интервал проверки сети (секунды)
    pub probe_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            onboarding_completed: false,
            language: Language::default(),
            dark_mode: true,
            notifications_enabled: true,
            sound_enabled: true,
            auto_sync_on_reconnect: false,
            probe_address: DEFAULT_PROBE_ADDRESS.to_string(),
            probe_interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
        }
    }
}

/// Хранилище настроек
pub trait SettingsStore: Send {
    fn load(&self) -> Result<Settings, SettingsError>;
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Настройки в JSON-файле
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Файл в стандартной папке данных пользователя
    pub fn default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            // Первый запуск - файла ещё нет
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Настройки в памяти (тесты, демо без диска)
#[derive(Default)]
pub struct MemorySettingsStore {
    inner: Mutex<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: Settings) -> Self {
        Self {
            inner: Mutex::new(Some(settings)),
        }
    }

    /// Последние сохранённые настройки
    pub fn snapshot(&self) -> Option<Settings> {
        self.inner.lock().ok().and_then(|s| s.clone())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.snapshot().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Ok(mut inner) = self.inner.lock() {
            *inner = Some(settings.clone());
        }
        Ok(())
    }
}

/// Настройки вместе с хранилищем
pub struct SettingsManager {
    settings: Settings,
    store: Box<dyn SettingsStore>,
}

impl SettingsManager {
    /// Прочитать настройки один раз
    ///
    /// Повреждённый файл не мешает запуску: используются значения по умолчанию.
    pub fn open(store: Box<dyn SettingsStore>) -> Self {
        let settings = match store.load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings, using defaults");
                Settings::default()
            }
        };

        Self { settings, store }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Изменить настройки и сохранить
    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) -> Result<(), SettingsError> {
        f(&mut self.settings);
        self.store.save(&self.settings)
    }

    /// Отметить онбординг пройденным (запись только один раз)
    ///
    /// Возвращает `false`, если флаг уже был установлен.
    pub fn complete_onboarding(&mut self) -> Result<bool, SettingsError> {
        if self.settings.onboarding_completed {
            return Ok(false);
        }

        self.update(|s| s.onboarding_completed = true)?;
        tracing::info!("onboarding completed");
        Ok(true)
    }
}

/// Путь к файлу настроек
pub fn default_settings_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sentinelx")
        .join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.onboarding_completed);
        assert!(!settings.auto_sync_on_reconnect);
        assert!(settings.dark_mode);
        assert_eq!(settings.probe_address, DEFAULT_PROBE_ADDRESS);
    }

    #[test]
    fn test_json_store_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("nested").join("settings.json"));

        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("nested").join("settings.json"));

        let settings = Settings {
            onboarding_completed: true,
            language: Language::Filipino,
            auto_sync_on_reconnect: true,
            ..Settings::default()
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_json_store_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"onboarding_completed": true}"#).unwrap();

        let loaded = JsonSettingsStore::new(&path).load().unwrap();
        assert!(loaded.onboarding_completed);
        assert_eq!(loaded.probe_interval_secs, DEFAULT_PROBE_INTERVAL_SECS);
    }

    #[test]
    fn test_json_store_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(JsonSettingsStore::new(&path).load(), Err(SettingsError::Json(_))));

        // Менеджер не падает и берёт значения по умолчанию
        let manager = SettingsManager::open(Box::new(JsonSettingsStore::new(&path)));
        assert_eq!(manager.get(), &Settings::default());
    }

    #[test]
    fn test_complete_onboarding_writes_once() {
        let mut manager = SettingsManager::open(Box::new(MemorySettingsStore::new()));

        assert!(manager.complete_onboarding().unwrap());
        assert!(manager.get().onboarding_completed);
        assert!(!manager.complete_onboarding().unwrap());
    }

    #[test]
    fn test_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut manager = SettingsManager::open(Box::new(JsonSettingsStore::new(&path)));
        manager.update(|s| s.sound_enabled = false).unwrap();

        let reopened = SettingsManager::open(Box::new(JsonSettingsStore::new(&path)));
        assert!(!reopened.get().sound_enabled);
    }
}
