//! SentinelX - мониторинг стихийных бедствий
//! 
//! Общая библиотека для GUI и CLI версий.
//! 
//! # Модули
//! - `viewport` - выбор раскладки (компактная/десктопная) по ширине окна
//! - `connectivity` - состояние сети и фоновая проверка доступности
//! - `offline` - очередь записей, ожидающих синхронизации
//! - `sync` - синхронизация очереди через внедряемый бэкенд
//! - `task` - фоновые задачи с отменой и защитой от повторного запуска
//! - `settings` - сохраняемые настройки (онбординг, язык, автосинхронизация)
//! - `reports` - сообщения жителей, фильтры и форма отправки
//! - `sensors` - показания датчиков по барангаям, метеостанции
//! - `predictions` - прогнозы и модели ИИ
//! - `fixtures` - демонстрационные данные
//! - `nav` - разделы интерфейса
//! - `events` - события фоновых задач для GUI
//! - `i18n` - интернационализация (английский, филиппинский)

pub mod connectivity;
pub mod events;
pub mod fixtures;
pub mod i18n;
pub mod nav;
pub mod offline;
pub mod predictions;
pub mod reports;
pub mod sensors;
pub mod settings;
pub mod sync;
pub mod task;
pub mod utils;
pub mod viewport;
