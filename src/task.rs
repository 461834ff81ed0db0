//! Фоновые задачи с отменой и защитой от повторного запуска
//!
//! Каждое имитируемое действие (обновление, отправка, синхронизация) владеет
//! одним `TaskSlot`. Пока задача выполняется, повторный запуск отклоняется.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Шаг проверки флага остановки при ожидании
const DELAY_STEP: Duration = Duration::from_millis(50);

/// Ошибки запуска задач
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task '{0}' is already running")]
    AlreadyRunning(&'static str),
}

/// Слот для одной фоновой задачи
pub struct TaskSlot {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
    stop_flag: Arc<AtomicBool>,
}

impl TaskSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handle: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }
    
    pub fn name(&self) -> &'static str {
        self.name
    }
    
    /// Выполняется ли задача сейчас
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
    
    /// Запустить задачу, если слот свободен
    ///
    /// `make` получает флаг остановки новой задачи. Каждая задача получает
    /// свой флаг, поэтому отменённая задача не может быть "разбужена".
    pub fn try_spawn<F, Fut>(&mut self, runtime: &Handle, make: F) -> Result<(), TaskError>
    where
        F: FnOnce(Arc<AtomicBool>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.is_running() {
            tracing::debug!(task = self.name, "trigger rejected, task already running");
            return Err(TaskError::AlreadyRunning(self.name));
        }
        
        let stop_flag = Arc::new(AtomicBool::new(false));
        self.stop_flag = stop_flag.clone();
        self.handle = Some(runtime.spawn(make(stop_flag)));
        
        tracing::debug!(task = self.name, "task started");
        Ok(())
    }
    
    /// Отменить задачу
    ///
    /// Возвращает `true`, если задача ещё выполнялась.
    pub fn cancel(&mut self) -> bool {
        self.stop_flag.store(true, Ordering::SeqCst);
        
        match self.handle.take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                if was_running {
                    tracing::debug!(task = self.name, "task cancelled");
                }
                was_running
            }
            None => false,
        }
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Имитация задержки с проверкой флага остановки
///
/// Возвращает `false`, если ожидание прервано.
pub async fn simulated_delay(duration: Duration, stop_flag: &AtomicBool) -> bool {
    let deadline = tokio::time::Instant::now() + duration;
    
    loop {
        if stop_flag.load(Ordering::SeqCst) {
            return false;
        }
        
        let now = tokio::time::Instant::now();
        if now >= deadline {
            return true;
        }
        
        tokio::time::sleep(DELAY_STEP.min(deadline - now)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;
    
    async fn wait_until_idle(slot: &TaskSlot) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while slot.is_running() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("task did not finish");
    }
    
    #[tokio::test]
    async fn test_second_trigger_rejected_while_running() {
        let mut slot = TaskSlot::new("refresh");
        let handle = Handle::current();
        
        slot.try_spawn(&handle, |stop| async move {
            simulated_delay(Duration::from_secs(30), &stop).await;
        })
        .unwrap();
        
        assert!(slot.is_running());
        let second = slot.try_spawn(&handle, |_| async {});
        assert_eq!(second, Err(TaskError::AlreadyRunning("refresh")));
        
        assert!(slot.cancel());
        assert!(!slot.is_running());
    }
    
    #[tokio::test]
    async fn test_trigger_accepted_after_completion() {
        let mut slot = TaskSlot::new("sync");
        let handle = Handle::current();
        let (tx, rx) = oneshot::channel();
        
        slot.try_spawn(&handle, |_| async move {
            let _ = tx.send(());
        })
        .unwrap();
        
        rx.await.unwrap();
        wait_until_idle(&slot).await;
        
        assert!(slot.try_spawn(&handle, |_| async {}).is_ok());
    }
    
    #[tokio::test]
    async fn test_cancel_sets_stop_flag() {
        let mut slot = TaskSlot::new("submit");
        let handle = Handle::current();
        let mut seen_flag = None;
        
        slot.try_spawn(&handle, |stop| {
            seen_flag = Some(stop.clone());
            async move {
                simulated_delay(Duration::from_secs(30), &stop).await;
            }
        })
        .unwrap();
        
        slot.cancel();
        assert!(seen_flag.unwrap().load(Ordering::SeqCst));
    }
    
    #[tokio::test]
    async fn test_cancel_idle_slot() {
        let mut slot = TaskSlot::new("idle");
        assert!(!slot.cancel());
        assert_eq!(slot.name(), "idle");
    }
    
    #[tokio::test]
    async fn test_simulated_delay_completes() {
        let flag = AtomicBool::new(false);
        assert!(simulated_delay(Duration::from_millis(20), &flag).await);
    }
    
    #[tokio::test]
    async fn test_simulated_delay_interrupted() {
        let flag = AtomicBool::new(true);
        assert!(!simulated_delay(Duration::from_secs(10), &flag).await);
    }
}
