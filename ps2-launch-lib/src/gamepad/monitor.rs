//! Background hot-plug monitor.
//!
//! A worker thread rescans the backend on a fixed interval and publishes
//! [`PadEvent`]s over a channel whenever the connected-device count changes.
//! The foreground owns the receiving end and reads at its own pace.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::PadDescriptor;
use super::backend::PadBackend;

/// How often the worker rescans for device changes.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long `stop` waits for the worker to wind down before giving up.
const STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Hot-plug notifications published by the monitor thread.
#[derive(Debug, Clone, PartialEq)]
pub enum PadEvent {
    /// A new pad appeared; carries its descriptor.
    Connected(PadDescriptor),
    /// A previously seen pad went away.
    Disconnected,
}

/// Handle to a running hot-plug monitor.
///
/// Dropping the handle stops the worker thread.
pub struct PadMonitor {
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    devices: Arc<Mutex<Vec<PadDescriptor>>>,
    active: Arc<Mutex<Option<PadDescriptor>>>,
}

impl PadMonitor {
    /// Start monitoring with the default poll interval.
    ///
    /// The backend is built by `factory` on the worker thread itself, since
    /// platform input handles are generally not movable across threads.
    pub fn start<B, F>(factory: F) -> (Self, Receiver<PadEvent>)
    where
        B: PadBackend + 'static,
        F: FnOnce() -> B + Send + 'static,
    {
        Self::start_with_interval(factory, POLL_INTERVAL)
    }

    /// Start monitoring with an explicit poll interval.
    pub fn start_with_interval<B, F>(factory: F, interval: Duration) -> (Self, Receiver<PadEvent>)
    where
        B: PadBackend + 'static,
        F: FnOnce() -> B + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let devices = Arc::new(Mutex::new(Vec::new()));
        let active = Arc::new(Mutex::new(None));

        let worker = {
            let stop = Arc::clone(&stop);
            let devices = Arc::clone(&devices);
            let active = Arc::clone(&active);
            thread::spawn(move || {
                let backend = factory();
                run_loop(backend, tx, stop, devices, active, interval);
            })
        };

        let monitor = Self {
            stop,
            worker: Some(worker),
            devices,
            active,
        };
        (monitor, rx)
    }

    /// Snapshot of the currently connected pads.
    pub fn devices(&self) -> Vec<PadDescriptor> {
        match self.devices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The pad currently selected for use, if any.
    pub fn active_pad(&self) -> Option<PadDescriptor> {
        match self.active.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Signal the worker to stop and wait (bounded) for it to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.worker.take() {
            let deadline = Instant::now() + STOP_TIMEOUT;
            while !handle.is_finished() && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(10));
            }
            if handle.is_finished() {
                let _ = handle.join();
            } else {
                log::warn!("gamepad monitor thread did not stop within {STOP_TIMEOUT:?}");
            }
        }
    }
}

impl Drop for PadMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop<B: PadBackend>(
    mut backend: B,
    tx: Sender<PadEvent>,
    stop: Arc<AtomicBool>,
    devices: Arc<Mutex<Vec<PadDescriptor>>>,
    active: Arc<Mutex<Option<PadDescriptor>>>,
    interval: Duration,
) {
    // Prime with the devices already present; only changes after this point
    // are published as events.
    let mut known = backend.rescan();
    store_devices(&devices, &known);
    update_active(&active, &known);

    while !stop.load(Ordering::Relaxed) {
        let current = backend.rescan();

        if current.len() > known.len() {
            // The newest arrival sits at the end of the enumeration.
            if let Some(newest) = current.last() {
                log::info!("gamepad connected: {} ({})", newest.name, newest.family);
                if tx.send(PadEvent::Connected(newest.clone())).is_err() {
                    break;
                }
            }
        } else if current.len() < known.len() {
            log::info!("gamepad disconnected ({} remaining)", current.len());
            if tx.send(PadEvent::Disconnected).is_err() {
                break;
            }
        }

        if current != known {
            store_devices(&devices, &current);
            update_active(&active, &current);
            known = current;
        }

        sleep_interruptible(&stop, interval);
    }
}

fn store_devices(slot: &Mutex<Vec<PadDescriptor>>, current: &[PadDescriptor]) {
    match slot.lock() {
        Ok(mut guard) => *guard = current.to_vec(),
        Err(poisoned) => *poisoned.into_inner() = current.to_vec(),
    }
}

/// Keep the active pad if it is still connected, otherwise fall back to the
/// first available device.
fn update_active(slot: &Mutex<Option<PadDescriptor>>, current: &[PadDescriptor]) {
    let mut guard = match slot.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let still_connected = guard
        .as_ref()
        .is_some_and(|pad| current.iter().any(|d| d.guid == pad.guid && d.index == pad.index));
    if !still_connected {
        *guard = current.first().cloned();
    }
}

/// Sleep in small slices so a stop request is honored promptly.
fn sleep_interruptible(stop: &AtomicBool, total: Duration) {
    let slice = Duration::from_millis(10).min(total);
    let deadline = Instant::now() + total;
    while Instant::now() < deadline && !stop.load(Ordering::Relaxed) {
        thread::sleep(slice);
    }
}

#[cfg(test)]
#[path = "tests/monitor_tests.rs"]
mod tests;
