//! AutoRunner - timed stepping of a shared simulator.
//!
//! The runner calls [`Simulator::run_step`] on a background thread every
//! `step_delay_ms` milliseconds until the run is terminal, the simulator
//! leaves the `Running` state, or the runner is cancelled.
//!
//! Each step is taken while holding the simulator mutex, so manual steps,
//! resets and scheduled steps never overlap and a sweep is committed whole.
//! The cancellation flag is checked after acquiring the lock, so a
//! cancelled runner never starts another step.
//!
//! The worker only ever polls for the lock, so a runner may be stopped or
//! dropped by a thread that is holding the simulator guard.

use crate::utils::IndexSource;
use crate::{Simulator, SimulatorStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Back-off between lock attempts while another thread holds the simulator.
const LOCK_RETRY: Duration = Duration::from_millis(1);

/// Handle to a background auto-run loop.
pub struct AutoRunner {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<usize>>,
}

impl AutoRunner {
    /// Put `simulator` in the `Running` state and start stepping it.
    ///
    /// Returns `None` if the simulator cannot run (not initialized or
    /// already terminal).
    pub fn spawn<S>(simulator: Arc<Mutex<Simulator<S>>>) -> Option<Self>
    where
        S: IndexSource + Send + 'static,
    {
        let delay = {
            let mut sim = simulator.lock().ok()?;
            if !sim.start() {
                return None;
            }
            Duration::from_millis(sim.config().step_delay_ms)
        };

        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let handle = thread::spawn(move || run_loop(&simulator, &flag, delay));

        Some(Self {
            cancel,
            handle: Some(handle),
        })
    }

    /// True once the loop has exited on its own or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel the loop and block until the worker thread has exited.
    /// Returns the number of steps it ran.
    ///
    /// A `Running` simulator is paused on the way out when its lock is free.
    /// If the caller holds the guard, the status is left for the caller to
    /// change.
    pub fn stop(mut self) -> usize {
        self.shutdown()
    }

    fn shutdown(&mut self) -> usize {
        self.cancel.store(true, Ordering::SeqCst);
        match self.handle.take() {
            Some(handle) => {
                handle.thread().unpark();
                handle.join().unwrap_or(0)
            }
            None => 0,
        }
    }
}

impl Drop for AutoRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Sleep for `delay` unless cancelled first. Returns false on cancellation.
fn wait(cancel: &AtomicBool, delay: Duration) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::park_timeout(deadline - now);
    }
}

/// Lock the simulator, giving up once `cancel` is set. Returns `None` on
/// cancellation or a poisoned lock.
fn acquire<'a, S: IndexSource>(
    simulator: &'a Mutex<Simulator<S>>,
    cancel: &AtomicBool,
) -> Option<MutexGuard<'a, Simulator<S>>> {
    loop {
        if cancel.load(Ordering::SeqCst) {
            return None;
        }
        match simulator.try_lock() {
            Ok(sim) => return Some(sim),
            Err(TryLockError::WouldBlock) => thread::park_timeout(LOCK_RETRY),
            Err(TryLockError::Poisoned(_)) => {
                log::warn!("simulator mutex poisoned; auto-run stopped");
                return None;
            }
        }
    }
}

fn run_loop<S: IndexSource>(
    simulator: &Mutex<Simulator<S>>,
    cancel: &AtomicBool,
    delay: Duration,
) -> usize {
    let mut steps = 0;
    loop {
        if !wait(cancel, delay) {
            break;
        }
        let Some(mut sim) = acquire(simulator, cancel) else {
            break;
        };
        if cancel.load(Ordering::SeqCst) {
            break;
        }
        if sim.status() != SimulatorStatus::Running {
            return steps;
        }

        if let Err(e) = sim.run_step() {
            log::warn!("auto-run step failed: {}", e);
            sim.pause();
            return steps;
        }
        steps += 1;

        if sim.status().is_terminal() {
            return steps;
        }
    }

    // Cancelled. Never block here: the stopping thread may hold the lock.
    if let Ok(mut sim) = simulator.try_lock() {
        sim.pause();
    }
    log::debug!("auto-run stopped after {} steps", steps);
    steps
}
