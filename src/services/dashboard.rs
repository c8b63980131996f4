//! Per-session dashboard data providers.
//!
//! Each logged-in session owns one provider matching its role. A provider
//! holds the currently displayed dataset bundle and replaces it wholesale on
//! every mode switch or refresh; records are never patched in place.
//!
//! # Timed operations
//! Mode switches to simulation/festival and every refresh hold a busy flag
//! for a configured simulated latency. While the flag is held, starting a
//! second timed operation is rejected with [`ProviderBusy`]. Switching back
//! to normal is instantaneous, is never rejected, and does not touch the
//! flag, so a timed operation that is already in flight will still land and
//! overwrite the dataset afterwards (last write wins; there is no
//! cancellation).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::TimingConfig;
use crate::datasets::{admin, festival, operations, simulation};
use crate::models::{AdminBundle, OperatingMode, OperationsBundle};
use crate::services::jitter::JitterRng;

/// A timed operation was started while another one was outstanding.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("another dashboard operation is already in progress")]
pub struct ProviderBusy;

fn try_acquire(busy: &AtomicBool) -> Result<(), ProviderBusy> {
    busy.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        .map(|_| ())
        .map_err(|_| ProviderBusy)
}

// ---------------------------------------------------------------------------
// Admin dashboard
// ---------------------------------------------------------------------------

struct AdminState {
    mode: OperatingMode,
    data: AdminBundle,
    rng: JitterRng,
}

/// Data provider behind the admin dashboard: the mode state machine plus
/// the six dataset bundles it governs.
#[derive(Clone)]
pub struct AdminProvider {
    state: Arc<RwLock<AdminState>>,
    busy: Arc<AtomicBool>,
    timing: TimingConfig,
}

impl AdminProvider {
    /// Fresh provider mounted on the normal-mode tables.
    pub fn new(timing: TimingConfig, rng: JitterRng) -> Self {
        Self {
            state: Arc::new(RwLock::new(AdminState {
                mode: OperatingMode::Normal,
                data: admin::bundle(),
                rng,
            })),
            busy: Arc::new(AtomicBool::new(false)),
            timing,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn mode(&self) -> OperatingMode {
        self.state.read().await.mode
    }

    pub async fn snapshot(&self) -> AdminBundle {
        self.state.read().await.data.clone()
    }

    /// Switch the dashboard to `mode`.
    ///
    /// Normal resets all six bundles to the base tables synchronously.
    /// Simulation and festival hold the busy flag for the switch latency and
    /// then replace the passenger, schedule, alert and metric bundles with
    /// that mode's tables. The energy and cost bundles are left as they
    /// were, since those modes define no tables for them.
    pub async fn select_mode(&self, mode: OperatingMode) -> Result<AdminBundle, ProviderBusy> {
        if mode == OperatingMode::Normal {
            let mut state = self.state.write().await;
            state.mode = OperatingMode::Normal;
            state.data = admin::bundle();
            info!(mode = "normal", "Admin dashboard reset to base tables");
            return Ok(state.data.clone());
        }

        try_acquire(&self.busy)?;
        // The mode indicator flips as soon as the switch starts; the dataset
        // lands only after the simulated latency.
        self.state.write().await.mode = mode;
        tokio::time::sleep(self.timing.mode_switch_delay()).await;

        let mut state = self.state.write().await;
        apply_mode_tables(&mut state.data, mode);
        self.busy.store(false, Ordering::Release);
        info!(?mode, "Admin dashboard switched dataset");
        Ok(state.data.clone())
    }

    /// Regenerate the displayed dataset after the refresh latency.
    ///
    /// In simulation/festival this re-applies that mode's tables verbatim
    /// (nothing is randomized) and falls back to the normal base for the
    /// energy and cost bundles. In normal mode the base tables are jittered;
    /// alerts stay the static base table.
    pub async fn refresh(&self) -> Result<AdminBundle, ProviderBusy> {
        try_acquire(&self.busy)?;
        let mode = self.state.read().await.mode;
        tokio::time::sleep(self.timing.refresh_delay()).await;

        let mut state = self.state.write().await;
        match mode {
            OperatingMode::Simulation | OperatingMode::Festival => {
                apply_mode_tables(&mut state.data, mode);
                state.data.energy_breakdown = admin::energy_breakdown();
                state.data.cost_samples = admin::cost_samples();
            }
            OperatingMode::Normal => {
                let AdminState { data, rng, .. } = &mut *state;
                *data = jittered_admin_bundle(rng);
            }
        }
        self.busy.store(false, Ordering::Release);
        info!(?mode, "Admin dashboard refreshed");
        Ok(state.data.clone())
    }
}

/// Swap in the passenger, schedule, alert and metric tables for a
/// simulation/festival mode. Energy and cost bundles are intentionally not
/// touched here; the two call sites differ in how they handle them.
fn apply_mode_tables(data: &mut AdminBundle, mode: OperatingMode) {
    match mode {
        OperatingMode::Simulation => {
            data.passenger_samples = simulation::passenger_samples();
            data.train_schedule = simulation::train_schedule();
            data.alerts = simulation::alerts();
            data.metrics = simulation::metrics();
        }
        OperatingMode::Festival => {
            data.passenger_samples = festival::passenger_samples();
            data.train_schedule = festival::train_schedule();
            data.alerts = festival::alerts();
            data.metrics = festival::metrics();
        }
        OperatingMode::Normal => unreachable!("normal mode resets the whole bundle"),
    }
}

fn jittered_admin_bundle(rng: &mut JitterRng) -> AdminBundle {
    let passenger_samples = admin::passenger_samples()
        .into_iter()
        .map(|mut s| {
            s.observed = rng.jitter_count(s.observed, 30, 50);
            s.predicted = rng.jitter_count(s.predicted, 30, 50);
            s.efficiency_pct = s.efficiency_pct.map(|e| rng.jitter_pct(e, 10.0, 50.0, 100.0));
            s
        })
        .collect();

    let energy_breakdown = rng.draw_energy_split();

    let cost_samples = admin::cost_samples()
        .into_iter()
        .map(|mut c| {
            c.traditional_cost = rng.jitter_cost(c.traditional_cost, 200);
            c.optimized_cost = rng.jitter_cost(c.optimized_cost, 150);
            c.savings = rng.jitter_cost(c.savings, 100);
            c
        })
        .collect();

    let train_schedule = admin::train_schedule()
        .into_iter()
        .map(|mut t| {
            t.status = rng.draw_status();
            t.passengers = rng.jitter_count(t.passengers, 30, 50);
            // Train efficiency floors at 40, unlike the passenger curve's 50.
            t.efficiency_pct = t.efficiency_pct.map(|e| rng.jitter_pct(e, 10.0, 40.0, 100.0));
            t
        })
        .collect();

    let mut metrics = admin::metrics();
    metrics.on_time_performance = rng.jitter_pct(metrics.on_time_performance, 3.0, 85.0, 98.0);
    metrics.energy_savings = rng.jitter_pct(metrics.energy_savings, 2.0, 10.0, 25.0);
    metrics.system_efficiency = rng.jitter_pct(metrics.system_efficiency, 3.0, 85.0, 95.0);
    metrics.system_uptime = metrics.system_uptime.map(|u| rng.jitter_pct(u, 1.0, 95.0, 100.0));

    AdminBundle {
        passenger_samples,
        train_schedule,
        // Alerts are not regenerated by a normal-mode refresh.
        alerts: admin::alerts(),
        metrics,
        energy_breakdown,
        cost_samples,
    }
}

// ---------------------------------------------------------------------------
// Operations dashboard
// ---------------------------------------------------------------------------

struct OperationsState {
    data: OperationsBundle,
    rng: JitterRng,
}

/// Data provider behind the operations dashboard. No mode concept: refresh
/// always jitters the base tables.
#[derive(Clone)]
pub struct OperationsProvider {
    state: Arc<RwLock<OperationsState>>,
    busy: Arc<AtomicBool>,
    timing: TimingConfig,
}

impl OperationsProvider {
    pub fn new(timing: TimingConfig, rng: JitterRng) -> Self {
        Self {
            state: Arc::new(RwLock::new(OperationsState {
                data: operations::bundle(),
                rng,
            })),
            busy: Arc::new(AtomicBool::new(false)),
            timing,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn snapshot(&self) -> OperationsBundle {
        self.state.read().await.data.clone()
    }

    /// Jitter the base tables after the refresh latency; alerts stay the
    /// static base table.
    pub async fn refresh(&self) -> Result<OperationsBundle, ProviderBusy> {
        try_acquire(&self.busy)?;
        tokio::time::sleep(self.timing.refresh_delay()).await;

        let mut state = self.state.write().await;
        let OperationsState { data, rng } = &mut *state;
        *data = jittered_operations_bundle(rng);
        self.busy.store(false, Ordering::Release);
        info!("Operations dashboard refreshed");
        Ok(state.data.clone())
    }
}

fn jittered_operations_bundle(rng: &mut JitterRng) -> OperationsBundle {
    let passenger_samples = operations::passenger_samples()
        .into_iter()
        .map(|mut s| {
            s.observed = rng.jitter_count(s.observed, 30, 50);
            s.predicted = rng.jitter_count(s.predicted, 30, 50);
            s
        })
        .collect();

    let train_schedule = operations::train_schedule()
        .into_iter()
        .map(|mut t| {
            t.status = rng.draw_status();
            t.passengers = rng.jitter_count(t.passengers, 30, 50);
            t
        })
        .collect();

    let mut metrics = operations::metrics();
    metrics.current_passengers = rng.jitter_count(metrics.current_passengers, 200, 2000);
    metrics.on_time_performance = rng.jitter_pct(metrics.on_time_performance, 3.0, 85.0, 98.0);
    metrics.energy_efficiency = rng.jitter_pct(metrics.energy_efficiency, 3.0, 80.0, 95.0);

    OperationsBundle {
        passenger_samples,
        train_schedule,
        alerts: operations::alerts(),
        metrics,
    }
}
