//! Simulator - runs repeated sweeps under a convergence and iteration cap.
//!
//! The simulator owns the weight matrix, the current [`NetworkState`], the
//! [`RunHistory`] and the configuration. All mutation goes through its
//! methods; nothing is recomputed implicitly.
//!
//! # Lifecycle
//!
//! 1. Create: `Simulator::new(config)?`
//! 2. Train and seed: `sim.initialize(&patterns, method, &image)?`
//! 3. Step: `sim.run_step()?` (manual) or `sim.start()` plus an external
//!    scheduler such as [`crate::AutoRunner`]
//! 4. Stop at `Converged` (a sweep changed nothing) or `Exhausted`
//!    (`max_iterations` accepted steps)
//! 5. `reset()` or `set_method()` to begin a fresh run
//!
//! # Example
//!
//! ```
//! use hopfield::{patterns, Simulator, SimulatorConfig, SimulatorStatus, TrainingMethod};
//!
//! # fn main() -> hopfield::Result<()> {
//! let config = SimulatorConfig::default().with_update_fraction(1.0).with_seed(42);
//! let mut sim = Simulator::new(config)?;
//!
//! sim.initialize(&patterns::reference_set(), TrainingMethod::Hebbian, &patterns::diamond())?;
//! let status = sim.run_to_completion()?;
//!
//! assert_eq!(status, SimulatorStatus::Converged);
//! assert_eq!(sim.iterations(), 0);
//! assert_eq!(sim.current_image(), Some(&patterns::diamond()));
//! # Ok(())
//! # }
//! ```

use crate::utils::IndexSource;
use crate::{
    dynamics, patterns, train, HopfieldError, Image, NetworkState, PatternCodec, Result,
    RunHistory, SimulatorConfig, TrainingMethod, WeightMatrix,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Run state of a [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatorStatus {
    /// No step taken yet in the current run
    Idle,
    /// Auto-stepping requested
    Running,
    /// Manual stepping
    Stepping,
    /// Last sweep changed nothing
    Converged,
    /// Iteration cap reached
    Exhausted,
}

impl SimulatorStatus {
    /// True for `Converged` and `Exhausted`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SimulatorStatus::Converged | SimulatorStatus::Exhausted)
    }
}

impl fmt::Display for SimulatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimulatorStatus::Idle => "idle",
            SimulatorStatus::Running => "running",
            SimulatorStatus::Stepping => "stepping",
            SimulatorStatus::Converged => "converged",
            SimulatorStatus::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// What a call to [`Simulator::run_step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The sweep changed the state; it was committed and recorded
    Accepted,
    /// The sweep changed nothing; the run is now converged
    Converged,
    /// The iteration cap was already reached; nothing ran
    Exhausted,
    /// No weights yet; nothing ran
    Skipped,
}

/// How the initial image of a run is produced, kept for `reset()`.
#[derive(Debug, Clone)]
enum InitialInput {
    Fixed(Image),
    Noisy { target: Image },
}

/// Hopfield recall simulator.
///
/// Generic over the [`IndexSource`] used to pick neurons during sweeps;
/// defaults to a `StdRng` seeded from [`SimulatorConfig::seed`]. Demo noise
/// always comes from a separate seeded `StdRng`.
pub struct Simulator<S: IndexSource = StdRng> {
    config: SimulatorConfig,
    codec: PatternCodec,
    source: S,
    noise_rng: StdRng,

    patterns: Vec<Image>,
    method: TrainingMethod,
    weights: Option<Arc<WeightMatrix>>,
    input: Option<InitialInput>,

    state: Option<NetworkState>,
    history: RunHistory,
    iterations: usize,
    status: SimulatorStatus,
}

impl Simulator<StdRng> {
    /// Create a simulator whose sweep order comes from a `StdRng` seeded with
    /// `config.seed`.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        let source = StdRng::seed_from_u64(config.seed);
        Self::with_source(config, source)
    }
}

impl<S: IndexSource> Simulator<S> {
    /// Create a simulator drawing sweep order from `source`.
    pub fn with_source(config: SimulatorConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            codec: PatternCodec::new(config.side),
            noise_rng: StdRng::seed_from_u64(config.seed),
            config,
            source,
            patterns: Vec::new(),
            method: TrainingMethod::default(),
            weights: None,
            input: None,
            state: None,
            history: RunHistory::new(),
            iterations: 0,
            status: SimulatorStatus::Idle,
        })
    }

    /// Train on `patterns` with `method` and start a run from
    /// `initial_image`.
    ///
    /// On error the simulator is left exactly as it was.
    pub fn initialize(
        &mut self,
        patterns: &[Image],
        method: TrainingMethod,
        initial_image: &Image,
    ) -> Result<()> {
        self.begin(
            patterns.to_vec(),
            method,
            InitialInput::Fixed(initial_image.clone()),
        )
    }

    /// Train on `patterns` with `method` and start a run from a copy of
    /// `target` corrupted at the configured noise level.
    ///
    /// On error the simulator, including its noise generator, is left
    /// exactly as it was.
    pub fn initialize_with_noise(
        &mut self,
        patterns: &[Image],
        method: TrainingMethod,
        target: &Image,
    ) -> Result<()> {
        self.begin(
            patterns.to_vec(),
            method,
            InitialInput::Noisy {
                target: target.clone(),
            },
        )
    }

    /// Start a fresh run with the same stored patterns and method. A noisy
    /// input is regenerated; a fixed input is reused.
    pub fn reset(&mut self) -> Result<()> {
        let input = self.input.clone().ok_or(HopfieldError::NotInitialized)?;
        let weights = self.weights.clone().ok_or(HopfieldError::NotInitialized)?;
        let (image, noise_rng) = self.resolve_input(&input)?;
        self.seed_run(weights, &image)?;
        self.noise_rng = noise_rng;
        Ok(())
    }

    /// Switch training method. Retrains and resets when patterns are stored;
    /// otherwise only records the choice for the next `initialize`.
    pub fn set_method(&mut self, method: TrainingMethod) -> Result<()> {
        match self.input.clone() {
            Some(input) => self.begin(self.patterns.clone(), method, input),
            None => {
                self.method = method;
                Ok(())
            }
        }
    }

    fn begin(&mut self, patterns: Vec<Image>, method: TrainingMethod, input: InitialInput) -> Result<()> {
        let weights = Arc::new(train(&self.codec, &patterns, method)?);
        let (image, noise_rng) = self.resolve_input(&input)?;
        self.seed_run(Arc::clone(&weights), &image)?;
        self.noise_rng = noise_rng;

        log::info!(
            "initialized {} network: {} patterns, {} neurons",
            method,
            patterns.len(),
            weights.num_neurons()
        );
        self.patterns = patterns;
        self.method = method;
        self.input = Some(input);
        Ok(())
    }

    /// Produce the initial image of a run along with the noise generator
    /// state to keep once the run is committed.
    fn resolve_input(&self, input: &InitialInput) -> Result<(Image, StdRng)> {
        let mut rng = self.noise_rng.clone();
        let image = match input {
            InitialInput::Fixed(image) => image.clone(),
            InitialInput::Noisy { target } => {
                patterns::add_noise(target, self.config.noise_level, &mut rng)?
            }
        };
        Ok((image, rng))
    }

    fn seed_run(&mut self, weights: Arc<WeightMatrix>, image: &Image) -> Result<()> {
        let state = NetworkState::from_image(&self.codec, image)?;
        self.weights = Some(weights);
        self.state = Some(state);
        self.history = RunHistory::seeded(image.clone());
        self.iterations = 0;
        self.status = SimulatorStatus::Idle;
        Ok(())
    }

    /// Run one sweep.
    ///
    /// - Without weights, or in a terminal state, nothing happens.
    /// - At the iteration cap the run becomes `Exhausted`.
    /// - If the sweep leaves the state unchanged the run becomes `Converged`;
    ///   the iteration counter and history are untouched.
    /// - Otherwise the new state is committed, recorded and counted. The
    ///   step that reaches `max_iterations` also ends the run as `Exhausted`.
    pub fn run_step(&mut self) -> Result<StepOutcome> {
        let (Some(weights), Some(current)) = (self.weights.as_ref(), self.state.as_ref()) else {
            log::warn!("run_step called before initialize; ignoring");
            return Ok(StepOutcome::Skipped);
        };

        match self.status {
            SimulatorStatus::Converged => return Ok(StepOutcome::Converged),
            SimulatorStatus::Exhausted => return Ok(StepOutcome::Exhausted),
            _ => {}
        }

        if self.iterations >= self.config.max_iterations {
            log::info!("iteration cap {} reached", self.config.max_iterations);
            self.status = SimulatorStatus::Exhausted;
            return Ok(StepOutcome::Exhausted);
        }

        let sweep = dynamics::sweep(current, weights, self.config.update_fraction, &mut self.source)?;
        log::debug!(
            "sweep {}: {} neurons updated, {} flipped",
            self.iterations + 1,
            sweep.visited.len(),
            sweep.flips
        );

        if &sweep.state == current {
            log::info!("converged after {} iterations", self.iterations);
            self.status = SimulatorStatus::Converged;
            return Ok(StepOutcome::Converged);
        }

        self.history.push(sweep.state.image().clone());
        self.state = Some(sweep.state);
        self.iterations += 1;
        if self.iterations >= self.config.max_iterations {
            log::info!("iteration cap {} reached", self.config.max_iterations);
            self.status = SimulatorStatus::Exhausted;
        } else if self.status == SimulatorStatus::Idle {
            self.status = SimulatorStatus::Stepping;
        }
        Ok(StepOutcome::Accepted)
    }

    /// Step until the run reaches a terminal state.
    pub fn run_to_completion(&mut self) -> Result<SimulatorStatus> {
        if self.weights.is_none() {
            return Err(HopfieldError::NotInitialized);
        }
        while !self.status.is_terminal() {
            self.run_step()?;
        }
        Ok(self.status)
    }

    /// Request auto-stepping. Returns false if the run is already terminal or
    /// the simulator is not initialized.
    pub fn start(&mut self) -> bool {
        if self.weights.is_none() || self.status.is_terminal() {
            return false;
        }
        self.status = SimulatorStatus::Running;
        true
    }

    /// Stop auto-stepping; the run stays open for manual steps.
    pub fn pause(&mut self) {
        if self.status == SimulatorStatus::Running {
            self.status = SimulatorStatus::Stepping;
        }
    }

    /// Current run state.
    #[inline]
    pub fn status(&self) -> SimulatorStatus {
        self.status
    }

    /// Accepted steps in the current run.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Training method of the current (or next) run.
    pub fn method(&self) -> TrainingMethod {
        self.method
    }

    /// Stored patterns of the current run.
    pub fn patterns(&self) -> &[Image] {
        &self.patterns
    }

    /// Trained weights, if any.
    pub fn weights(&self) -> Option<&WeightMatrix> {
        self.weights.as_deref()
    }

    /// Shared handle to the trained weights for read-only use elsewhere.
    pub fn shared_weights(&self) -> Option<Arc<WeightMatrix>> {
        self.weights.clone()
    }

    /// Current network state, if initialized.
    pub fn state(&self) -> Option<&NetworkState> {
        self.state.as_ref()
    }

    /// Current image, if initialized.
    pub fn current_image(&self) -> Option<&Image> {
        self.state.as_ref().map(NetworkState::image)
    }

    /// Images accepted in the current run, seed first.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Energy of the current state under the trained weights.
    pub fn energy(&self) -> Result<f64> {
        match (&self.state, &self.weights) {
            (Some(state), Some(weights)) => state.energy(weights),
            _ => Err(HopfieldError::NotInitialized),
        }
    }
}
