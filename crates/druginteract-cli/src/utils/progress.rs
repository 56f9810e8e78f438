use druginteract::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

struct HandlerState {
    pb: ProgressBar,
    phase: usize,
    current_phase: &'static str,
}

/// Renders analysis progress events as a spinner per phase and a bar while
/// per-gene scores are combined.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<HandlerState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::spinner_style());
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(HandlerState {
                pb,
                phase: 0,
                current_phase: "",
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut guard) = state.lock() else {
                warn!("Progress state mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    guard.phase += 1;
                    guard.current_phase = name;
                    let message = format!("[{}] {}", guard.phase, name);
                    let pb = &guard.pb;
                    pb.reset();
                    pb.set_length(0);
                    pb.set_style(Self::spinner_style());
                    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb.set_message(message);
                }
                Progress::PhaseFinish => {
                    let message = format!("✓ {}", guard.current_phase);
                    guard.pb.disable_steady_tick();
                    guard.pb.finish_with_message(message);
                }
                Progress::TaskStart { total_steps } => {
                    let pb = &guard.pb;
                    pb.disable_steady_tick();
                    pb.reset();
                    pb.set_length(total_steps);
                    pb.set_position(0);
                    pb.set_style(Self::bar_style());
                }
                Progress::TaskIncrement => {
                    guard.pb.inc(1);
                }
                Progress::TaskFinish => {
                    let pb = &guard.pb;
                    pb.set_position(pb.length().unwrap_or(0));
                }
                Progress::Message(msg) => {
                    if guard.pb.is_finished() {
                        guard.pb.set_message(msg);
                    } else {
                        guard.pb.println(format!("  {}", msg));
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} genes")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
