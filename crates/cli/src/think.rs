//! Engine worker thread and the event stream feeding the main loop.
//!
//! The engine runs on its own thread so the artificial thinking pause does
//! not block input. Replies are tagged with the session epoch they were
//! requested under; cancellation via the shared flag is best effort, and
//! the main loop drops any reply whose epoch the session no longer accepts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use nim_core::Algorithm;
use nim_engine::{Analysis, MoveChoice, NimEngine};
use tracing::debug;

/// How often the thinking pause rechecks the cancel flag.
const CANCEL_POLL: Duration = Duration::from_millis(25);

/// Everything the main loop reacts to: user input and engine replies,
/// merged into one channel.
#[derive(Debug)]
pub enum Event {
    /// A line read from stdin.
    Line(String),
    /// Stdin closed or failed.
    Eof,
    /// The engine picked a move for the pile it was asked about.
    MoveReady {
        epoch: u64,
        stones: u32,
        choice: MoveChoice,
    },
    /// A standalone analysis refresh finished.
    AnalysisReady {
        epoch: u64,
        stones: u32,
        analysis: Analysis,
    },
}

/// Requests handled by the engine thread, in order.
enum Request {
    Think { epoch: u64, stones: u32 },
    Inspect { epoch: u64, stones: u32, timed: bool },
    SetAlgorithm(Algorithm),
    Shutdown,
}

/// The engine worker running in a separate thread.
///
/// Owns the [`NimEngine`]; a `Think` request sleeps through the configured
/// pause before searching, an `Inspect` request answers immediately.
pub struct EngineWorker {
    handle: Option<JoinHandle<()>>,
    tx_req: Sender<Request>,
    cancel: Arc<AtomicBool>,
}

impl EngineWorker {
    pub fn spawn(
        events: Sender<Event>,
        algorithm: Algorithm,
        seed: Option<u64>,
        think_delay: Duration,
    ) -> Self {
        let (tx_req, rx_req) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = cancel.clone();

        let handle = thread::spawn(move || {
            let mut engine = match seed {
                Some(seed) => NimEngine::with_seed(algorithm, seed),
                None => NimEngine::new(algorithm),
            };

            for request in rx_req {
                match request {
                    Request::Think { epoch, stones } => {
                        if wait_think_delay(think_delay, &cancel_flag) {
                            debug!(epoch, "thinking pause cancelled");
                            continue;
                        }
                        let choice = engine.choose_move(stones);
                        if !cancel_flag.load(Ordering::Relaxed) {
                            events
                                .send(Event::MoveReady {
                                    epoch,
                                    stones,
                                    choice,
                                })
                                .ok();
                        }
                    }
                    Request::Inspect {
                        epoch,
                        stones,
                        timed,
                    } => {
                        let analysis = engine.analyze(stones, timed);
                        events
                            .send(Event::AnalysisReady {
                                epoch,
                                stones,
                                analysis,
                            })
                            .ok();
                    }
                    Request::SetAlgorithm(algorithm) => engine.set_algorithm(algorithm),
                    Request::Shutdown => break,
                }
            }
        });

        Self {
            handle: Some(handle),
            tx_req,
            cancel,
        }
    }

    /// Asks for the engine's move after the thinking pause.
    pub fn request_move(&self, epoch: u64, stones: u32) {
        self.cancel.store(false, Ordering::Relaxed);
        self.tx_req.send(Request::Think { epoch, stones }).ok();
    }

    /// Asks for a fresh analysis of the pile, without a pause. The quiet
    /// (untimed) variant is used before any move has been made.
    pub fn request_analysis(&self, epoch: u64, stones: u32, timed: bool) {
        self.tx_req
            .send(Request::Inspect {
                epoch,
                stones,
                timed,
            })
            .ok();
    }

    /// Switches the algorithm used by later requests.
    pub fn set_algorithm(&self, algorithm: Algorithm) {
        self.tx_req.send(Request::SetAlgorithm(algorithm)).ok();
    }

    /// Aborts a pending thinking pause.
    pub fn cancel_pending(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        self.tx_req.send(Request::Shutdown).ok();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Sleeps through the thinking pause in short slices, watching the cancel
/// flag. Returns true if the pause was cancelled.
fn wait_think_delay(total: Duration, cancel: &AtomicBool) -> bool {
    let mut waited = Duration::ZERO;
    while waited < total {
        if cancel.load(Ordering::Relaxed) {
            return true;
        }
        let step = CANCEL_POLL.min(total - waited);
        thread::sleep(step);
        waited += step;
    }
    cancel.load(Ordering::Relaxed)
}

/// Forwards stdin lines into the event channel from a dedicated thread.
pub fn spawn_stdin_reader(events: Sender<Event>) {
    thread::spawn(move || {
        use std::io::BufRead;

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if events.send(Event::Line(line)).is_err() {
                return;
            }
        }
        events.send(Event::Eof).ok();
    });
}
