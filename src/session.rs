//! Generation-stamped scan session
//!
//! Each new request bumps a monotonically increasing generation counter and
//! keeps the value it saw. When a request finishes, its outcome is applied
//! only if no newer request has started in the meantime; otherwise it is
//! dropped without touching the handler. Superseded work is not preempted,
//! it simply runs to completion and is ignored.
//!
//! The counter is only ever incremented and compared, so it lives in an
//! atomic. Handler callbacks are serialized by the `Mutex` the caller hands
//! to [`ScanSession::start`].

use crate::decoder::SymbolDecoder;
use crate::error::DecoderFault;
use crate::models::{PixelBuffer, ScanOutcome, ScanResult};
use crate::search::scan_barcode;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, mpsc};

/// Receives the outcome of the most recent scan request
pub trait ScanHandler {
    /// A request started; show a busy indicator
    fn scan_started(&mut self) {}

    /// The current request finished; hide the busy indicator
    fn scan_stopped(&mut self) {}

    /// A symbol was decoded
    fn on_decoded(&mut self, result: ScanResult);

    /// Every orientation and inversion was tried without success
    fn on_not_found(&mut self);

    /// The decoder failed
    fn on_error(&mut self, fault: DecoderFault);
}

/// Identity of one scan request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanTicket {
    generation: u64,
}

impl ScanTicket {
    /// Generation captured when the request started
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Request was still current; the handler received its outcome
    Applied,
    /// A newer request had started; the outcome was dropped
    Superseded,
}

/// Whether a request is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No request in flight, or the latest one has been applied
    Idle,
    /// The latest request has not completed yet
    Scanning,
}

/// Handle to a request running on the worker pool
#[derive(Debug)]
pub struct PendingScan {
    ticket: ScanTicket,
    done: mpsc::Receiver<Completion>,
}

impl PendingScan {
    /// Ticket of the request
    pub fn ticket(&self) -> ScanTicket {
        self.ticket
    }

    /// Block until the request finishes.
    ///
    /// `None` if the worker died before reporting (e.g. the decoder panicked).
    pub fn wait(self) -> Option<Completion> {
        self.done.recv().ok()
    }
}

/// Cancellable, generation-stamped wrapper around the search
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    generation: Arc<AtomicU64>,
    settled: Arc<AtomicU64>,
}

static GLOBAL_SESSION: OnceLock<ScanSession> = OnceLock::new();

impl ScanSession {
    /// Create a session with its own counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide session; its counter resets only with the process
    pub fn global() -> &'static ScanSession {
        GLOBAL_SESSION.get_or_init(ScanSession::new)
    }

    /// Latest generation handed out
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Idle once the newest request has been applied
    pub fn state(&self) -> SessionState {
        if self.settled.load(Ordering::SeqCst) == self.current_generation() {
            SessionState::Idle
        } else {
            SessionState::Scanning
        }
    }

    /// True if no newer request has started since `ticket`
    pub fn is_current(&self, ticket: ScanTicket) -> bool {
        ticket.generation == self.current_generation()
    }

    /// Start a request: bump the generation and signal busy
    pub fn begin<H: ScanHandler + ?Sized>(&self, handler: &mut H) -> ScanTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("session: scan {} started", generation);
        handler.scan_started();
        ScanTicket { generation }
    }

    /// Finish a request, routing its outcome to `handler` if still current
    pub fn complete<H: ScanHandler + ?Sized>(
        &self,
        ticket: ScanTicket,
        result: Result<ScanOutcome, DecoderFault>,
        handler: &mut H,
    ) -> Completion {
        if !self.is_current(ticket) {
            debug!(
                "session: dropping scan {} (current is {})",
                ticket.generation,
                self.current_generation()
            );
            return Completion::Superseded;
        }

        match result {
            Ok(ScanOutcome::Decoded(r)) => handler.on_decoded(r),
            Ok(ScanOutcome::NotFound) => handler.on_not_found(),
            Err(fault) => {
                warn!("session: scan {} failed: {}", ticket.generation, fault);
                handler.on_error(fault);
            }
        }
        handler.scan_stopped();
        self.settled.store(ticket.generation, Ordering::SeqCst);
        Completion::Applied
    }

    /// Fire-and-forget scan on rayon's global pool.
    ///
    /// The returned handle reports whether the outcome was applied or dropped.
    pub fn start<D, H>(
        &self,
        buffer: PixelBuffer,
        decoder: Arc<D>,
        handler: Arc<Mutex<H>>,
    ) -> PendingScan
    where
        D: SymbolDecoder + ?Sized + 'static,
        H: ScanHandler + Send + 'static,
    {
        let ticket = {
            let mut guard = handler.lock().unwrap_or_else(|e| e.into_inner());
            self.begin(&mut *guard)
        };

        let (tx, done) = mpsc::channel();
        let session = self.clone();
        rayon::spawn(move || {
            let result = scan_barcode(&buffer, decoder.as_ref());
            let mut guard = handler.lock().unwrap_or_else(|e| e.into_inner());
            let completion = session.complete(ticket, result, &mut *guard);
            drop(guard);
            let _ = tx.send(completion);
        });

        PendingScan { ticket, done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Orientation;
    use std::time::SystemTime;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl ScanHandler for Recorder {
        fn scan_started(&mut self) {
            self.events.push("busy".into());
        }
        fn scan_stopped(&mut self) {
            self.events.push("idle".into());
        }
        fn on_decoded(&mut self, result: ScanResult) {
            self.events.push(format!("decoded:{}", result.value));
        }
        fn on_not_found(&mut self) {
            self.events.push("not_found".into());
        }
        fn on_error(&mut self, fault: DecoderFault) {
            self.events.push(format!("error:{fault}"));
        }
    }

    fn decoded(value: &str) -> Result<ScanOutcome, DecoderFault> {
        Ok(ScanOutcome::Decoded(ScanResult {
            value: value.to_string(),
            format: "EAN-13".to_string(),
            orientation: Orientation::Deg0,
            was_inverted: false,
            scanned_at: SystemTime::now(),
        }))
    }

    #[test]
    fn test_generation_increments() {
        let session = ScanSession::new();
        let mut h = Recorder::default();
        assert_eq!(session.current_generation(), 0);
        let a = session.begin(&mut h);
        let b = session.begin(&mut h);
        assert_eq!((a.generation(), b.generation()), (1, 2));
        assert!(!session.is_current(a));
        assert!(session.is_current(b));
    }

    #[test]
    fn test_state_transitions() {
        let session = ScanSession::new();
        let mut h = Recorder::default();
        assert_eq!(session.state(), SessionState::Idle);
        let t = session.begin(&mut h);
        assert_eq!(session.state(), SessionState::Scanning);
        session.complete(t, Ok(ScanOutcome::NotFound), &mut h);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(h.events, vec!["busy", "not_found", "idle"]);
    }

    #[test]
    fn test_superseded_outcome_is_dropped() {
        let session = ScanSession::new();
        let mut h = Recorder::default();
        let a = session.begin(&mut h);
        let b = session.begin(&mut h);

        assert_eq!(session.complete(a, decoded("A"), &mut h), Completion::Superseded);
        assert_eq!(session.state(), SessionState::Scanning);
        assert_eq!(session.complete(b, decoded("B"), &mut h), Completion::Applied);
        assert_eq!(h.events, vec!["busy", "busy", "decoded:B", "idle"]);
    }

    #[test]
    fn test_errors_are_routed_when_current() {
        let session = ScanSession::new();
        let mut h = Recorder::default();
        let t = session.begin(&mut h);
        let fault = DecoderFault::Internal("boom".into());
        assert_eq!(session.complete(t, Err(fault), &mut h), Completion::Applied);
        assert_eq!(h.events, vec!["busy", "error:decoder failure: boom", "idle"]);
    }

    #[test]
    fn test_clones_share_counter() {
        let session = ScanSession::new();
        let other = session.clone();
        let mut h = Recorder::default();
        let t = session.begin(&mut h);
        other.begin(&mut h);
        assert!(!session.is_current(t));
    }
}
