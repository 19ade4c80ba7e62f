//! Single-thread consumer of the main queue: fans records out to adapters
//! and applies the overflow policy on a per-adapter basis.

use super::appender_adapter::AppenderAdapter;
use super::bounded_queue::{BoundedQueue, DequeueOutcome, EnqueueOutcome};
use super::events_handler::{EventsHandler, OverflowAction, OverflowReason};
use super::log_record::LogRecord;
use super::metrics::PipelineMetrics;
use parking_lot::RwLock;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_MAIN_QUEUE_SIZE: usize = 50_000;
pub const MAIN_QUEUE_POLL_INTERVAL: Duration = Duration::from_millis(500);

thread_local! {
    /// Guards against an events handler calling back into `LogWriter::log`
    /// on the dispatcher thread, which would deadlock on a full main queue.
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// One registered appender as seen by the dispatcher: the adapter plus
/// whether it still receives new dispatch (`del_appender` flips this to
/// `false` without tearing the adapter down).
struct AdapterSlot {
    id: u64,
    adapter: AppenderAdapter,
    active: bool,
}

/// Opaque handle returned by `LogWriter::add_appender`, used to later
/// `del_appender` the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppenderHandle(u64);

pub struct Dispatcher {
    main_queue: Arc<BoundedQueue<LogRecord>>,
    slots: Arc<RwLock<Vec<AdapterSlot>>>,
    terminated: Arc<AtomicBool>,
    next_id: AtomicU64,
    events_handler: Option<Arc<dyn EventsHandler>>,
}

impl Dispatcher {
    pub fn new(events_handler: Option<Arc<dyn EventsHandler>>) -> Arc<Self> {
        Self::with_queue_capacity(events_handler, DEFAULT_MAIN_QUEUE_SIZE)
    }

    pub fn with_queue_capacity(
        events_handler: Option<Arc<dyn EventsHandler>>,
        queue_capacity: usize,
    ) -> Arc<Self> {
        let main_queue = BoundedQueue::new(queue_capacity, MAIN_QUEUE_POLL_INTERVAL);
        let slots = Arc::new(RwLock::new(Vec::new()));
        let terminated = Arc::new(AtomicBool::new(false));

        Arc::new(Self {
            main_queue,
            slots,
            terminated,
            next_id: AtomicU64::new(0),
            events_handler,
        })
    }

    /// Starts the dispatch loop on its own thread. Must be called exactly
    /// once, right after construction.
    pub fn start(self: &Arc<Self>) -> JoinHandle<()> {
        let main_queue = self.main_queue.clone();
        let slots = self.slots.clone();
        let terminated = self.terminated.clone();
        let events_handler = self.events_handler.clone();

        thread::Builder::new()
            .name("log-dispatcher".to_string())
            .spawn(move || run(&main_queue, &slots, &terminated, events_handler.as_deref()))
            .expect("failed to spawn dispatcher thread")
    }

    pub fn main_queue(&self) -> &Arc<BoundedQueue<LogRecord>> {
        &self.main_queue
    }

    pub fn add_appender(&self, adapter: AppenderAdapter) -> AppenderHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.slots.write().push(AdapterSlot {
            id,
            adapter,
            active: true,
        });
        AppenderHandle(id)
    }

    /// Marks the slot inactive so future dispatch skips it. The adapter and
    /// its worker keep running and draining what is already queued until
    /// the dispatcher itself is torn down.
    pub fn del_appender(&self, handle: AppenderHandle) {
        let mut slots = self.slots.write();
        if let Some(slot) = slots.iter_mut().find(|s| s.id == handle.0) {
            slot.active = false;
        }
    }

    pub fn appenders_count(&self) -> usize {
        self.slots.read().iter().filter(|s| s.active).count()
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.slots
            .read()
            .iter()
            .filter(|s| s.active)
            .map(|s| s.adapter.name().to_string())
            .collect()
    }

    pub fn terminate(&self) {
        self.terminated.store(true, Ordering::Release);
    }
}

fn run(
    main_queue: &BoundedQueue<LogRecord>,
    slots: &RwLock<Vec<AdapterSlot>>,
    terminated: &AtomicBool,
    events_handler: Option<&dyn EventsHandler>,
) {
    loop {
        match main_queue.dequeue(MAIN_QUEUE_POLL_INTERVAL) {
            DequeueOutcome::Signaled(record) => {
                dispatch_one(&record, slots, events_handler);
            }
            DequeueOutcome::Timeout => {
                if terminated.load(Ordering::Acquire) {
                    break;
                }
            }
            DequeueOutcome::Shutdown => break,
        }
    }

    // Dropping the slots tears down every adapter (queue shutdown + worker
    // join + appender teardown), active or not.
    slots.write().clear();
}

fn dispatch_one(
    record: &LogRecord,
    slots: &RwLock<Vec<AdapterSlot>>,
    events_handler: Option<&dyn EventsHandler>,
) {
    let guard = slots.read();
    for slot in guard.iter().filter(|s| s.active) {
        if record.level < slot.adapter.level() {
            continue;
        }
        if slot.adapter.enqueue(record) == EnqueueOutcome::Rejected {
            handle_overflow(slot, record, events_handler);
        }
    }
}

fn handle_overflow(
    slot: &AdapterSlot,
    record: &LogRecord,
    events_handler: Option<&dyn EventsHandler>,
) {
    let mut action = OverflowAction::default();

    if let Some(handler) = events_handler {
        let already_dispatching = DISPATCHING.with(|flag| flag.get());
        if already_dispatching {
            eprintln!(
                "[LOGGER WARNING] events handler re-entered log() for appender '{}'; dropping record",
                slot.adapter.name()
            );
        } else {
            DISPATCHING.with(|flag| flag.set(true));
            handler.on_appender_error(
                slot.adapter.name(),
                record,
                OverflowReason::AdapterQueueFull,
                &mut action,
            );
            DISPATCHING.with(|flag| flag.set(false));
        }
    }

    match action {
        OverflowAction::SkipNewest => {}
        OverflowAction::DiscardOlder => {
            slot.adapter.discard_oldest();
        }
    }
}
