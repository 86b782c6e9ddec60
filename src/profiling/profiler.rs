//! Chrome Trace recording of worker spans.
//!
//! Compiled in with `--features profiling`. Each [`SpanGuard`] becomes one
//! complete event (`"ph": "X"`) with integer counters as its `args`; the
//! collected events are written as `{"traceEvents": [...]}` by
//! [`shutdown`] using `serde_json`.
//!
//! Without the feature every function here is an empty inline stub.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

#[cfg(feature = "profiling")]
mod recorder {
    use std::collections::BTreeMap;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::OnceLock;
    use std::time::Instant;

    use log::{debug, error};
    use parking_lot::Mutex;
    use serde::Serialize;

    use super::*;


    #[derive(Debug, Serialize)]
    struct CompleteEvent {
        name: String,
        cat: &'static str,
        ph: &'static str,
        ts: u64,
        dur: u64,
        pid: u32,
        tid: u64,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        args: BTreeMap<&'static str, u64>,
    }

    #[derive(Serialize)]
    struct Trace<'a> {
        #[serde(rename = "traceEvents")]
        events: &'a [CompleteEvent],
    }

    struct Recorder {
        origin: Instant,
        path: PathBuf,
        recording: AtomicBool,
        events: Mutex<Vec<CompleteEvent>>,
    }

    impl Recorder {
        fn micros(&self) -> u64 {
            u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
        }

        fn flush(&self) -> io::Result<usize> {
            let events = std::mem::take(&mut *self.events.lock());
            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)?;
            }
            let mut out = BufWriter::new(File::create(&self.path)?);
            serde_json::to_writer(&mut out, &Trace { events: &events })?;
            out.flush()?;
            Ok(events.len())
        }
    }

    static RECORDER: OnceLock<Recorder> = OnceLock::new();
    static THREAD_IDS: AtomicU64 = AtomicU64::new(1);

    thread_local! {
        static THREAD_ID: u64 = THREAD_IDS.fetch_add(1, Ordering::Relaxed);
    }

    fn recording() -> Option<&'static Recorder> {
        RECORDER
            .get()
            .filter(|r| r.recording.load(Ordering::Acquire))
    }

    /// Starts recording; events will be written to `path`.
    ///
    /// Only the first call in a process takes effect.
    pub fn init<P: AsRef<Path>>(path: P) {
        let fresh = RECORDER
            .set(Recorder {
                origin: Instant::now(),
                path: path.as_ref().to_path_buf(),
                recording: AtomicBool::new(true),
                events: Mutex::new(Vec::new()),
            })
            .is_ok();
        if !fresh {
            debug!("profiler already initialised; keeping the first output path");
        }
    }

    /// Stops recording and writes the trace file.
    pub fn shutdown() {
        let Some(recorder) = RECORDER.get() else { return };
        recorder.recording.store(false, Ordering::Release);
        match recorder.flush() {
            Ok(n) => debug!("wrote {n} trace events to {}", recorder.path.display()),
            Err(e) => error!("failed to write trace {}: {e}", recorder.path.display()),
        }
    }

    /// Opens a span named `name` on the calling thread.
    pub fn span(name: impl Into<Cow<'static, str>>) -> SpanGuard {
        SpanGuard {
            open: recording().map(|r| OpenSpan {
                name: name.into().into_owned(),
                start: r.micros(),
                tid: THREAD_ID.with(|id| *id),
                args: BTreeMap::new(),
            }),
        }
    }

    /// [`span`] with a name built from `format_args!`; formats only while
    /// recording.
    pub fn span_fmt(args: fmt::Arguments<'_>) -> SpanGuard {
        match recording() {
            Some(_) => span(args.to_string()),
            None => SpanGuard { open: None },
        }
    }

    struct OpenSpan {
        name: String,
        start: u64,
        tid: u64,
        args: BTreeMap<&'static str, u64>,
    }

    /// Closes its span when dropped.
    pub struct SpanGuard {
        open: Option<OpenSpan>,
    }

    impl SpanGuard {
        /// Attaches an integer counter to the span.
        pub fn arg(mut self, key: &'static str, value: u64) -> Self {
            if let Some(open) = self.open.as_mut() {
                open.args.insert(key, value);
            }
            self
        }
    }

    impl Drop for SpanGuard {
        fn drop(&mut self) {
            let (Some(open), Some(recorder)) = (self.open.take(), recording()) else {
                return;
            };
            let end = recorder.micros();
            recorder.events.lock().push(CompleteEvent {
                name: open.name,
                cat: "reduce",
                ph: "X",
                ts: open.start,
                dur: end.saturating_sub(open.start),
                pid: std::process::id(),
                tid: open.tid,
                args: open.args,
            });
        }
    }
}

#[cfg(not(feature = "profiling"))]
mod recorder {
    use super::*;

    /// No-op without the `profiling` feature.
    #[inline]
    pub fn init<P: AsRef<Path>>(_path: P) {}

    /// No-op without the `profiling` feature.
    #[inline]
    pub fn shutdown() {}

    /// No-op without the `profiling` feature.
    #[inline]
    pub fn span(_name: impl Into<Cow<'static, str>>) -> SpanGuard {
        SpanGuard
    }

    /// No-op without the `profiling` feature.
    #[inline]
    pub fn span_fmt(_args: fmt::Arguments<'_>) -> SpanGuard {
        SpanGuard
    }

    /// Empty guard.
    pub struct SpanGuard;

    impl SpanGuard {
        /// No-op without the `profiling` feature.
        #[inline]
        pub fn arg(self, _key: &'static str, _value: u64) -> Self {
            self
        }
    }
}

pub use recorder::{init, shutdown, span, span_fmt, SpanGuard};
