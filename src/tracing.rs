use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

/// Stderr plus an optional log file chosen after the CLI is parsed.
#[derive(Clone, Default)]
struct LogSink {
    file: Arc<Mutex<Option<File>>>,
}

impl LogSink {
    fn file(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

struct SinkWriter {
    sink: LogSink,
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter { sink: self.clone() }
    }
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Some(file) = self.sink.file().as_mut() {
            // a failing log file must not take stderr logging down with it
            let _ = file.write_all(&buf[..written]);
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.sink.file().as_mut() {
            let _ = file.flush();
        }
        Ok(())
    }
}

static SINK: OnceLock<LogSink> = OnceLock::new();

/// Routes `log` records into a fmt subscriber filtered by `RUST_LOG`
/// (default `info`).
pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let sink = SINK.get_or_init(LogSink::default).clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(sink)
        .try_init();
}

/// Starts (or stops, with `None`) appending log output to a file.
pub fn set_log_file(log_file: Option<&Path>) -> io::Result<()> {
    let Some(sink) = SINK.get() else {
        return Ok(());
    };
    let file = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Some(OpenOptions::new().create(true).append(true).open(path)?)
        }
        None => None,
    };
    *sink.file() = file;
    Ok(())
}
