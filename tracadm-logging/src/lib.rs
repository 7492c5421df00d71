//! Tracing subscriber setup for the tracadm CLI.
//!
//! Configuration comes from environment variables so operator output on
//! stdout stays clean by default:
//! - `LOG_LEVEL`  - filter directive, default `info`
//! - `LOG_OUTPUT` - `console` (default), `file`, `both`, or `none`
//! - `LOG_FORMAT` - `human` (default) or `json`
//! - `LOG_FILE_PATH` - file target, default `/tmp/tracadm.log`

use std::{
    env,
    io::{self, Write},
    path::Path,
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

// Writer that duplicates every line to two sinks, used for `both`.
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B, W1, W2> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a, Writer = W1>,
    B: MakeWriter<'a, Writer = W2>,
    W1: Write + 'a,
    W2: Write + 'a,
{
    type Writer = Tee<W1, W2>;
    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

/// Maps a `LOG_OUTPUT` value to `(console, file)` targets.
///
/// Unrecognized values fall back to console-only, matching the default.
fn output_targets(raw: &str) -> (bool, bool) {
    match raw {
        "file" => (false, true),
        "both" => (true, true),
        "none" => (false, false),
        _ => (true, false),
    }
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// Returns a `WorkerGuard` when logging to a file; the guard must be held
/// for the lifetime of the process so buffered lines are flushed.
pub fn init_subscriber() -> Option<WorkerGuard> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_output = env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "human".to_string());
    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| "/tmp/tracadm.log".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let (use_console, use_file) = output_targets(&log_output);
    let is_json = log_format == "json";
    let subscriber = registry().with(env_filter);

    let log_path = Path::new(&log_file_path);
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
    let log_filename = log_path.file_name().unwrap_or("tracadm.log".as_ref());

    let mut guard: Option<WorkerGuard> = None;

    if use_console && use_file {
        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(_guard);

        // Console logging goes to stderr so command output on stdout
        // stays machine-readable.
        let tee_writer = MakeTee {
            make_a: std::io::stderr,
            make_b: non_blocking,
        };

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(tee_writer);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer).init();
        }
    } else if use_file {
        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(_guard);

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer).init();
        }
    } else if use_console {
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer).init();
        }
    } else {
        subscriber.init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_targets() {
        assert_eq!(output_targets("console"), (true, false));
        assert_eq!(output_targets("file"), (false, true));
        assert_eq!(output_targets("both"), (true, true));
        assert_eq!(output_targets("none"), (false, false));
    }

    #[test]
    fn test_unrecognized_output_falls_back_to_console() {
        assert_eq!(output_targets("syslog"), (true, false));
        assert_eq!(output_targets(""), (true, false));
    }
}
