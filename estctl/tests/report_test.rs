// Report lines emitted by the reporter the loop installs from its config.
// Kept in its own test binary: the captured logger is process-wide.
use estctl::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

const REPORT_TARGET: &str = "estctl_core::scheduling::observer";

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) && record.target().starts_with(REPORT_TARGET) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<String> {
    std::mem::take(&mut *LOGGER.lines.lock().unwrap())
}

#[test]
fn test_standard_run_reports_every_fifty_ticks() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let params = SimParams {
        run: LoopConfig::standard(),
        ..Default::default()
    };
    let mut control_loop = build_loop(&params).unwrap();
    control_loop.run();

    let lines = take_lines();
    assert_eq!(lines.len(), 21, "{:#?}", lines);

    let reports: Vec<&String> = lines.iter().filter(|l| l.starts_with("step ")).collect();
    assert_eq!(reports.len(), 20);
    assert!(reports[0].starts_with("step 0 "));
    assert!(reports[1].starts_with("step 50 "));
    assert!(reports[19].starts_with("step 950 "));
    assert!(lines[20].starts_with("finished 1000 ticks"));

    // A finished loop runs no ticks and stays quiet
    control_loop.run();
    assert!(take_lines().is_empty());

    // No reporter without a cadence
    let quiet = SimParams {
        run: LoopConfig::standard().without_reports(),
        ..Default::default()
    };
    build_loop(&quiet).unwrap().run();
    assert!(take_lines().is_empty());
}
