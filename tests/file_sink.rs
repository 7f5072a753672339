// File-mode sink behavior: open-once/truncate semantics, byte parity with
// the in-memory report, and the fatal open-failure path.

use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    process,
};

use bringup_core::{
    config::Config,
    report,
    sink::Sink,
    Error,
};

// Unique per test so parallel test threads never share a file.
fn temp_log(name: &str) -> PathBuf {
    env::temp_dir().join(format!("bringup_{}_{name}.log", process::id()))
}

fn file_config(path: &Path) -> Config {
    Config {
        log_file: Some(Box::leak(
            path.to_str().unwrap().to_string().into_boxed_str(),
        )),
        max_prime_candidate: 100,
        ..Config::default()
    }
}

#[test]
fn file_report_matches_in_memory_report() {
    let path = temp_log("parity");
    let config = file_config(&path);

    let mut sink = Sink::from_config(&config).unwrap();
    report::run(&config, &mut sink).unwrap();
    drop(sink);

    let mut expected = Vec::new();
    report::run(&config, &mut expected).unwrap();

    assert_eq!(fs::read(&path).unwrap(), expected);
    fs::remove_file(&path).unwrap();
}

#[test]
fn opening_truncates_prior_contents() {
    let path = temp_log("truncate");
    fs::write(&path, "stale output from an earlier run\n").unwrap();
    let config = file_config(&path);

    let mut sink = Sink::from_config(&config).unwrap();
    report::run(&config, &mut sink).unwrap();
    drop(sink);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("bringup 1.1  ("));
    assert!(!contents.contains("stale"));
    fs::remove_file(&path).unwrap();
}

#[test]
fn writes_append_through_one_handle() {
    let path = temp_log("append");
    let config = file_config(&path);

    let mut sink = Sink::from_config(&config).unwrap();
    sink.write_all(b"first\n").unwrap();
    sink.write_all(b"second\n").unwrap();
    drop(sink);

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    fs::remove_file(&path).unwrap();
}

#[test]
fn unopenable_path_is_fatal() {
    let path = temp_log("missing-dir").join("nested").join("out.log");
    let config = file_config(&path);

    match Sink::from_config(&config) {
        Err(Error::OpenLogFile { path: reported, .. }) => {
            assert_eq!(reported, path.to_str().unwrap());
        }
        other => panic!("expected OpenLogFile error, got {other:?}"),
    }
}
