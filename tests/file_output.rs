mod common;

use common::{FIXED_FILE_NAME, FixedHost, SpyConsole, read_lines};
use gamedebug::output::file_chunk;
use gamedebug::{Config, ConsoleKind, Error, Logger};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn file_config(dir: &Path) -> Config {
    Config {
        enable_color: false,
        enable_show_time: false,
        enable_show_execution_context: false,
        log_dir: Some(dir.to_path_buf()),
        ..Config::default()
    }
}

fn logger_with(config: Config, host: impl gamedebug::Host + 'static) -> Logger {
    Logger::builder()
        .config(config)
        .console(SpyConsole::default(), ConsoleKind::Plain)
        .host(host)
        .caller_resolver(|| "Foo::Bar".to_string())
        .build()
}

#[test]
fn lazily_creates_one_file_per_run() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("Log");
    let logger = logger_with(file_config(&dir), FixedHost::new(tmp.path()));

    assert!(!dir.exists());
    assert!(logger.log_file().is_none());

    logger.info("one").unwrap();
    logger.warning("two").unwrap();

    let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let path = logger.log_file().unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, FIXED_FILE_NAME);
    assert!(!name.contains(['-', ':', ' ']));

    assert_eq!(
        read_lines(&path),
        vec!["  >>>  Foo::Bar () one [N]", "  >>>  Foo::Bar () two [W]"]
    );
}

#[test]
fn file_copy_never_carries_markup() {
    let tmp = TempDir::new().unwrap();
    let console = Arc::new(SpyConsole::default());
    let logger = Logger::builder()
        .config(Config {
            enable_color: true,
            ..file_config(tmp.path())
        })
        .console(Arc::clone(&console), ConsoleKind::ColorCapable)
        .host(FixedHost::new(tmp.path()))
        .caller_resolver(|| "Foo::Bar".to_string())
        .build();

    logger.error("boom").unwrap();

    assert!(console.texts()[0].contains("FF0000"));
    let lines = read_lines(&tmp.path().join(FIXED_FILE_NAME));
    assert_eq!(lines[0], "  >>>  Foo::Bar () boom [E]");
    assert!(lines.iter().all(|l| !l.contains("<color")));
}

#[test]
fn errors_always_dump_stack() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_with(file_config(tmp.path()), FixedHost::new(tmp.path()));

    logger.info("quiet").unwrap();
    logger.warning("quiet too").unwrap();
    logger.error("loud").unwrap();

    let lines = read_lines(&tmp.path().join(FIXED_FILE_NAME));
    assert_eq!(lines[0], "  >>>  Foo::Bar () quiet [N]");
    assert_eq!(lines[1], "  >>>  Foo::Bar () quiet too [W]");
    assert_eq!(lines[2], "  >>>  Foo::Bar () loud [E]");
    let dump = &lines[3..];
    assert!(!dump.is_empty());
    assert!(dump.iter().all(|l| l.starts_with("     file: ")));
    assert!(dump.iter().all(|l| l.contains("  line: ") && l.contains("  fn: ")));
}

#[test]
fn stack_toggle_dumps_every_level() {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        enable_file_stack_trace: true,
        ..file_config(tmp.path())
    };
    let logger = logger_with(config, FixedHost::new(tmp.path()));

    logger.info("first").unwrap();
    logger.info("second").unwrap();

    let lines = read_lines(&tmp.path().join(FIXED_FILE_NAME));
    assert_eq!(lines[0], "  >>>  Foo::Bar () first [N]");
    assert!(lines[1].starts_with("     file: "));
    let second = lines
        .iter()
        .position(|l| l == "  >>>  Foo::Bar () second [N]")
        .unwrap();
    assert!(second > 1);
    assert!(lines[second + 1..].iter().all(|l| l.starts_with("     file: ")));
}

#[test]
fn dump_excludes_logger_frames() {
    let tmp = TempDir::new().unwrap();
    let logger = logger_with(file_config(tmp.path()), FixedHost::new(tmp.path()));

    logger.error("where").unwrap();

    let lines = read_lines(&tmp.path().join(FIXED_FILE_NAME));
    assert!(lines[1..].iter().all(|l| !l.contains("fn: gamedebug::")));
    assert!(lines[1..].iter().any(|l| l.contains("dump_excludes_logger_frames")));
}

#[test]
fn marker_can_be_disabled() {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        enable_file_level_marker: false,
        ..file_config(tmp.path())
    };
    let logger = logger_with(config, FixedHost::new(tmp.path()));

    logger.warning("bare").unwrap();

    assert_eq!(
        read_lines(&tmp.path().join(FIXED_FILE_NAME)),
        vec!["  >>>  Foo::Bar () bare"]
    );
}

#[test]
fn default_directory_is_log_under_base() {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        log_dir: None,
        ..file_config(tmp.path())
    };
    let logger = logger_with(config, FixedHost::new(tmp.path()));

    logger.info("here").unwrap();

    assert!(tmp.path().join("Log").join(FIXED_FILE_NAME).is_file());
}

#[test]
fn directory_failure_is_reported_once_then_disabled() {
    let tmp = TempDir::new().unwrap();
    let host = Arc::new(FixedHost::denying(tmp.path()));
    let console = Arc::new(SpyConsole::default());
    let logger = Logger::builder()
        .config(file_config(&tmp.path().join("locked").join("Log")))
        .console(Arc::clone(&console), ConsoleKind::Plain)
        .host(Arc::clone(&host))
        .caller_resolver(|| "Foo::Bar".to_string())
        .build();

    let first = logger.info("first");
    assert!(matches!(first, Err(Error::CreateDir { .. })));
    assert!(logger.file_disabled());

    for i in 0..5 {
        logger.info(&format!("again {i}")).unwrap();
    }

    assert_eq!(host.attempts(), 1);
    // Console delivery is unaffected by the file failure.
    assert_eq!(console.count(), 6);
}

#[test]
fn open_failure_is_fatal_once() {
    let tmp = TempDir::new().unwrap();
    // A directory squatting on the log file's name makes the append-open fail.
    fs::create_dir(tmp.path().join(FIXED_FILE_NAME)).unwrap();
    let logger = logger_with(file_config(tmp.path()), FixedHost::new(tmp.path()));

    assert!(matches!(logger.info("x"), Err(Error::OpenFile { .. })));
    assert!(logger.file_disabled());
    assert!(logger.info("y").is_ok());
}

#[test]
fn empty_directory_disables_silently() {
    let tmp = TempDir::new().unwrap();
    let host = Arc::new(FixedHost::new(tmp.path()));
    let config = Config {
        log_dir: Some("".into()),
        ..file_config(tmp.path())
    };
    let logger = logger_with(config, Arc::clone(&host));

    logger.error("nowhere").unwrap();
    logger.error("still nowhere").unwrap();

    assert!(logger.file_disabled());
    assert_eq!(host.attempts(), 0);
}

#[test]
fn save_file_toggle_skips_file_entirely() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("Log");
    let config = Config {
        enable_save_file: false,
        ..file_config(&dir)
    };
    let logger = logger_with(config, FixedHost::new(tmp.path()));

    logger.error("console only").unwrap();

    assert!(!dir.exists());
    assert!(!logger.file_disabled());
}

#[test]
fn banner_opens_the_file() {
    let tmp = TempDir::new().unwrap();
    let console = Arc::new(SpyConsole::default());
    let logger = Logger::builder()
        .config(Config {
            enable_info: false,
            ..file_config(tmp.path())
        })
        .console(Arc::clone(&console), ConsoleKind::Plain)
        .host(FixedHost::new(tmp.path()))
        .init()
        .unwrap();

    let lines = read_lines(&logger.log_file().unwrap());
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("=========="));
    assert!(lines[1].contains("GameDebug"));
    assert_eq!(lines[3], "Time:\t07:05:01.250 [N]");
    assert_eq!(
        lines[4],
        format!("Path:\t{} [N]", tmp.path().display())
    );
    assert_eq!(console.count(), 6);

    // Info is gated off; the banner was not.
    logger.info("hidden").unwrap();
    assert_eq!(console.count(), 6);
}

#[test]
fn banner_surfaces_directory_failure() {
    let tmp = TempDir::new().unwrap();
    let result = Logger::builder()
        .config(file_config(&tmp.path().join("denied")))
        .console(SpyConsole::default(), ConsoleKind::Plain)
        .host(FixedHost::denying(tmp.path()))
        .init();

    assert!(matches!(result, Err(Error::CreateDir { .. })));
}

#[test]
fn banner_ignores_stack_toggle() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::builder()
        .config(Config {
            enable_file_stack_trace: true,
            ..file_config(tmp.path())
        })
        .console(SpyConsole::default(), ConsoleKind::Plain)
        .host(FixedHost::new(tmp.path()))
        .caller_resolver(|| "Foo::Bar".to_string())
        .init()
        .unwrap();

    let path = logger.log_file().unwrap();
    let banner = read_lines(&path);
    assert_eq!(banner.len(), 6);
    assert!(banner.iter().all(|l| !l.starts_with("     file: ")));

    // Ordinary lines still honor the toggle.
    logger.info("after").unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines[6], "  >>>  Foo::Bar () after [N]");
    assert!(lines.len() > 7);
    assert!(lines[7..].iter().all(|l| l.starts_with("     file: ")));
}

#[test]
fn chunk_is_built_without_a_sink() {
    assert_eq!(file_chunk("line", false), "line\n");

    let chunk = file_chunk("line", true);
    let mut lines = chunk.lines();
    assert_eq!(lines.next(), Some("line"));
    let dump: Vec<&str> = lines.collect();
    assert!(!dump.is_empty());
    assert!(dump.iter().all(|l| l.starts_with("     file: ")));
    assert!(dump.iter().any(|l| l.contains("chunk_is_built_without_a_sink")));
    assert!(dump.iter().all(|l| !l.contains("fn: gamedebug::")));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_is_reported_and_retried() {
    let tmp = TempDir::new().unwrap();
    // Opening succeeds, every write fails with "no space left on device".
    std::os::unix::fs::symlink("/dev/full", tmp.path().join(FIXED_FILE_NAME)).unwrap();
    let console = Arc::new(SpyConsole::default());
    let logger = Logger::builder()
        .config(file_config(tmp.path()))
        .console(Arc::clone(&console), ConsoleKind::Plain)
        .host(FixedHost::new(tmp.path()))
        .caller_resolver(|| "Foo::Bar".to_string())
        .build();

    assert!(matches!(logger.info("first"), Err(Error::Write(_))));
    assert!(!logger.file_disabled());
    assert!(matches!(logger.info("second"), Err(Error::Write(_))));
    assert!(!logger.file_disabled());
    assert!(logger.log_file().is_some());
    assert_eq!(console.count(), 2);
}
