use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to `~/.local/state/swulist/swulist.log`.
///
/// Logs go to a file rather than the terminal so stdout stays a single
/// machine-readable line for the pipeline consumer. On CI runners without a
/// usable XDG state directory the log falls back to stderr, which the
/// surrounding job captures anyway.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,swulist=debug"));

    let writer = match open_log_file() {
        Ok((file, path)) => {
            let writer = BoxMakeWriter::new(FileMakeWriter(file));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(path)
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            None
        }
    };

    match writer {
        Some(path) => tracing::info!("swulist logging initialized at {}", path.display()),
        None => tracing::debug!("no XDG state dir; logging to stderr"),
    }

    Ok(())
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("swulist")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("swulist.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Writer that clones one shared file handle per event.
struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = fs::File;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.try_clone().expect("failed to clone log file handle")
    }
}
