//! Diagnostics go to stderr. Stdout carries only the report, so JSON output
//! stays machine-readable at every verbosity.

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    /// Session summary and solved values.
    Verbose,
    /// Solve-mode selection and structure decomposition.
    Debug,
    /// Every parsed component and parallel group.
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn level(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Only this crate's events; dependencies stay silent unless `RUST_LOG` says otherwise.
    fn to_filter(self) -> String {
        format!("ohmtrace={}", self.level())
    }

    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }
}

pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    if verbosity <= Verbosity::Normal {
        builder.without_time().init();
    } else {
        builder.init();
    }
}
