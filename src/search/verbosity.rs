use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// How much the binaries log to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

impl Verbosity {
    /// Install the global log subscriber. `RUST_LOG`, when set, takes
    /// precedence over the verbosity level.
    pub fn init_logging(self, colour: bool) {
        let level: tracing::Level = self.into();
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(colour)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
