use std::{
    fs::File,
    io::{BufReader, Read},
    sync::Once,
};

use anyhow::{Context, Result};
use tracing::info;

use config::ReplConfig;

mod config;
mod repl;

static TRACING_INIT: Once = Once::new();

/// Installs the stderr subscriber. Filtered by `RUST_LOG`, silent when unset.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> Result<()> {
    init_tracing();

    let Some(file) = std::env::args().nth(1) else {
        return repl::start(&ReplConfig::from_env());
    };

    info!(%file, "tokenizing source file");

    let mut bf = BufReader::new(
        File::open(&file).with_context(|| format!("could not open source file `{file}`"))?,
    );

    let mut source = String::new();

    bf.read_to_string(&mut source)
        .with_context(|| format!("could not read source file `{file}`"))?;

    repl::write_tokens(&mut std::io::stdout().lock(), &source)?;

    Ok(())
}
