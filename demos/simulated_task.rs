//! Example driving a bar through a simulated batch of files

use color_eyre::Result;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tallybar::{BarBuilder, BarConfig, Glyphs};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Diagnostics go to stderr; try RUST_LOG=tallybar=debug.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let files = ["alpha.bin", "beta.bin", "gamma.bin", "delta.bin"];
    let per_file = 25;

    let mut bar = BarBuilder::new()
        .total((files.len() * per_file) as u64)
        .width(30)
        .glyphs(Glyphs::line())
        .format(format!("{} :file", BarConfig::FORMAT_VERBOSE))
        .custom_verb("file")
        .build()?;

    let mut stderr = std::io::stderr();
    for file in files {
        bar.set_value("file", file);
        for _ in 0..per_file {
            bar.inc(1);
            write!(stderr, "\r{}", bar.render())?;
            stderr.flush()?;
            thread::sleep(Duration::from_millis(20));
        }
    }
    writeln!(stderr)?;
    writeln!(stderr, "{}", bar.debug())?;

    Ok(())
}
