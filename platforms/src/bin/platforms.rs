use platforms::get_min_platforms;
use util::read_input_as_string;

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let res = get_min_platforms(read_input_as_string()?.as_str())?;

    println!("{res}");

    Ok(())
}
