use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render the litegui shell graphics into the generated asset tree.
#[derive(Parser, Debug)]
#[command(name = "litegui-gen", version)]
struct Cli {
    /// Directory holding the hand-edited source icons.
    #[arg(long, default_value = litegui_gen::DEFAULT_INPUT_ROOT)]
    input_root: PathBuf,

    /// Directory receiving the generated assets (created on demand).
    #[arg(long, default_value = litegui_gen::DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let opts = litegui_gen::GenerateOpts {
        input_root: cli.input_root,
        output_root: cli.output_root,
    };

    let written = litegui_gen::generate_all(&opts).with_context(|| {
        format!(
            "generate assets from '{}' into '{}'",
            opts.input_root.display(),
            opts.output_root.display()
        )
    })?;

    eprintln!(
        "wrote {} files under {}",
        written.len(),
        opts.output_root.display()
    );
    Ok(())
}
