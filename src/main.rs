//! Wavechart - sine and cosine waves in the terminal.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wavechart::chart::WaveformChartDemo;
use wavechart::render::{render_snapshot, run_interactive, write_snapshot, OutputMode};
use wavechart::util::StaticSizeConfig;

#[derive(Parser, Debug)]
#[command(name = "wavechart")]
#[command(about = "Plot sine and cosine waves in the terminal", long_about = None)]
struct Args {
    /// Where to render the chart
    #[arg(long, value_enum, default_value_t = OutputMode::Interactive)]
    output: OutputMode,

    /// Snapshot width in cells (text output only)
    #[arg(long, default_value_t = StaticSizeConfig::default().width)]
    width: u16,

    /// Snapshot height in cells (text output only)
    #[arg(long, default_value_t = StaticSizeConfig::default().height)]
    height: u16,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        // Start each run with an empty log
        std::fs::File::create(log_path)?;
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting wavechart ({} output)", args.output.name());
    }

    let demo = WaveformChartDemo::new();
    let res = demo.run(|chart| match args.output {
        OutputMode::Interactive => run_interactive(chart),
        OutputMode::Text => {
            let text = render_snapshot(&chart, args.width, args.height)?;
            write_snapshot(&mut std::io::stdout().lock(), &text)
        },
    });

    if let Err(err) = res {
        tracing::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    tracing::info!("wavechart exited");
    Ok(())
}
