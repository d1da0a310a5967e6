use clap::{Parser, Subcommand};

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "tlb-hitrate-viz")]
#[command(about = "TLB simulator hit-rate chart tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the per-locality bar chart from a simulator results log.
    Chart {
        /// Results log produced by the TLB simulator.
        #[arg(long, default_value = "results.txt")]
        results: String,

        /// Output PNG path.
        #[arg(short = 'o', long, default_value = "Two_TLB_4KB.png")]
        out: String,

        /// Optional JSON dump of the per-group averages.
        #[arg(long)]
        summary: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Chart {
            results,
            out,
            summary,
        } => run_chart(&results, &out, summary.as_deref()),
    }
}

/// Full pipeline: extract rates, average the locality groups, render the
/// chart. Takes the paths as parameters so the pipeline stays callable
/// without a real CLI invocation.
fn run_chart(results: &str, out: &str, summary: Option<&str>) -> Result<()> {
    // 1) Read the log and pull out every reported hit rate, in file order.
    let rates = log::parse_results_file(results)?;

    // 2) Average the three fixed locality groups.
    let data = model::build_chart_data(&rates);

    // 3) Optionally dump the numbers behind the chart.
    if let Some(path) = summary {
        std::fs::write(path, serde_json::to_string_pretty(&data)?)?;
        println!("Wrote {}", path);
    }

    // 4) Render the PNG.
    render::render_bar_chart(&data, out)?;
    println!("Wrote {}", out);

    Ok(())
}
