use anyhow::Result;
use clap::{Parser, Subcommand};
use shapes::api::{DriverCfg, FactoryParams, DEFAULT_DIM_MAX, DEFAULT_DIM_MIN};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Generate random shapes and list them")]
struct Cmd {
    /// Fixed RNG seed; identical seeds print identical listings
    #[arg(long)]
    seed: Option<u64>,

    /// Number of shapes to generate
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Drop shapes whose descriptor repeats an earlier one
    #[arg(long)]
    dedup: bool,

    #[arg(long, default_value_t = DEFAULT_DIM_MIN)]
    dim_min: u32,

    #[arg(long, default_value_t = DEFAULT_DIM_MAX)]
    dim_max: u32,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print a small provenance JSON block instead of the listing
    Report,
}

impl Cmd {
    fn driver_cfg(&self) -> DriverCfg {
        DriverCfg {
            count: self.count,
            seed: self.seed,
            dedup: self.dedup,
            params: FactoryParams {
                dim_min: self.dim_min,
                dim_max: self.dim_max,
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.driver_cfg();
    match cmd.action {
        Some(Action::Report) => report(&cfg),
        None => draw(&cfg),
    }
}

fn draw(cfg: &DriverCfg) -> Result<()> {
    tracing::debug!(
        count = cfg.count,
        seed = ?cfg.seed,
        dedup = cfg.dedup,
        dim_min = cfg.params.dim_min,
        dim_max = cfg.params.dim_max,
        "draw"
    );
    let stdout = std::io::stdout();
    let summary = shapes::api::run(&mut stdout.lock(), cfg)?;
    if summary.printed < summary.generated {
        tracing::info!(
            generated = summary.generated,
            printed = summary.printed,
            "duplicates_dropped"
        );
    }
    Ok(())
}

fn report(cfg: &DriverCfg) -> Result<()> {
    cfg.params.validate()?;
    println!("{}", serde_json::to_string_pretty(&report_doc(cfg))?);
    Ok(())
}

fn report_doc(cfg: &DriverCfg) -> serde_json::Value {
    let rev = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    serde_json::json!({
        "version": shapes::VERSION,
        "code_rev": rev,
        "params": {
            "count": cfg.count,
            "seed": cfg.seed,
            "dedup": cfg.dedup,
            "dim_min": cfg.params.dim_min,
            "dim_max": cfg.params.dim_max
        }
    })
}
