use vgsim::{Scenario, ScenarioConfig};
use vgsim::{bench_broad_phase, bench_step};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "scatter.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<u32>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Open the 2D viewer (needs the `viewer` feature)
    #[arg(long)]
    view: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario) -> Result<()> {
    let frames = scenario.frames;
    let report_every = (frames / 10).max(1);

    for frame in 1..=frames {
        scenario.advance_frame()?;

        if frame % report_every == 0 || frame == frames {
            let solver = &scenario.solver;
            info!(
                "frame {frame:5}: t = {:.3} s, bodies = {}, indexed = {}, max overlap = {:.4}",
                solver.time(),
                solver.object_count(),
                solver.grid().indexed_count(),
                solver.max_overlap()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        bench_broad_phase()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(frames) = args.frames {
        scenario_cfg.run.frames = frames;
    }
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.view {
        #[cfg(feature = "viewer")]
        {
            vgsim::run_2d(scenario);
            return Ok(());
        }
        #[cfg(not(feature = "viewer"))]
        anyhow::bail!("built without the `viewer` feature");
    }

    run_headless(scenario)
}
