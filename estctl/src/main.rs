use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use estctl::prelude::*;
use estctl::ParamsFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "estctl")]
#[command(about = "Discrete-time plant / estimator / PD controller loop simulator")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the closed loop and print a summary
    Run(RunArgs),

    /// Print the default configuration
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// Parameter file (.yaml, .yml, .toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Timestep in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Number of ticks
    #[arg(short = 'n', long)]
    ticks: Option<u64>,

    /// Log a report every N ticks
    #[arg(long)]
    report_every: Option<u64>,

    /// Proportional gain
    #[arg(long)]
    kp: Option<f64>,

    /// Derivative gain
    #[arg(long)]
    kd: Option<f64>,

    /// Target position
    #[arg(long)]
    target: Option<f64>,

    /// Upper actuator limit
    #[arg(long, allow_hyphen_values = true)]
    u_max: Option<f64>,

    /// Lower actuator limit
    #[arg(long, allow_hyphen_values = true)]
    u_min: Option<f64>,

    /// Use a unit timestep (overrides --dt)
    #[arg(long)]
    fixed_step: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Yaml,
    Toml,
    Json,
}

impl From<Format> for ParamsFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Yaml => ParamsFormat::Yaml,
            Format::Toml => ParamsFormat::Toml,
            Format::Json => ParamsFormat::Json,
        }
    }
}

impl RunArgs {
    /// Resolve the parameters: file (or the standard run), then flag overrides
    fn resolve(&self) -> Result<SimParams> {
        let mut params = match &self.config {
            Some(path) => SimParams::load_from_disk(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => SimParams {
                run: LoopConfig::standard(),
                ..Default::default()
            },
        };

        if let Some(dt) = self.dt {
            params.run.dt = dt;
        }
        if self.fixed_step {
            params.run.dt = 1.0;
        }
        if let Some(ticks) = self.ticks {
            params.run.tick_count = ticks;
        }
        if let Some(every) = self.report_every {
            params.run.report_every = Some(every);
        }
        if let Some(kp) = self.kp {
            params.controller.kp = kp;
        }
        if let Some(kd) = self.kd {
            params.controller.kd = kd;
        }
        if let Some(target) = self.target {
            params.controller.target = target;
        }
        if self.u_max.is_some() {
            params.controller.u_max = self.u_max;
        }
        if self.u_min.is_some() {
            params.controller.u_min = self.u_min;
        }

        Ok(params)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "estctl=debug,info"
    } else {
        "estctl=info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run_command(cli.command) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run_simulation(&args),
        Commands::Config { format } => {
            let rendered = SimParams::default()
                .render(format.into())
                .context("Failed to render default configuration")?;
            print!("{}", rendered);
            Ok(())
        }
        Commands::Version => {
            println!("estctl {}", estctl::version());
            Ok(())
        }
    }
}

fn run_simulation(args: &RunArgs) -> Result<()> {
    let params = args.resolve()?;
    let mut control_loop = build_loop(&params).context("Invalid simulation configuration")?;

    tracing::info!(
        "Running {} ticks at dt={}s ({:.2}s simulated)",
        params.run.tick_count,
        params.run.dt,
        params.run.duration()
    );

    let summary = control_loop.run();
    print_summary(&params, &summary);
    Ok(())
}

fn print_summary(params: &SimParams, summary: &RunSummary) {
    println!("{}", "Simulation complete".green().bold());
    println!(
        "  {} {} ({:.3}s)",
        "ticks:".cyan(),
        summary.ticks,
        summary.sim_time
    );
    println!(
        "  {} kp={} kd={} target={}",
        "gains:".cyan(),
        params.controller.kp,
        params.controller.kd,
        params.controller.target
    );
    println!(
        "  {} {}",
        "final plant:".cyan(),
        summary.final_measurement
    );
    println!(
        "  {} {}",
        "final estimate:".cyan(),
        summary.final_estimate
    );
    println!(
        "  {} {:.4}",
        "final control:".cyan(),
        summary.final_control
    );
    println!(
        "  {} |u|={:.4} |x|={:.4}",
        "peaks:".cyan(),
        summary.peak_abs_control,
        summary.peak_abs_position
    );

    if let Ok(Some((u_min, u_max))) = params.controller.output_limits() {
        println!("  {} [{}, {}]", "limits:".cyan(), u_min, u_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_standard_run() {
        let params = RunArgs::default().resolve().unwrap();
        assert_eq!(params.run, LoopConfig::standard());
        assert_eq!(params.controller, ControllerParams::default());
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::parse_from([
            "estctl", "run", "--kp", "0.4", "--ticks", "10", "--u-min", "-2", "--u-max", "2",
            "--fixed-step",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        let params = args.resolve().unwrap();

        assert_eq!(params.controller.kp, 0.4);
        assert_eq!(params.controller.kd, 0.05);
        assert_eq!(params.controller.output_limits().unwrap(), Some((-2.0, 2.0)));
        assert_eq!(params.run.tick_count, 10);
        assert_eq!(params.run.dt, 1.0);
    }

    #[test]
    fn test_config_file_then_flag_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.toml");

        let mut saved = SimParams::default();
        saved.controller.kd = 0.3;
        saved.plant.damping = 0.5;
        saved.run = LoopConfig::fixed_step(7);
        saved.save_to_disk(&path).unwrap();

        let args = RunArgs {
            config: Some(path),
            kp: Some(0.4),
            report_every: Some(2),
            ..Default::default()
        };
        let params = args.resolve().unwrap();

        // Flags win, everything else comes from the file
        assert_eq!(params.controller.kp, 0.4);
        assert_eq!(params.run.report_every, Some(2));
        assert_eq!(params.controller.kd, 0.3);
        assert_eq!(params.plant.damping, 0.5);
        assert_eq!(params.run.dt, 1.0);
        assert_eq!(params.run.tick_count, 7);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            config: Some(dir.path().join("absent.yaml")),
            ..Default::default()
        };

        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_inverted_limits_fail_before_running() {
        let args = RunArgs {
            u_min: Some(1.0),
            u_max: Some(-1.0),
            ..Default::default()
        };
        assert!(run_simulation(&args).is_err());
    }
}
