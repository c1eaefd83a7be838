use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use logging::{log, LOG_HARNESS};
use voxel::{Coordinate, VoxelModel};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const DEFAULT_MAGNITUDE: &str = "100000";

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    pretty_env_logger::init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("scenario", args)) => run_scenario(args),
        Some(("selftest", _)) => run_selftest(),
        Some(("all", args)) => run_all(args),
        Some((name, _)) => bail!("unknown subcommand {name}"),
        None => {
            let defaults = cli().get_matches_from(["voxel-harness", "all"]);
            run_all(
                defaults
                    .subcommand_matches("all")
                    .context("all subcommand is defined")?,
            )
        }
    }
}

fn cli() -> Command {
    let scenario_args = [
        Arg::new("magnitude")
            .long("magnitude")
            .help("How many times the origin is added")
            .value_parser(value_parser!(u64))
            .default_value(DEFAULT_MAGNITUDE),
        Arg::new("probe")
            .long("probe")
            .help("Coordinate that must stay untouched")
            .num_args(3)
            .value_names(["X", "Y", "Z"])
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .default_values(["1", "0", "0"]),
    ];

    Command::new("voxel-harness")
        .about("Drives the voxel model through its reference scenarios")
        .subcommand(Command::new("scenario").args(scenario_args.clone()))
        .subcommand(Command::new("selftest"))
        .subcommand(Command::new("all").args(scenario_args))
}

fn run_scenario(args: &ArgMatches) -> Result<()> {
    let magnitude = *args
        .get_one::<u64>("magnitude")
        .context("magnitude has a default")?;
    let probe: Vec<i64> = args
        .get_many::<i64>("probe")
        .context("probe has a default")?
        .copied()
        .collect();
    let probe = Coordinate::try_new(probe[0], probe[1], probe[2])?;

    if probe == Coordinate::ORIGIN {
        bail!("probe must differ from the origin");
    }

    log::debug!("Scenario with magnitude {magnitude}, probe {probe}");
    log!(*LOG_HARNESS, "Testing voxel model access");

    let mut model = VoxelModel::new();
    for _ in 0..magnitude {
        model.add(0, 0, 0)?;
    }

    let value = model.read(0, 0, 0)?;
    log!(*LOG_HARNESS, "{}", value);

    if value != magnitude {
        bail!("read(0, 0, 0) returned {value}, expected {magnitude}");
    }
    let untouched = model.read_at(probe);
    if untouched != 0 {
        bail!("read{probe} returned {untouched}, expected 0");
    }

    log!(*LOG_HARNESS, "--> Success!");
    Ok(())
}

fn run_all(args: &ArgMatches) -> Result<()> {
    run_scenario(args)?;
    run_selftest()
}

fn run_selftest() -> Result<()> {
    log!(*LOG_HARNESS, "Running built-in self-test");
    voxel::run_tests().context("voxel self-test failed")?;
    log!(*LOG_HARNESS, "--> Success!");
    Ok(())
}
