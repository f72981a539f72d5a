//! CPU description tool.
//!
//! Prints the detected host CPU, or the baseline of another target, and can
//! check that a set of features is present.

use clap::Parser;
use tpde_target::{Arch, CpuInfo, SubArch, TargetResult};

#[derive(Parser, Debug)]
#[command(name = "cpuinfo")]
#[command(about = "Describe the host CPU or a target baseline")]
#[command(version)]
struct Cli {
    /// Describe this architecture's baseline instead of the host (e.g. x86_64, aarch64, armv7)
    #[arg(long, short = 't')]
    target: Option<Arch>,

    /// Sub-architecture of the target (e.g. v6, v7, v8)
    #[arg(long, requires = "target")]
    sub_arch: Option<SubArch>,

    /// Fail unless the CPU has this feature (repeatable)
    #[arg(long, short = 'r', value_name = "FEATURE")]
    require: Vec<String>,

    /// Print only the feature names, one per line
    #[arg(long)]
    features_only: bool,
}

fn missing_features(info: &CpuInfo, required: &[String]) -> TargetResult<Vec<String>> {
    let mut missing = Vec::new();
    for name in required {
        let id = info.parse_feature(name)?;
        if !info.has_feature(id) {
            missing.push(name.clone());
        }
    }
    Ok(missing)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let info = match cli.target {
        Some(arch) => CpuInfo::for_target(arch, cli.sub_arch.unwrap_or_default()),
        None => *tpde_target::host(),
    };
    log::debug!("Describing {} (detected: {})", info.arch(), info.was_detected());

    if cli.features_only {
        for name in info.feature_names() {
            println!("{name}");
        }
    } else {
        println!("{info}");
    }

    let missing = missing_features(&info, &cli.require)?;
    if !missing.is_empty() {
        eprintln!("Missing required features: {}", missing.join(", "));
        std::process::exit(1);
    }
    Ok(())
}
