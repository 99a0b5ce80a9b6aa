use anyhow::Result;
use clap::Parser;
use rbac_patch_core::patches::DEFAULT_BASE_DIR;
use rbac_patch_core::{run, DriverOptions};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Patch the default Jurify checkout
    rbac-patch

    # Patch a checkout somewhere else, checking every search block first
    rbac-patch --base-dir ~/src/advo-ai-hub-main --strict

    # Show what would change without writing anything
    RUST_LOG=info rbac-patch --dry-run"#)]
struct Args {
    #[arg(
        short,
        long,
        value_name = "DIR",
        default_value = DEFAULT_BASE_DIR,
        help = "Root of the web application checkout"
    )]
    base_dir: PathBuf,

    #[arg(long, help = "Report what would change without writing any file")]
    dry_run: bool,

    #[arg(
        long,
        help = "Abort before writing if any search block is missing or ambiguous"
    )]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let opts = DriverOptions {
        base_dir: args.base_dir,
        dry_run: args.dry_run,
        strict: args.strict,
    };

    let stdout = io::stdout();
    let ok = run(&opts, &mut stdout.lock())?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
