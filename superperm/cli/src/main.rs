#![deny(clippy::all)]

use structopt::StructOpt;
use superperm_cli::args::CliArgs;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::from_args();
    superperm_cli::init_logging(args.log_level());
    let result = superperm_cli::run(&args.input_file)?;
    result.print();
    Ok(())
}
