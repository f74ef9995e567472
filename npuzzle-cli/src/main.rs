use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = npuzzle_cli::Args::parse();
    npuzzle_cli::run(args)
}
