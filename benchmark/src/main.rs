use clap::Parser;
use matmulcore::BenchConfig;
use runner::Runner;

mod runner;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Naive dense matrix-multiply micro-benchmark",
    long_about = "Fills two fixed-size square matrices with i + j and i - j, multiplies them \
                  with the textbook triple loop and prints C[100][100] plus the multiply time. \
                  Set RUST_LOG=debug for stage details on stderr."
)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let report = Runner::new(BenchConfig::default()).execute()?;
    println!("{}", report);

    Ok(())
}
