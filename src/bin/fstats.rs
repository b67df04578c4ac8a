use clap::Parser;

use fstats::common::reset_sigpipe;
use fstats::stats;

#[derive(Parser)]
#[command(
    name = "fstats",
    about = "Count lines, words, and characters for each FILE concurrently"
)]
struct Cli {
    /// Files to process; each gets its own worker thread
    files: Vec<String>,
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();

    // Workers print their own per-file report lines as they finish; run()
    // returns only after every worker has merged and signaled. An unopenable
    // file is diagnosed on stderr and excluded from the totals, but does not
    // fail the run.
    let totals = stats::run(&cli.files);

    println!(
        "Total: {} lines, {} words, {} characters",
        totals.lines, totals.words, totals.chars
    );
}
