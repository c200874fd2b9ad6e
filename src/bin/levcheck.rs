//! Small CLI front door over the debug interface.
//!
//! Parses two strings and an optional bound/kernel selector with `clap`
//! (the same crate `astarpa`/`pa-bin` use for their binaries) and prints
//! the resulting distance. Malformed kernel names and out-of-range bounds
//! are surfaced here as process exit codes; the library itself never
//! panics on malformed *values*.

use clap::Parser;
use levenshtein_core::{debug_distance, levenshtein, levenshtein_bounded, Kernel};

#[derive(Parser)]
#[command(about = "Compute Levenshtein distance between two strings.")]
struct Cli {
    a: String,
    b: String,

    /// Optional early-exit bound; result is min(distance, k + 1).
    #[arg(short = 'k', long)]
    bound: Option<usize>,

    /// Run a single named kernel instead of the dispatcher, for
    /// cross-checking: wf, mbleven, myers.
    #[arg(long)]
    kernel: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let a: Vec<u32> = cli.a.chars().map(|c| c as u32).collect();
    let b: Vec<u32> = cli.b.chars().map(|c| c as u32).collect();

    let result = match cli.kernel.as_deref() {
        Some(name) => {
            let kernel = match name {
                "wf" | "wagner-fischer" => Kernel::WagnerFischer,
                "mbleven" => Kernel::Mbleven,
                "myers" => Kernel::Myers,
                other => {
                    eprintln!("unknown kernel `{other}`; expected wf, mbleven, or myers");
                    std::process::exit(2);
                }
            };
            debug_distance(kernel, &a, &b, cli.bound)
        }
        None => Ok(match cli.bound {
            Some(k) => levenshtein_bounded(&a, &b, k),
            None => levenshtein(&a, &b),
        }),
    };

    match result {
        Ok(d) => println!("{d}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
