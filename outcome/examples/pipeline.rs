//! Example chaining outcome combinators over a tiny order-parsing pipeline.

use std::io::{self, Write};

use outcome::Outcome;

fn parse_quantity(raw: &str) -> Outcome<u32> {
    raw.trim().parse::<u32>().into()
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for raw in ["12", " 7 ", "eleven"] {
        let summary = parse_quantity(raw)
            .map(|quantity| quantity * 3)
            .match_with(
                |total| format!("ordered {total} units"),
                |err| format!("order rejected: {err}"),
            );
        match summary {
            Outcome::Success(line) => writeln!(handle, "{raw:>8} -> {line}")?,
            Outcome::Failure(fault) => writeln!(handle, "{raw:>8} -> unexpected fault: {fault}")?,
        }
    }
    Ok(())
}
