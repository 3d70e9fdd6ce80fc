//! The `rolodeck` binary. All behaviour lives in the library; the CLI in
//! `cli/` parses arguments, renders results and owns the process exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
