use std::process;

fn main() {
    if let Err(e) = staco::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
