#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = rotatile_harness::run_from_env() {
        eprintln!("rotatile: {error}");
        std::process::exit(error.exit_code());
    }
}
