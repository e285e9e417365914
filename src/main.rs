use rustoc::cli;

fn main() {
    // Run the CLI
    cli::run();
}
