use clap::Parser;
use maldet_cli::{run, Cli, EXIT_FAILURE};

fn main() {
    maldet_core::tracing::init_tracing();
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("cannot read current directory: {e}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let code = run(
        &cli,
        &cwd,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    std::process::exit(code);
}
