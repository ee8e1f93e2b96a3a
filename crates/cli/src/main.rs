use std::process::ExitCode;

fn main() -> ExitCode {
    caliope_cli::run()
}
