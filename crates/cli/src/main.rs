use std::process::ExitCode;

fn main() -> ExitCode {
    chatdesk_cli::run()
}
