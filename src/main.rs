use std::process::ExitCode;

fn main() -> ExitCode {
    yui::app::run()
}
