use std::process::ExitCode;

fn main() -> ExitCode {
    let args = expense_tracker::args::parse();
    expense_tracker::cli::main(args)
}
