//! farm-sprites - Command-line tool that writes the farm game's placeholder sprites

use std::process::ExitCode;

use farm_sprites::cli;

fn main() -> ExitCode {
    cli::run()
}
