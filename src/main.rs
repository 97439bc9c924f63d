use clap::Parser;
use std::process;
use user_status::{handle_command, UserStatus};

fn main() {
    pretty_env_logger::init();

    let args = UserStatus::parse();
    if let Err(e) = handle_command(args.commands) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
