use std::env;
use std::io::stdout;
use std::process::ExitCode;

use crossterm::tty::IsTty;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use soco::{Speaker, SsdpDiscovery};

use socos::command::{Invocation, SpeakerTarget, VALID_DISCOVERY_COMMANDS, VALID_SPEAKER_COMMANDS};
use socos::dispatch;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match Invocation::from_args(&args) {
        Some(invocation) => invocation,
        None => {
            print_usage();
            return ExitCode::from(2);
        }
    };

    let result = match &invocation.target {
        SpeakerTarget::All => {
            dispatch::run_discovery(&invocation.command, &SsdpDiscovery::default())
        }
        SpeakerTarget::Address(ip) => {
            let speaker = Speaker::new(ip.as_str());
            dispatch::run_speaker(
                &invocation.command,
                invocation.argument.as_deref(),
                &speaker,
                stdout().is_tty(),
            )
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: socos [speaker's IP|all] [cmd]");
    eprintln!();
    eprintln!("{}", VALID_SPEAKER_COMMANDS);
    eprintln!("{}", VALID_DISCOVERY_COMMANDS);
}

fn init_logging() {
    let level = env::var("SOCOS_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
