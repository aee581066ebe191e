use clap::{Parser, Subcommand};

use self::{leaderboard::LeaderboardArg, play::PlayArg};

mod leaderboard;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the quiz in the terminal UI
    Play(#[clap(flatten)] PlayArg),
    /// Print the leaderboard without entering the UI
    Leaderboard(#[clap(flatten)] LeaderboardArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Leaderboard(arg) => leaderboard::run(&arg)?,
    }
    Ok(())
}
