use std::path::PathBuf;

use crate::command::play::app::PlayApp;

mod app;
mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path of the leaderboard file
    #[clap(long, default_value = "./data/leaderboard.json")]
    leaderboard_path: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("./data/leaderboard.json"),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let mut app = PlayApp::new(arg.leaderboard_path.clone());
    ratatui::run(|terminal| app.run(terminal))
}
