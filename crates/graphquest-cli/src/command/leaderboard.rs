use std::path::PathBuf;

use crate::leaderboard::LeaderboardStore;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LeaderboardArg {
    /// Path of the leaderboard file
    #[clap(long, default_value = "./data/leaderboard.json")]
    leaderboard_path: PathBuf,
    /// Maximum number of entries to show
    #[clap(long, default_value_t = 10)]
    limit: usize,
    /// Show one player's aggregate stats instead of the ranking
    #[clap(long)]
    player: Option<String>,
}

impl Default for LeaderboardArg {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("./data/leaderboard.json"),
            limit: 10,
            player: None,
        }
    }
}

pub(crate) fn run(arg: &LeaderboardArg) -> anyhow::Result<()> {
    let store = LeaderboardStore::new(arg.leaderboard_path.clone());

    if let Some(player) = &arg.player {
        let stats = store.player_stats(player);
        if stats.games_played == 0 {
            println!("No games recorded for {player}.");
            return Ok(());
        }
        println!("{player}");
        println!("  Games played:  {}", stats.games_played);
        println!("  Best score:    {}", stats.best_score);
        println!("  Average score: {:.1}", stats.average_score);
        println!("  Total score:   {}", stats.total_score);
        return Ok(());
    }

    let entries = store.list(arg.limit);
    if entries.is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }

    println!("{:<5} {:<20} {:>7}  {}", "Rank", "Player", "Score", "Played");
    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "{:<5} {:<20} {:>7}  {}",
            rank + 1,
            entry.player_name,
            entry.score,
            entry.played_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
