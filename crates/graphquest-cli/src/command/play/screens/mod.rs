pub use self::{
    game_over::GameOverScreen, leaderboard_view::LeaderboardScreen, menu::MenuScreen,
    quiz::QuizScreen,
};

mod game_over;
mod leaderboard_view;
mod menu;
mod quiz;

/// Active screen of the play UI.
#[derive(Debug)]
pub enum Screen {
    Menu(MenuScreen),
    Quiz(QuizScreen),
    Leaderboard(LeaderboardScreen),
    GameOver(GameOverScreen),
}

/// Screen change requested by an event handler; the app applies it.
#[derive(Debug)]
pub enum Transition {
    None,
    StartGame(String),
    ShowLeaderboard,
    FinishGame { player_name: String, score: usize },
    BackToMenu,
    Exit,
}
