pub mod analysis_panel;
pub mod board;
pub mod game_info_panel;
pub mod move_history_panel;
pub mod results_panel;

pub use analysis_panel::AnalysisPanel;
pub use board::BoardWidget;
pub use game_info_panel::GameInfoPanel;
pub use move_history_panel::MoveHistoryPanel;
pub use results_panel::ResultsPanel;
