//! Application state for the fenseek terminal client.
//!
//! The backend is the source of truth for games, search results and
//! analysis; this module stores the latest responses and the interactive
//! state of each page. Board editing on every page goes through the shared
//! `board::BoardEditor` so the surfaces cannot drift apart.

use crate::input::MoveEntryBuffer;
use crate::viewer::GameViewer;
use board::BoardEditor;
use search_client::{
    AnalysisOptions, AnalysisResult, BackendService, GameFilters, GamePreview, SearchHit, UserInfo,
};

/// Previews per games-list page.
pub const GAMES_PAGE_SIZE: usize = 10;
/// Engine depth accepted by the analysis endpoint.
pub const MAX_ANALYSIS_DEPTH: u8 = 18;
/// Multi-PV lines accepted by the analysis endpoint.
pub const MAX_ANALYSIS_VARIANTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Search,
    Analyze,
    Games,
    GameView,
    Upload,
}

/// The state every board-editing page shares: the editor itself, the typed
/// move buffer, and an optional in-progress FEN line edit.
pub struct EditorSurface {
    pub editor: BoardEditor,
    pub move_entry: MoveEntryBuffer,
    pub fen_entry: Option<String>,
}

impl EditorSurface {
    pub fn new() -> Self {
        Self {
            editor: BoardEditor::new(),
            move_entry: MoveEntryBuffer::new(),
            fen_entry: None,
        }
    }

    /// Apply the completed move buffer: a square removal while remove mode
    /// is on, a piece drop otherwise. Incomplete input stays in the buffer.
    pub fn apply_move_entry(&mut self) {
        if self.editor.remove_mode() {
            if let Some(square) = self.move_entry.try_parse_square() {
                self.editor.on_square_click(square);
                self.move_entry.clear();
            }
            return;
        }
        if let Some(entry) = self.move_entry.try_parse_move() {
            self.editor
                .on_piece_drop(entry.from, entry.to, entry.promotion);
            self.move_entry.clear();
        }
    }

    pub fn is_entering_fen(&self) -> bool {
        self.fen_entry.is_some()
    }

    /// Start editing the FEN line, seeded with the current input text.
    pub fn begin_fen_entry(&mut self) {
        self.fen_entry = Some(self.editor.fen_input().to_string());
    }

    pub fn push_fen_char(&mut self, c: char) {
        if let Some(buffer) = &mut self.fen_entry {
            buffer.push(c);
        }
    }

    pub fn backspace_fen(&mut self) {
        if let Some(buffer) = &mut self.fen_entry {
            buffer.pop();
        }
    }

    pub fn cancel_fen_entry(&mut self) {
        self.fen_entry = None;
    }

    /// Submit the edited FEN line through the controller. The editor keeps
    /// its position and surfaces the error when the text does not validate.
    pub fn commit_fen_entry(&mut self) {
        let Some(text) = self.fen_entry.take() else {
            return;
        };
        self.editor.set_fen_input(text.clone());
        self.editor.submit_fen(&text);
    }
}

impl Default for EditorSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Position-similarity search page.
pub struct SearchPage {
    pub surface: EditorSurface,
    pub max_results: usize,
    pub results: Vec<SearchHit>,
    pub selected: usize,
}

impl SearchPage {
    fn new() -> Self {
        Self {
            surface: EditorSurface::new(),
            max_results: 10,
            results: Vec::new(),
            selected: 0,
        }
    }

    pub fn bump_max_results(&mut self, delta: isize) {
        let next = self.max_results as isize + delta;
        self.max_results = next.max(1) as usize;
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.results.get(self.selected)
    }
}

/// Engine-analysis page.
pub struct AnalyzePage {
    pub surface: EditorSurface,
    pub options: AnalysisOptions,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl AnalyzePage {
    fn new() -> Self {
        Self {
            surface: EditorSurface::new(),
            options: AnalysisOptions::default(),
            result: None,
            error: None,
            in_flight: false,
        }
    }

    pub fn bump_depth(&mut self, delta: i16) {
        let next = self.options.depth as i16 + delta;
        self.options.depth = next.clamp(1, MAX_ANALYSIS_DEPTH as i16) as u8;
    }

    pub fn bump_variants(&mut self, delta: i16) {
        let next = self.options.variants as i16 + delta;
        self.options.variants = next.clamp(1, MAX_ANALYSIS_VARIANTS as i16) as u8;
    }
}

/// Paginated games-list page.
pub struct GamesPage {
    pub previews: Vec<GamePreview>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_games: usize,
    pub selected: usize,
    pub page_entry: Option<String>,
    pub filters: GameFilters,
    pub filter_entry: Option<String>,
}

impl GamesPage {
    fn new() -> Self {
        Self {
            previews: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_games: 0,
            selected: 0,
            page_entry: None,
            filters: GameFilters::default(),
            filter_entry: None,
        }
    }

    /// Clamp a requested page index into the known range.
    pub fn clamp_page(&self, target: usize) -> usize {
        if self.total_pages == 0 {
            0
        } else {
            target.min(self.total_pages - 1)
        }
    }

    pub fn select_next(&mut self) {
        if !self.previews.is_empty() {
            self.selected = (self.selected + 1).min(self.previews.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_preview(&self) -> Option<&GamePreview> {
        self.previews.get(self.selected)
    }
}

/// Admin data-ingestion page.
pub struct UploadPage {
    pub path_entry: Option<String>,
    pub text_entry: Option<String>,
    pub feedback: Option<String>,
}

impl UploadPage {
    fn new() -> Self {
        Self {
            path_entry: None,
            text_entry: None,
            feedback: None,
        }
    }
}

/// Login prompt overlay.
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus_password: bool,
}

/// Top-level client state: one service handle, one page at a time, each
/// page's state owned exclusively here.
pub struct App {
    pub service: Box<dyn BackendService>,
    pub page: Page,
    /// Where Esc from the game viewer goes back to.
    pub return_page: Page,
    pub user: Option<UserInfo>,
    pub status: Option<String>,
    pub should_quit: bool,
    pub login: Option<LoginForm>,
    pub search: SearchPage,
    pub analyze: AnalyzePage,
    pub games: GamesPage,
    pub viewer: Option<GameViewer>,
    pub upload: UploadPage,
}

impl App {
    pub fn new(service: Box<dyn BackendService>) -> Self {
        Self {
            service,
            page: Page::Search,
            return_page: Page::Games,
            user: None,
            status: None,
            should_quit: false,
            login: None,
            search: SearchPage::new(),
            analyze: AnalyzePage::new(),
            games: GamesPage::new(),
            viewer: None,
            upload: UploadPage::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserInfo::is_admin)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    // --- Auth ---

    /// Ask the backend who the current session belongs to.
    pub async fn refresh_auth(&mut self) {
        match self.service.auth_status().await {
            Ok(user) => self.user = user,
            Err(e) => {
                tracing::warn!("auth status check failed: {e}");
                self.user = None;
            }
        }
    }

    pub async fn submit_login(&mut self) {
        let Some(form) = self.login.take() else {
            return;
        };
        match self.service.login(&form.username, &form.password).await {
            Ok(user) => {
                tracing::info!(user = %user.username, "logged in");
                self.set_status(format!("Logged in as {}", user.username));
                self.user = Some(user);
            }
            Err(e) => {
                tracing::warn!("login failed: {e}");
                self.set_status(format!("Login failed: {e}"));
            }
        }
    }

    pub async fn logout(&mut self) {
        if let Err(e) = self.service.logout().await {
            tracing::warn!("logout failed: {e}");
        }
        self.user = None;
        self.set_status("Logged out");
    }

    // --- Search ---

    /// Submit the search editor's position to the similarity index.
    pub async fn run_search(&mut self) {
        let fen = self.search.surface.editor.fen();
        let limit = self.search.max_results;
        tracing::info!(%fen, limit, "running similarity search");
        match self.service.find_similar(&fen, limit).await {
            Ok(results) => {
                self.set_status(format!("{} similar positions", results.len()));
                self.search.results = results;
                self.search.selected = 0;
            }
            Err(e) => {
                tracing::warn!("search failed: {e}");
                self.set_status(format!("Search failed: {e}"));
            }
        }
    }

    /// Open the selected hit's game at the matched move.
    pub async fn open_selected_hit(&mut self) {
        let Some(hit) = self.search.selected_hit() else {
            return;
        };
        let (id, move_index) = (hit.game_id.clone(), hit.move_index);
        self.return_page = Page::Search;
        self.open_game(&id, Some(move_index)).await;
    }

    // --- Analysis ---

    /// Submit the analyze editor's position to the engine service.
    pub async fn run_analysis(&mut self) {
        let fen = self.analyze.surface.editor.fen();
        let options = self.analyze.options;
        tracing::info!(%fen, depth = options.depth, "requesting analysis");
        self.analyze.in_flight = true;
        self.analyze.error = None;
        self.analyze.result = None;
        match self.service.analyze(&fen, options).await {
            Ok(result) => self.analyze.result = Some(result),
            Err(e) => {
                tracing::warn!("analysis failed: {e}");
                self.analyze.error = Some(e.to_string());
            }
        }
        self.analyze.in_flight = false;
    }

    // --- Games list ---

    /// Fetch one page of previews, clamped into the known page range.
    pub async fn load_games_page(&mut self, target: usize) {
        let page = self.games.clamp_page(target);
        let filters = self.games.filters.clone();
        match self
            .service
            .list_games(page, GAMES_PAGE_SIZE, &filters)
            .await
        {
            Ok(data) => {
                self.games.previews = data.previews;
                self.games.total_pages = data.total_pages;
                self.games.total_games = data.total_games;
                // The range may have shrunk since the last fetch.
                self.games.current_page = self.games.clamp_page(page);
                self.games.selected = 0;
            }
            Err(e) => {
                tracing::warn!("loading games page {page} failed: {e}");
                self.set_status(format!("Failed to load games: {e}"));
            }
        }
    }

    pub async fn games_next_page(&mut self) {
        if self.games.current_page + 1 < self.games.total_pages {
            self.load_games_page(self.games.current_page + 1).await;
        }
    }

    pub async fn games_previous_page(&mut self) {
        if self.games.current_page > 0 {
            self.load_games_page(self.games.current_page - 1).await;
        }
    }

    pub async fn games_first_page(&mut self) {
        self.load_games_page(0).await;
    }

    pub async fn games_last_page(&mut self) {
        if self.games.total_pages > 0 {
            self.load_games_page(self.games.total_pages - 1).await;
        }
    }

    /// Apply a typed one-based page number. Invalid input abandons the edit
    /// with the page unchanged, like the move-number entry of the viewer.
    pub async fn commit_page_entry(&mut self) {
        let Some(text) = self.games.page_entry.take() else {
            return;
        };
        let Ok(number) = text.trim().parse::<usize>() else {
            tracing::debug!(entry = %text, "page entry not numeric; keeping current page");
            return;
        };
        if number == 0 || number > self.games.total_pages {
            tracing::debug!(entry = %text, "page entry out of range; keeping current page");
            return;
        }
        self.load_games_page(number - 1).await;
    }

    /// Apply the typed player-name filter and reload from the first page.
    pub async fn commit_filter_entry(&mut self) {
        let Some(text) = self.games.filter_entry.take() else {
            return;
        };
        let trimmed = text.trim();
        self.games.filters.player = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.load_games_page(0).await;
    }

    pub async fn open_selected_preview(&mut self) {
        let Some(preview) = self.games.selected_preview() else {
            return;
        };
        let id = preview.id.clone();
        self.return_page = Page::Games;
        self.open_game(&id, None).await;
    }

    /// Delete the selected game (admin) and refresh the current page.
    pub async fn delete_selected_game(&mut self) {
        if !self.is_admin() {
            self.set_status("Deleting games requires an admin session");
            return;
        }
        let Some(preview) = self.games.selected_preview() else {
            return;
        };
        let id = preview.id.clone();
        match self.service.delete_game(&id).await {
            Ok(message) => {
                tracing::info!(game = %id, "deleted game");
                self.set_status(message);
                self.load_games_page(self.games.current_page).await;
            }
            Err(e) => self.set_status(format!("Failed to delete game: {e}")),
        }
    }

    /// Fetch a game record and switch to the viewer.
    pub async fn open_game(&mut self, id: &str, start_index: Option<usize>) {
        match self.service.get_game(id).await {
            Ok(Some(game)) => {
                self.viewer = Some(GameViewer::new(game, start_index));
                self.page = Page::GameView;
            }
            Ok(None) => self.set_status(format!("Game {id} not found")),
            Err(e) => self.set_status(format!("Failed to load game: {e}")),
        }
    }

    // --- Admin ingestion ---

    pub async fn upload_pgn_file(&mut self, path: &str) {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.upload.feedback = Some(format!("Cannot read {path}: {e}"));
                return;
            }
        };
        let file_name = std::path::Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pgn".to_string());
        match self.service.upload_pgn_file(&file_name, bytes).await {
            Ok(message) => self.upload.feedback = Some(message),
            Err(e) => self.upload.feedback = Some(format!("File upload failed: {e}")),
        }
    }

    pub async fn upload_pgn_text(&mut self, pgn: &str) {
        if pgn.trim().is_empty() {
            self.upload.feedback = Some("Please enter PGN text.".to_string());
            return;
        }
        match self.service.upload_pgn_text(pgn).await {
            Ok(message) => self.upload.feedback = Some(message),
            Err(e) => self.upload.feedback = Some(format!("PGN text submission failed: {e}")),
        }
    }

    pub async fn rebuild_index(&mut self) {
        match self.service.rebuild_index().await {
            Ok(message) => self.upload.feedback = Some(message),
            Err(e) => self.upload.feedback = Some(format!("Index rebuild failed: {e}")),
        }
    }

    pub async fn clear_index(&mut self) {
        match self.service.clear_index().await {
            Ok(message) => self.upload.feedback = Some(message),
            Err(e) => self.upload.feedback = Some(format!("Index clear failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_results_never_drops_below_one() {
        let mut page = SearchPage::new();
        page.bump_max_results(-100);
        assert_eq!(page.max_results, 1);
        page.bump_max_results(5);
        assert_eq!(page.max_results, 6);
    }

    #[test]
    fn analysis_options_clamp_to_backend_limits() {
        let mut page = AnalyzePage::new();
        page.bump_depth(100);
        assert_eq!(page.options.depth, MAX_ANALYSIS_DEPTH);
        page.bump_depth(-100);
        assert_eq!(page.options.depth, 1);
        page.bump_variants(100);
        assert_eq!(page.options.variants, MAX_ANALYSIS_VARIANTS);
        page.bump_variants(-100);
        assert_eq!(page.options.variants, 1);
    }

    #[test]
    fn page_clamp_handles_the_empty_list() {
        let mut page = GamesPage::new();
        assert_eq!(page.clamp_page(7), 0);
        page.total_pages = 4;
        assert_eq!(page.clamp_page(7), 3);
        assert_eq!(page.clamp_page(2), 2);
    }

    #[test]
    fn result_selection_stays_in_bounds() {
        let mut page = SearchPage::new();
        page.select_next();
        page.select_previous();
        assert_eq!(page.selected, 0);
    }

    #[test]
    fn surface_routes_remove_mode_clicks() {
        let mut surface = EditorSurface::new();
        surface.editor.toggle_remove_mode();
        for c in "e2".chars() {
            surface.move_entry.push_char(c);
        }
        surface.apply_move_entry();
        assert_eq!(
            surface.editor.position().piece_at(board::Square::parse("e2").unwrap()),
            None
        );
        assert!(surface.move_entry.is_empty());
    }

    #[test]
    fn surface_fen_entry_round_trip() {
        let mut surface = EditorSurface::new();
        surface.begin_fen_entry();
        assert!(surface.is_entering_fen());
        surface.cancel_fen_entry();
        assert!(!surface.is_entering_fen());

        surface.fen_entry = Some(board::KINGS_ONLY_FEN.to_string());
        surface.commit_fen_entry();
        assert_eq!(surface.editor.fen(), board::KINGS_ONLY_FEN);
        assert!(surface.editor.error().is_none());
    }
}
