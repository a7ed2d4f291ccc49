//! BackendService trait abstraction for client implementations

use crate::error::ClientResult;
use crate::types::{
    AnalysisOptions, AnalysisResult, GameFilters, GamePage, GameRecord, SearchHit, UserInfo,
};
use async_trait::async_trait;

/// Everything the UI asks of the backend.
/// Implemented by both the real BackendClient and MockBackendService.
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Rank positions similar to `fen`, at most `limit` of them.
    async fn find_similar(&self, fen: &str, limit: usize) -> ClientResult<Vec<SearchHit>>;

    /// Ask the engine service for a verdict on `fen`.
    async fn analyze(&self, fen: &str, options: AnalysisOptions) -> ClientResult<AnalysisResult>;

    /// One page of game previews, optionally filtered.
    async fn list_games(
        &self,
        page: usize,
        size: usize,
        filters: &GameFilters,
    ) -> ClientResult<GamePage>;

    /// Fetch a full game record; None when the id is unknown.
    async fn get_game(&self, id: &str) -> ClientResult<Option<GameRecord>>;

    /// Delete a game from the database (admin).
    async fn delete_game(&self, id: &str) -> ClientResult<String>;

    /// Upload a PGN file for ingestion (admin).
    async fn upload_pgn_file(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String>;

    /// Submit raw PGN text for ingestion (admin).
    async fn upload_pgn_text(&self, pgn: &str) -> ClientResult<String>;

    /// Rebuild the similarity index from the stored games (admin).
    async fn rebuild_index(&self) -> ClientResult<String>;

    /// Drop the similarity index (admin).
    async fn clear_index(&self) -> ClientResult<String>;

    /// Authenticate; the session rides the client's cookie jar afterwards.
    async fn login(&self, username: &str, password: &str) -> ClientResult<UserInfo>;

    /// End the current session.
    async fn logout(&self) -> ClientResult<()>;

    /// Who the current session belongs to, if anyone.
    async fn auth_status(&self) -> ClientResult<Option<UserInfo>>;
}
