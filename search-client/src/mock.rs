//! Mock BackendService implementation for testing

use crate::error::{ClientError, ClientResult};
use crate::traits::BackendService;
use crate::types::{
    AnalysisOptions, AnalysisResult, GameFilters, GamePage, GameRecord, SearchHit, UserInfo,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Responder<T> = Box<dyn Fn() -> ClientResult<T> + Send>;

/// Mock service for testing - only compiled in test mode or with the mock
/// feature. Clones share responses and the call log, so a test can keep a
/// handle for assertions after moving the mock into the app.
#[derive(Clone)]
pub struct MockBackendService {
    responses: Arc<Mutex<MockResponses>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Default)]
struct MockResponses {
    find_similar: Option<Responder<Vec<SearchHit>>>,
    analyze: Option<Responder<AnalysisResult>>,
    list_games: Option<Responder<GamePage>>,
    get_game: Option<Responder<Option<GameRecord>>>,
    delete_game: Option<Responder<String>>,
    upload_pgn_file: Option<Responder<String>>,
    upload_pgn_text: Option<Responder<String>>,
    rebuild_index: Option<Responder<String>>,
    clear_index: Option<Responder<String>>,
    login: Option<Responder<UserInfo>>,
    auth_status: Option<Responder<Option<UserInfo>>>,
}

/// Record of an observed call, for assertions on what the UI sent.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    FindSimilar { fen: String, limit: usize },
    Analyze { fen: String, options: AnalysisOptions },
    ListGames { page: usize, size: usize, filters: GameFilters },
    GetGame { id: String },
    DeleteGame { id: String },
    UploadPgnFile { file_name: String, len: usize },
    UploadPgnText { len: usize },
    RebuildIndex,
    ClearIndex,
    Login { username: String },
    Logout,
    AuthStatus,
}

impl Default for MockBackendService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackendService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(MockResponses::default())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_find_similar_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<Vec<SearchHit>> + Send + 'static,
    {
        self.responses.lock().unwrap().find_similar = Some(Box::new(f));
        self
    }

    pub fn with_analyze_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<AnalysisResult> + Send + 'static,
    {
        self.responses.lock().unwrap().analyze = Some(Box::new(f));
        self
    }

    pub fn with_list_games_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<GamePage> + Send + 'static,
    {
        self.responses.lock().unwrap().list_games = Some(Box::new(f));
        self
    }

    pub fn with_get_game_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<Option<GameRecord>> + Send + 'static,
    {
        self.responses.lock().unwrap().get_game = Some(Box::new(f));
        self
    }

    pub fn with_delete_game_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<String> + Send + 'static,
    {
        self.responses.lock().unwrap().delete_game = Some(Box::new(f));
        self
    }

    pub fn with_upload_pgn_file_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<String> + Send + 'static,
    {
        self.responses.lock().unwrap().upload_pgn_file = Some(Box::new(f));
        self
    }

    pub fn with_upload_pgn_text_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<String> + Send + 'static,
    {
        self.responses.lock().unwrap().upload_pgn_text = Some(Box::new(f));
        self
    }

    pub fn with_rebuild_index_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<String> + Send + 'static,
    {
        self.responses.lock().unwrap().rebuild_index = Some(Box::new(f));
        self
    }

    pub fn with_clear_index_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<String> + Send + 'static,
    {
        self.responses.lock().unwrap().clear_index = Some(Box::new(f));
        self
    }

    pub fn with_login_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<UserInfo> + Send + 'static,
    {
        self.responses.lock().unwrap().login = Some(Box::new(f));
        self
    }

    pub fn with_auth_status_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<Option<UserInfo>> + Send + 'static,
    {
        self.responses.lock().unwrap().auth_status = Some(Box::new(f));
        self
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.call_log.lock().unwrap().push(call);
    }

    fn respond<T>(
        slot: &Option<Responder<T>>,
        name: &str,
    ) -> ClientResult<T> {
        match slot {
            Some(f) => f(),
            None => Err(ClientError::NotConfigured(name.to_string())),
        }
    }
}

#[async_trait]
impl BackendService for MockBackendService {
    async fn find_similar(&self, fen: &str, limit: usize) -> ClientResult<Vec<SearchHit>> {
        self.record(MockCall::FindSimilar {
            fen: fen.to_string(),
            limit,
        });
        Self::respond(&self.responses.lock().unwrap().find_similar, "find_similar")
    }

    async fn analyze(&self, fen: &str, options: AnalysisOptions) -> ClientResult<AnalysisResult> {
        self.record(MockCall::Analyze {
            fen: fen.to_string(),
            options,
        });
        Self::respond(&self.responses.lock().unwrap().analyze, "analyze")
    }

    async fn list_games(
        &self,
        page: usize,
        size: usize,
        filters: &GameFilters,
    ) -> ClientResult<GamePage> {
        self.record(MockCall::ListGames {
            page,
            size,
            filters: filters.clone(),
        });
        Self::respond(&self.responses.lock().unwrap().list_games, "list_games")
    }

    async fn get_game(&self, id: &str) -> ClientResult<Option<GameRecord>> {
        self.record(MockCall::GetGame { id: id.to_string() });
        Self::respond(&self.responses.lock().unwrap().get_game, "get_game")
    }

    async fn delete_game(&self, id: &str) -> ClientResult<String> {
        self.record(MockCall::DeleteGame { id: id.to_string() });
        Self::respond(&self.responses.lock().unwrap().delete_game, "delete_game")
    }

    async fn upload_pgn_file(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        self.record(MockCall::UploadPgnFile {
            file_name: file_name.to_string(),
            len: bytes.len(),
        });
        Self::respond(
            &self.responses.lock().unwrap().upload_pgn_file,
            "upload_pgn_file",
        )
    }

    async fn upload_pgn_text(&self, pgn: &str) -> ClientResult<String> {
        self.record(MockCall::UploadPgnText { len: pgn.len() });
        Self::respond(
            &self.responses.lock().unwrap().upload_pgn_text,
            "upload_pgn_text",
        )
    }

    async fn rebuild_index(&self) -> ClientResult<String> {
        self.record(MockCall::RebuildIndex);
        Self::respond(&self.responses.lock().unwrap().rebuild_index, "rebuild_index")
    }

    async fn clear_index(&self) -> ClientResult<String> {
        self.record(MockCall::ClearIndex);
        Self::respond(&self.responses.lock().unwrap().clear_index, "clear_index")
    }

    async fn login(&self, username: &str, _password: &str) -> ClientResult<UserInfo> {
        self.record(MockCall::Login {
            username: username.to_string(),
        });
        Self::respond(&self.responses.lock().unwrap().login, "login")
    }

    async fn logout(&self) -> ClientResult<()> {
        self.record(MockCall::Logout);
        Ok(())
    }

    async fn auth_status(&self) -> ClientResult<Option<UserInfo>> {
        self.record(MockCall::AuthStatus);
        Self::respond(&self.responses.lock().unwrap().auth_status, "auth_status")
    }
}
