//! End-to-end page flows against the mock backend service.

use client_tui::state::{App, LoginForm, Page, GAMES_PAGE_SIZE};
use search_client::{
    ClientError, GamePage, GamePosition, GamePreview, GameRecord, MockBackendService, MockCall,
    SearchHit, UserInfo,
};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn sample_game() -> GameRecord {
    GameRecord {
        id: "g1".to_string(),
        event: Some("Candidates".to_string()),
        site: None,
        date: None,
        white: Some("White".to_string()),
        black: Some("Black".to_string()),
        white_elo: Some(2700),
        black_elo: Some(2650),
        result: Some("1/2-1/2".to_string()),
        eco: Some("C42".to_string()),
        pgn: None,
        positions: vec![
            GamePosition {
                fen: START_FEN.to_string(),
                san: None,
            },
            GamePosition {
                fen: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".to_string(),
                san: Some("e4".to_string()),
            },
            GamePosition {
                fen: "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2".to_string(),
                san: Some("e5".to_string()),
            },
            GamePosition {
                fen: "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2".to_string(),
                san: Some("Nf3".to_string()),
            },
        ],
    }
}

fn sample_hit() -> SearchHit {
    SearchHit {
        game_id: "g1".to_string(),
        move_index: 2,
        fen: "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2".to_string(),
        score: 0.97,
        white: Some("White".to_string()),
        black: Some("Black".to_string()),
        result: Some("1/2-1/2".to_string()),
    }
}

#[tokio::test]
async fn search_flow_opens_the_matched_game_at_the_hit_ply() {
    let mock = MockBackendService::new()
        .with_find_similar_response(|| Ok(vec![sample_hit()]))
        .with_get_game_response(|| Ok(Some(sample_game())));
    let probe = mock.clone();

    let mut app = App::new(Box::new(mock));
    app.run_search().await;
    assert_eq!(app.search.results.len(), 1);

    app.open_selected_hit().await;
    assert_eq!(app.page, Page::GameView);
    assert_eq!(app.return_page, Page::Search);
    let viewer = app.viewer.as_ref().unwrap();
    assert_eq!(viewer.counter(), (3, 4));

    // The search used the editor's canonical FEN and the configured limit.
    assert_eq!(
        probe.calls()[0],
        MockCall::FindSimilar {
            fen: START_FEN.to_string(),
            limit: 10,
        }
    );
    assert_eq!(
        probe.calls()[1],
        MockCall::GetGame {
            id: "g1".to_string()
        }
    );
}

#[tokio::test]
async fn failed_analysis_surfaces_the_error_and_keeps_the_editor() {
    let mock = MockBackendService::new().with_analyze_response(|| {
        Err(ClientError::Api {
            status: 503,
            message: "engine unavailable".to_string(),
        })
    });

    let mut app = App::new(Box::new(mock));
    let fen_before = app.analyze.surface.editor.fen();
    app.run_analysis().await;

    assert!(app.analyze.result.is_none());
    let error = app.analyze.error.as_deref().unwrap();
    assert!(error.contains("engine unavailable"), "got: {error}");
    assert_eq!(app.analyze.surface.editor.fen(), fen_before);
    assert!(!app.analyze.in_flight);
}

#[tokio::test]
async fn games_pagination_clamps_and_page_entry_reverts_silently() {
    let mock = MockBackendService::new().with_list_games_response(|| {
        Ok(GamePage {
            previews: vec![
                GamePreview {
                    id: "g1".to_string(),
                    white: Some("A".to_string()),
                    black: Some("B".to_string()),
                    result: None,
                    eco: None,
                    fen: None,
                },
                GamePreview {
                    id: "g2".to_string(),
                    white: Some("C".to_string()),
                    black: Some("D".to_string()),
                    result: None,
                    eco: None,
                    fen: None,
                },
            ],
            total_pages: 3,
            total_games: 25,
        })
    });
    let probe = mock.clone();

    let mut app = App::new(Box::new(mock));
    app.load_games_page(0).await;
    assert_eq!(app.games.current_page, 0);
    assert_eq!(app.games.total_pages, 3);

    // Stepping past the last page is a no-op.
    app.games_next_page().await;
    app.games_next_page().await;
    app.games_next_page().await;
    assert_eq!(app.games.current_page, 2);

    // Out-of-range manual entry abandons the edit without a request.
    let requests_before = probe.calls().len();
    app.games.page_entry = Some("99".to_string());
    app.commit_page_entry().await;
    assert_eq!(app.games.current_page, 2);
    assert_eq!(probe.calls().len(), requests_before);

    // A valid entry is one-based.
    app.games.page_entry = Some("2".to_string());
    app.commit_page_entry().await;
    assert_eq!(app.games.current_page, 1);

    let pages: Vec<usize> = probe
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            MockCall::ListGames { page, size, .. } => {
                assert_eq!(size, GAMES_PAGE_SIZE);
                Some(page)
            }
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![0, 1, 2, 1]);
}

#[tokio::test]
async fn login_unlocks_admin_actions() {
    let mock = MockBackendService::new()
        .with_login_response(|| {
            Ok(UserInfo {
                username: "root".to_string(),
                role: Some("admin".to_string()),
            })
        })
        .with_upload_pgn_text_response(|| Ok("Imported 3 games".to_string()));

    let mut app = App::new(Box::new(mock));
    assert!(!app.is_admin());

    app.login = Some(LoginForm {
        username: "root".to_string(),
        password: "hunter2".to_string(),
        focus_password: true,
    });
    app.submit_login().await;
    assert!(app.is_admin());
    assert!(app.login.is_none());

    // Blank PGN text is rejected locally, without a request.
    app.upload_pgn_text("   ").await;
    assert_eq!(app.upload.feedback.as_deref(), Some("Please enter PGN text."));

    app.upload_pgn_text("[Event \"x\"] 1. e4 e5").await;
    assert_eq!(app.upload.feedback.as_deref(), Some("Imported 3 games"));
}

#[tokio::test]
async fn missing_game_reports_without_switching_pages() {
    let mock = MockBackendService::new().with_get_game_response(|| Ok(None));

    let mut app = App::new(Box::new(mock));
    app.open_game("nope", None).await;
    assert_eq!(app.page, Page::Search);
    assert!(app.viewer.is_none());
    assert!(app.status.as_deref().unwrap().contains("not found"));
}

#[tokio::test]
async fn deleting_requires_an_admin_session() {
    let mock = MockBackendService::new();
    let probe = mock.clone();

    let mut app = App::new(Box::new(mock));
    app.games.previews = vec![GamePreview {
        id: "g1".to_string(),
        white: None,
        black: None,
        result: None,
        eco: None,
        fen: None,
    }];
    app.delete_selected_game().await;

    assert!(app
        .status
        .as_deref()
        .unwrap()
        .contains("admin"));
    assert!(probe.calls().is_empty());
}
