//! Wire types for the backend API.
//!
//! Field names follow the backend's camelCase JSON. Everything the UI does
//! not strictly need is optional with a default, so a sparse response never
//! fails the whole page.

use serde::{Deserialize, Serialize};

/// One ranked match from the position-similarity index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub game_id: String,
    /// Zero-based index into the matched game's position list.
    pub move_index: usize,
    pub fen: String,
    pub score: f64,
    #[serde(default)]
    pub white: Option<String>,
    #[serde(default)]
    pub black: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

/// One entry of a game's precomputed position list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePosition {
    pub fen: String,
    #[serde(default)]
    pub san: Option<String>,
}

/// A full game record with PGN tags and the ordered position list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub white: Option<String>,
    #[serde(default)]
    pub black: Option<String>,
    #[serde(default)]
    pub white_elo: Option<u32>,
    #[serde(default)]
    pub black_elo: Option<u32>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub eco: Option<String>,
    #[serde(default)]
    pub pgn: Option<String>,
    #[serde(default)]
    pub positions: Vec<GamePosition>,
}

/// Compact game summary shown on the paginated games list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePreview {
    pub id: String,
    #[serde(default)]
    pub white: Option<String>,
    #[serde(default)]
    pub black: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub eco: Option<String>,
    /// Final position of the game, for the preview board.
    #[serde(default)]
    pub fen: Option<String>,
}

/// One page of game previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePage {
    pub previews: Vec<GamePreview>,
    pub total_pages: usize,
    pub total_games: usize,
}

/// Optional filters for the games list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilters {
    pub eco: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub result: Option<String>,
    pub min_elo: Option<u32>,
    pub max_elo: Option<u32>,
    pub player: Option<String>,
}

impl GameFilters {
    /// Query parameters for the set filters, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(eco) = &self.eco {
            pairs.push(("eco", eco.clone()));
        }
        if let Some(from) = &self.date_from {
            pairs.push(("dateFrom", from.clone()));
        }
        if let Some(to) = &self.date_to {
            pairs.push(("dateTo", to.clone()));
        }
        if let Some(result) = &self.result {
            pairs.push(("result", result.clone()));
        }
        if let Some(min) = self.min_elo {
            pairs.push(("minElo", min.to_string()));
        }
        if let Some(max) = self.max_elo {
            pairs.push(("maxElo", max.to_string()));
        }
        if let Some(player) = &self.player {
            pairs.push(("player", player.clone()));
        }
        pairs
    }
}

/// Tunables for an engine-analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    pub depth: u8,
    pub variants: u8,
    pub max_thinking_time: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            depth: 12,
            variants: 1,
            max_thinking_time: 50,
        }
    }
}

/// Engine verdict for a submitted position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub san: Option<String>,
    #[serde(default)]
    pub eval: Option<f64>,
    #[serde(default)]
    pub mate: Option<i32>,
    #[serde(default)]
    pub depth: Option<u32>,
    #[serde(default)]
    pub win_chance: Option<f64>,
    #[serde(default)]
    pub continuation_arr: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The authenticated user, as reported by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hits_deserialize_from_backend_json() {
        let json = r#"[
            {"gameId": "g42", "moveIndex": 17, "fen": "8/8/8/4k3/8/8/8/4K3 w - - 0 1",
             "score": 0.93, "white": "Tal", "black": "Botvinnik", "result": "1-0"},
            {"gameId": "g7", "moveIndex": 0, "fen": "8/8/8/4k3/8/8/8/4K3 b - - 0 1", "score": 0.81}
        ]"#;
        let hits: Vec<SearchHit> = serde_json::from_str(json).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].game_id, "g42");
        assert_eq!(hits[0].move_index, 17);
        assert_eq!(hits[1].white, None);
    }

    #[test]
    fn game_page_requires_pagination_fields() {
        let missing_totals = r#"{"previews": []}"#;
        assert!(serde_json::from_str::<GamePage>(missing_totals).is_err());

        let ok = r#"{"previews": [{"id": "g1", "white": "A", "black": "B"}],
                     "totalPages": 3, "totalGames": 25}"#;
        let page: GamePage = serde_json::from_str(ok).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.previews[0].id, "g1");
    }

    #[test]
    fn game_record_tolerates_sparse_tags() {
        let json = r#"{"id": "g1", "white": "Fischer",
                       "positions": [{"fen": "8/8/8/4k3/8/8/8/4K3 w - - 0 1", "san": "e4"}]}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.positions.len(), 1);
        assert_eq!(record.positions[0].san.as_deref(), Some("e4"));
        assert_eq!(record.eco, None);
    }

    #[test]
    fn analysis_result_reads_camel_case() {
        let json = r#"{"type": "bestmove", "san": "Nf3", "eval": 0.35, "depth": 12,
                       "winChance": 53.2, "continuationArr": ["Nf3", "Nc6"]}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind.as_deref(), Some("bestmove"));
        assert_eq!(result.win_chance, Some(53.2));
        assert_eq!(result.continuation_arr, vec!["Nf3", "Nc6"]);
        assert_eq!(result.mate, None);
    }

    #[test]
    fn analysis_options_serialize_camel_case() {
        let body = serde_json::to_value(AnalysisOptions::default()).unwrap();
        assert_eq!(body["maxThinkingTime"], 50);
        assert_eq!(body["depth"], 12);
    }

    #[test]
    fn filters_emit_only_set_fields() {
        let filters = GameFilters {
            eco: Some("B12".to_string()),
            min_elo: Some(2400),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("eco", "B12".to_string()), ("minElo", "2400".to_string())]
        );
        assert!(GameFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn admin_role_check_ignores_case() {
        let admin = UserInfo {
            username: "root".to_string(),
            role: Some("ADMIN".to_string()),
        };
        let viewer = UserInfo {
            username: "guest".to_string(),
            role: Some("user".to_string()),
        };
        let anonymous = UserInfo {
            username: "x".to_string(),
            role: None,
        };
        assert!(admin.is_admin());
        assert!(!viewer.is_admin());
        assert!(!anonymous.is_admin());
    }
}
