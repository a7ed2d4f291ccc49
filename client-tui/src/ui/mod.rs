//! Terminal event loop, key dispatch and page rendering.

pub mod widgets;

use crate::state::{App, LoginForm, Page};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Widget},
    Frame, Terminal,
};
use widgets::{AnalysisPanel, BoardWidget, GameInfoPanel, MoveHistoryPanel, ResultsPanel};

/// Run the interactive client until the user quits.
pub async fn run_app(app: &mut App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(app, &mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    loop {
        terminal.draw(|frame| render(frame, app))?;
        if app.should_quit {
            return Ok(());
        }
        match events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                handle_key(app, key).await;
            }
            Some(Ok(_)) => {} // resize etc. - redrawn on the next pass
            Some(Err(e)) => tracing::warn!("terminal input error: {e}"),
            None => return Ok(()),
        }
    }
}

// --- Key handling ---

async fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.login.is_some() {
        handle_login_key(app, key).await;
        return;
    }

    match key.code {
        KeyCode::F(1) => {
            app.page = Page::Search;
            return;
        }
        KeyCode::F(2) => {
            app.page = Page::Analyze;
            return;
        }
        KeyCode::F(3) => {
            app.page = Page::Games;
            if app.games.previews.is_empty() {
                app.load_games_page(0).await;
            }
            return;
        }
        KeyCode::F(4) => {
            if app.viewer.is_some() {
                app.page = Page::GameView;
            } else {
                app.set_status("No game open - pick one from Games or Search");
            }
            return;
        }
        KeyCode::F(5) => {
            if app.is_admin() {
                app.page = Page::Upload;
            } else {
                app.set_status("Data ingestion requires an admin session");
            }
            return;
        }
        _ => {}
    }

    if !in_text_entry(app) {
        match key.code {
            KeyCode::Char('L') => {
                app.login = Some(LoginForm {
                    username: String::new(),
                    password: String::new(),
                    focus_password: false,
                });
                return;
            }
            KeyCode::Char('O') if app.user.is_some() => {
                app.logout().await;
                return;
            }
            _ => {}
        }
    }

    match app.page {
        Page::Search => handle_search_key(app, key).await,
        Page::Analyze => handle_analyze_key(app, key).await,
        Page::Games => handle_games_key(app, key).await,
        Page::GameView => handle_game_view_key(app, key),
        Page::Upload => handle_upload_key(app, key).await,
    }
}

fn in_text_entry(app: &App) -> bool {
    match app.page {
        Page::Search => app.search.surface.is_entering_fen(),
        Page::Analyze => app.analyze.surface.is_entering_fen(),
        Page::Games => app.games.page_entry.is_some() || app.games.filter_entry.is_some(),
        Page::GameView => app.viewer.as_ref().is_some_and(|v| v.is_entering_ply()),
        Page::Upload => app.upload.path_entry.is_some() || app.upload.text_entry.is_some(),
    }
}

async fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_login().await;
            return;
        }
        KeyCode::Esc => {
            app.login = None;
            return;
        }
        _ => {}
    }
    if let Some(form) = app.login.as_mut() {
        match key.code {
            KeyCode::Tab => form.focus_password = !form.focus_password,
            KeyCode::Backspace => {
                if form.focus_password {
                    form.password.pop();
                } else {
                    form.username.pop();
                }
            }
            KeyCode::Char(c) => {
                if form.focus_password {
                    form.password.push(c);
                } else {
                    form.username.push(c);
                }
            }
            _ => {}
        }
    }
}

async fn handle_search_key(app: &mut App, key: KeyEvent) {
    if app.search.surface.is_entering_fen() {
        let surface = &mut app.search.surface;
        match key.code {
            KeyCode::Enter => surface.commit_fen_entry(),
            KeyCode::Esc => surface.cancel_fen_entry(),
            KeyCode::Backspace => surface.backspace_fen(),
            KeyCode::Char(c) => surface.push_fen_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('F') => app.search.surface.begin_fen_entry(),
        KeyCode::Char('R') => app.search.surface.editor.reset(),
        KeyCode::Char('C') => app.search.surface.editor.clear_board(),
        KeyCode::Char('X') => app.search.surface.editor.toggle_remove_mode(),
        KeyCode::Char('S') => app.search.surface.editor.switch_sides(),
        KeyCode::Char('G') => app.run_search().await,
        KeyCode::Char('+') | KeyCode::Char('=') => app.search.bump_max_results(1),
        KeyCode::Char('-') => app.search.bump_max_results(-1),
        KeyCode::Up => app.search.select_previous(),
        KeyCode::Down => app.search.select_next(),
        KeyCode::Enter => {
            if app.search.surface.move_entry.is_empty() {
                app.open_selected_hit().await;
            } else {
                app.search.surface.apply_move_entry();
            }
        }
        KeyCode::Backspace => app.search.surface.move_entry.backspace(),
        KeyCode::Esc => app.search.surface.move_entry.clear(),
        KeyCode::Char('q') if app.search.surface.move_entry.is_empty() => app.should_quit = true,
        KeyCode::Char(c) => app.search.surface.move_entry.push_char(c),
        _ => {}
    }
}

async fn handle_analyze_key(app: &mut App, key: KeyEvent) {
    if app.analyze.surface.is_entering_fen() {
        let surface = &mut app.analyze.surface;
        match key.code {
            KeyCode::Enter => surface.commit_fen_entry(),
            KeyCode::Esc => surface.cancel_fen_entry(),
            KeyCode::Backspace => surface.backspace_fen(),
            KeyCode::Char(c) => surface.push_fen_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('F') => app.analyze.surface.begin_fen_entry(),
        KeyCode::Char('R') => app.analyze.surface.editor.reset(),
        KeyCode::Char('C') => app.analyze.surface.editor.clear_board(),
        KeyCode::Char('X') => app.analyze.surface.editor.toggle_remove_mode(),
        KeyCode::Char('S') => app.analyze.surface.editor.switch_sides(),
        KeyCode::Char('G') => app.run_analysis().await,
        KeyCode::Char(']') => app.analyze.bump_depth(1),
        KeyCode::Char('[') => app.analyze.bump_depth(-1),
        KeyCode::Char('}') => app.analyze.bump_variants(1),
        KeyCode::Char('{') => app.analyze.bump_variants(-1),
        KeyCode::Enter => app.analyze.surface.apply_move_entry(),
        KeyCode::Backspace => app.analyze.surface.move_entry.backspace(),
        KeyCode::Esc => app.analyze.surface.move_entry.clear(),
        KeyCode::Char('q') if app.analyze.surface.move_entry.is_empty() => app.should_quit = true,
        KeyCode::Char(c) => app.analyze.surface.move_entry.push_char(c),
        _ => {}
    }
}

async fn handle_games_key(app: &mut App, key: KeyEvent) {
    if app.games.page_entry.is_some() {
        match key.code {
            KeyCode::Enter => app.commit_page_entry().await,
            KeyCode::Esc => app.games.page_entry = None,
            KeyCode::Backspace => {
                if let Some(buffer) = &mut app.games.page_entry {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(buffer) = &mut app.games.page_entry {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    if app.games.filter_entry.is_some() {
        match key.code {
            KeyCode::Enter => app.commit_filter_entry().await,
            KeyCode::Esc => app.games.filter_entry = None,
            KeyCode::Backspace => {
                if let Some(buffer) = &mut app.games.filter_entry {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = &mut app.games.filter_entry {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Left => app.games_previous_page().await,
        KeyCode::Right => app.games_next_page().await,
        KeyCode::Home => app.games_first_page().await,
        KeyCode::End => app.games_last_page().await,
        KeyCode::Up => app.games.select_previous(),
        KeyCode::Down => app.games.select_next(),
        KeyCode::Enter => app.open_selected_preview().await,
        KeyCode::Char('P') | KeyCode::Char('p') => app.games.page_entry = Some(String::new()),
        KeyCode::Char('/') => app.games.filter_entry = Some(String::new()),
        KeyCode::Char('D') => app.delete_selected_game().await,
        KeyCode::Char('R') => app.load_games_page(app.games.current_page).await,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_game_view_key(app: &mut App, key: KeyEvent) {
    let Some(viewer) = app.viewer.as_mut() else {
        app.page = Page::Games;
        return;
    };

    if viewer.is_entering_ply() {
        match key.code {
            KeyCode::Enter => viewer.commit_ply_entry(),
            KeyCode::Esc => viewer.cancel_ply_entry(),
            KeyCode::Backspace => viewer.backspace_ply(),
            KeyCode::Char(c) => viewer.push_ply_digit(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Left => viewer.previous(),
        KeyCode::Right => viewer.next(),
        KeyCode::Home => viewer.first(),
        KeyCode::End => viewer.last(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            viewer.begin_ply_entry();
            viewer.push_ply_digit(c);
        }
        KeyCode::Esc => app.page = app.return_page,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

async fn handle_upload_key(app: &mut App, key: KeyEvent) {
    if app.upload.path_entry.is_some() {
        match key.code {
            KeyCode::Enter => {
                if let Some(path) = app.upload.path_entry.take() {
                    app.upload_pgn_file(&path).await;
                }
            }
            KeyCode::Esc => app.upload.path_entry = None,
            KeyCode::Backspace => {
                if let Some(buffer) = &mut app.upload.path_entry {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = &mut app.upload.path_entry {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    if app.upload.text_entry.is_some() {
        match key.code {
            KeyCode::Enter => {
                if let Some(text) = app.upload.text_entry.take() {
                    app.upload_pgn_text(&text).await;
                }
            }
            KeyCode::Esc => app.upload.text_entry = None,
            KeyCode::Backspace => {
                if let Some(buffer) = &mut app.upload.text_entry {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = &mut app.upload.text_entry {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('F') => app.upload.path_entry = Some(String::new()),
        KeyCode::Char('T') => app.upload.text_entry = Some(String::new()),
        KeyCode::Char('R') => app.rebuild_index().await,
        KeyCode::Char('C') => app.clear_index().await,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

// --- Rendering ---

fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.page {
        Page::Search => render_search(frame, app, chunks[1]),
        Page::Analyze => render_analyze(frame, app, chunks[1]),
        Page::Games => render_games(frame, app, chunks[1]),
        Page::GameView => render_game_view(frame, app, chunks[1]),
        Page::Upload => render_upload(frame, app, chunks[1]),
    }
    render_help_line(frame, app, chunks[2]);
    render_status_line(frame, app, chunks[3]);

    if app.login.is_some() {
        render_login(frame, app);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = vec![
        "F1 Search",
        "F2 Analyze",
        "F3 Games",
        "F4 Game",
        "F5 Upload",
    ];
    let selected = match app.page {
        Page::Search => 0,
        Page::Analyze => 1,
        Page::Games => 2,
        Page::GameView => 3,
        Page::Upload => 4,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Board on the left, FEN entry line underneath it.
fn render_editor_column(
    frame: &mut Frame,
    surface: &crate::state::EditorSurface,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(19), Constraint::Length(4)])
        .split(area);

    frame.render_widget(
        BoardWidget::new(surface.editor.position()).remove_mode(surface.editor.remove_mode()),
        chunks[0],
    );

    let (fen_line, border) = match &surface.fen_entry {
        Some(buffer) => (format!("{buffer}_"), Color::Green),
        None => (surface.editor.fen_input().to_string(), Color::DarkGray),
    };
    let second_line = if let Some(error) = surface.editor.error_message() {
        Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if !surface.move_entry.is_empty() {
        Line::from(Span::styled(
            format!("move: {}_", surface.move_entry.as_str()),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from(Span::styled(
            "type a move like e2e4 (e7e8n to underpromote), F to edit FEN",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let paragraph = Paragraph::new(vec![Line::from(fen_line), second_line]).block(
        Block::default()
            .title(" FEN ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, chunks[1]);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(46), Constraint::Length(48)])
        .split(area);

    render_editor_column(frame, &app.search.surface, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(columns[1]);

    let params = Paragraph::new(vec![
        Line::from(format!("Number of results: {}", app.search.max_results)),
        Line::from(Span::styled(
            "+/- adjust  G search",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!(
            "Side to move: {}",
            app.search.surface.editor.position().side_to_move()
        )),
    ])
    .block(
        Block::default()
            .title(" Retrieval options ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(params, side[0]);

    frame.render_widget(
        ResultsPanel {
            results: &app.search.results,
            selected: app.search.selected,
        },
        side[1],
    );
}

fn render_analyze(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(46), Constraint::Length(48)])
        .split(area);

    render_editor_column(frame, &app.analyze.surface, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(columns[1]);

    let options = Paragraph::new(vec![
        Line::from(format!(
            "Depth: {}   Variants: {}",
            app.analyze.options.depth, app.analyze.options.variants
        )),
        Line::from(Span::styled(
            "[/] depth  {/} variants  G analyze",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!(
            "Side to move: {}",
            app.analyze.surface.editor.position().side_to_move()
        )),
    ])
    .block(
        Block::default()
            .title(" Analysis options ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(options, side[0]);

    frame.render_widget(
        AnalysisPanel {
            result: app.analyze.result.as_ref(),
            error: app.analyze.error.as_deref(),
            in_flight: app.analyze.in_flight,
        },
        side[1],
    );
}

fn render_games(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(area);

    let header = Row::new(["ID", "White", "Black", "Result", "ECO"].map(|h| {
        Cell::from(h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows: Vec<Row> = app
        .games
        .previews
        .iter()
        .enumerate()
        .map(|(i, preview)| {
            let style = if i == app.games.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(preview.id.clone()),
                Cell::from(preview.white.clone().unwrap_or_default()),
                Cell::from(preview.black.clone().unwrap_or_default()),
                Cell::from(preview.result.clone().unwrap_or_default()),
                Cell::from(preview.eco.clone().unwrap_or_default()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(table, chunks[0]);

    let page_display = if app.games.total_pages > 0 {
        format!(
            "Page {} / {} ({} games)",
            app.games.current_page + 1,
            app.games.total_pages,
            app.games.total_games
        )
    } else {
        "No games".to_string()
    };
    let mut spans = vec![Span::raw(page_display)];
    if let Some(buffer) = &app.games.page_entry {
        spans.push(Span::styled(
            format!("   go to page: {buffer}_"),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(buffer) = &app.games.filter_entry {
        spans.push(Span::styled(
            format!("   player filter: {buffer}_"),
            Style::default().fg(Color::Green),
        ));
    } else if let Some(player) = &app.games.filters.player {
        spans.push(Span::styled(
            format!("   filtered by player: {player}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn render_game_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(viewer) = app.viewer.as_ref() else {
        frame.render_widget(
            Paragraph::new("No game open - pick one from Games or Search."),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(46), Constraint::Length(48)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(19), Constraint::Length(3)])
        .split(columns[0]);

    let highlights: Vec<board::Square> = viewer
        .played_move_squares()
        .map(|(from, to)| vec![from, to])
        .unwrap_or_default();
    frame.render_widget(
        BoardWidget::new(viewer.position()).highlights(&highlights),
        left[0],
    );

    let fen_line = Paragraph::new(viewer.fen().to_string()).block(
        Block::default()
            .title(" FEN ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(fen_line, left[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(columns[1]);

    frame.render_widget(GameInfoPanel { game: &viewer.game }, side[0]);
    frame.render_widget(MoveHistoryPanel { viewer }, side[1]);
}

fn render_upload(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "PGN ingestion (admin)",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match &app.upload.path_entry {
        Some(buffer) => lines.push(Line::from(Span::styled(
            format!("File path: {buffer}_"),
            Style::default().fg(Color::Green),
        ))),
        None => lines.push(Line::from("F  upload a PGN file by path")),
    }
    match &app.upload.text_entry {
        Some(buffer) => lines.push(Line::from(Span::styled(
            format!("PGN text: {buffer}_"),
            Style::default().fg(Color::Green),
        ))),
        None => lines.push(Line::from("T  paste PGN text")),
    }
    lines.push(Line::from("R  rebuild the similarity index"));
    lines.push(Line::from("C  clear the similarity index"));

    if let Some(feedback) = &app.upload.feedback {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            feedback.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Load Games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help_line(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.page {
        Page::Search => "R reset  C clear  X remove mode  S switch sides  F FEN  G search  ↑/↓ results  Enter open",
        Page::Analyze => "R reset  C clear  X remove mode  S switch sides  F FEN  G analyze",
        Page::Games => "←/→ page  Home/End first/last  P page number  / player filter  Enter open  D delete",
        Page::GameView => "←/→ move  Home/End ends  digits go to move  Esc back",
        Page::Upload => "F file  T text  R rebuild  C clear index",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let user = match &app.user {
        Some(user) => format!(
            "{}{}  O logout",
            user.username,
            if user.is_admin() { " (admin)" } else { "" }
        ),
        None => "anonymous - L to login".to_string(),
    };
    let status = app.status.clone().unwrap_or_default();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(32)])
        .split(area);
    frame.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(Color::Yellow))),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(user, Style::default().fg(Color::DarkGray)))
            .alignment(ratatui::layout::Alignment::Right),
        columns[1],
    );
}

fn render_login(frame: &mut Frame, app: &App) {
    let Some(form) = app.login.as_ref() else {
        return;
    };
    let area = frame.area();
    let width = 46u16.min(area.width);
    let height = 7u16.min(area.height);
    let dialog = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    Clear.render(dialog, frame.buffer_mut());

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Username: ", field_style(!form.focus_password)),
            Span::raw(form.username.clone()),
            Span::raw(if form.focus_password { "" } else { "_" }),
        ]),
        Line::from(vec![
            Span::styled("Password: ", field_style(form.focus_password)),
            Span::raw("*".repeat(form.password.len())),
            Span::raw(if form.focus_password { "_" } else { "" }),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Tab switch field  Enter submit  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog_widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Login ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(dialog_widget, dialog);
}
