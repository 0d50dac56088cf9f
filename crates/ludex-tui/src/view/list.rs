use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use ludex_core::{FilterDim, StreamPhase};

use crate::app::{App, InputMode};
use crate::theme::Theme;
use crate::view::{spinner_char, truncate};

/// Render the list screen (the root view) into the given area.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let has_search = app.input_mode == InputMode::Search || app.session.search_active();

    let mut constraints = vec![
        Constraint::Length(1), // header
    ];
    if has_search {
        constraints.push(Constraint::Length(1)); // search bar
    }
    constraints.push(Constraint::Length(1)); // filter bar
    constraints.push(Constraint::Min(5)); // table
    constraints.push(Constraint::Length(1)); // status line
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::vertical(constraints).split(area);
    let mut chunk_idx = 0;

    render_header(f, chunks[chunk_idx], app);
    chunk_idx += 1;

    if has_search {
        render_search_bar(f, chunks[chunk_idx], app);
        chunk_idx += 1;
    }

    render_filter_bar(f, chunks[chunk_idx], app);
    chunk_idx += 1;

    render_table(f, chunks[chunk_idx], app);
    chunk_idx += 1;

    render_status(f, chunks[chunk_idx], app);
    chunk_idx += 1;

    render_footer(f, chunks[chunk_idx], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let visible = app.visible_len();
    let total = app.session.catalog().len();

    let mut spans = vec![
        Span::styled(" ludex ", theme.header_style()),
        Span::styled(
            " Game Catalog",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} games", visible, total),
            Style::default().fg(theme.dim),
        ),
    ];

    if app.session.search_active() {
        spans.push(Span::styled(
            format!("  [search: {}]", app.session.search_query()),
            Style::default().fg(theme.accent),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let cursor = if app.input_mode == InputMode::Search {
        "\u{2588}"
    } else {
        ""
    };
    let line = Line::from(vec![
        Span::styled(
            " /",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(&app.search_input, Style::default().fg(theme.text)),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let enabled = app.filters_enabled();
    let filters = app.session.filters();

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for dim in FilterDim::all() {
        let value = match dim {
            FilterDim::Year => filters
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "All".to_string()),
            FilterDim::Genre => filters.genre.clone().unwrap_or_else(|| "All".to_string()),
            FilterDim::Platform => filters
                .platform
                .clone()
                .unwrap_or_else(|| "All".to_string()),
            FilterDim::Tag => filters.tag.clone().unwrap_or_else(|| "All".to_string()),
        };

        let focused = enabled && dim == app.focused_dim;
        let style = if !enabled {
            Style::default().fg(theme.dim)
        } else if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        let marker = if focused { "\u{25B8}" } else { " " };
        spans.push(Span::styled(
            format!("{}{}: {}  ", marker, dim.label(), value),
            style,
        ));
    }

    if !enabled && app.session.search_active() {
        spans.push(Span::styled(
            "(filters suspended while searching)",
            Style::default().fg(theme.dim),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let visible = app.session.visible();

    let header = Row::new(["#", "Name", "Year", "Score", "Genres"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
    }))
    .height(1);

    let name_width = (area.width as usize).saturating_sub(30);
    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(idx, game)| {
            let year = game
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "\u{2014}".to_string());
            let score = game
                .metacritic
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let genres = truncate(&game.genres.join(", "), 24);

            Row::new(vec![
                Cell::from(format!("{}", idx + 1)).style(Style::default().fg(theme.dim)),
                Cell::from(truncate(&game.name, name_width)),
                Cell::from(year).style(Style::default().fg(theme.dim)),
                Cell::from(score).style(theme.score_style(game.metacritic)),
                Cell::from(genres).style(Style::default().fg(theme.dim)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(26),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(format!(" Filter: {} (f) ", app.focused_dim.label())),
        )
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    state.select(Some(app.list_cursor));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = if app.session.phase() == StreamPhase::Fetching {
        Line::from(Span::styled(
            format!(" {} Loading games...", spinner_char(app.tick)),
            Style::default().fg(theme.accent),
        ))
    } else if app.session.no_results() {
        Line::from(Span::styled(
            " No games match the selected filters.",
            Style::default().fg(theme.warn),
        ))
    } else if !app.session.has_more() {
        Line::from(Span::styled(
            " No more games available.",
            Style::default().fg(theme.dim),
        ))
    } else {
        Line::from(Span::styled(
            " m: load more games",
            Style::default().fg(theme.dim),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme: &Theme = &app.theme;
    let footer = Line::from(Span::styled(
        " Enter:details  /:search  f:filter  \u{2190}\u{2192}:value  m:more  r:reset  t:theme  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
