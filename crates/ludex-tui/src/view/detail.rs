use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::theme::Theme;
use crate::view::spinner_char;

/// Render the detail screen for one game.
pub fn render_in(f: &mut Frame, app: &mut App, id: u64, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(5),    // body
        Constraint::Length(1), // footer
    ])
    .split(area);

    // Title falls back to the list entry while the full record loads.
    let title = app
        .detail
        .as_ref()
        .and_then(|b| b.detail.as_ref().map(|d| d.name.clone()))
        .or_else(|| app.session.catalog().get(id).map(|g| g.name.clone()))
        .unwrap_or_else(|| format!("#{id}"));

    let header = Line::from(vec![
        Span::styled(" ludex ", theme.header_style()),
        Span::styled(
            format!(" {}", title),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    render_body(f, chunks[1], app, theme);

    let footer = Line::from(Span::styled(
        " Esc:back  j/k:scroll  t:theme  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

fn render_body(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Details ");

    if app.detail_loading {
        let line = Line::from(Span::styled(
            format!(" {} Loading details...", spinner_char(app.tick)),
            Style::default().fg(theme.accent),
        ));
        f.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let Some((bundle, detail)) = app
        .detail
        .as_ref()
        .and_then(|b| b.detail.as_ref().map(|d| (b, d)))
    else {
        let line = Line::from(Span::styled(
            " Game details not found.",
            Style::default().fg(theme.warn),
        ));
        f.render_widget(Paragraph::new(line).block(block), area);
        return;
    };

    let label = |s: &str| {
        Span::styled(
            format!("{s}: "),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )
    };
    let value = |s: String| Span::styled(s, Style::default().fg(theme.text));
    let join_or = |items: &[String], fallback: &str| {
        if items.is_empty() {
            fallback.to_string()
        } else {
            items.join(", ")
        }
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Released"),
            value(
                detail
                    .released
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
            ),
        ]),
        Line::from(vec![
            label("Metacritic"),
            Span::styled(
                detail
                    .metacritic
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                theme.score_style(detail.metacritic),
            ),
        ]),
        Line::from(vec![
            label("Platforms"),
            value(join_or(&detail.platforms, "N/A")),
        ]),
        Line::from(vec![label("Genres"), value(join_or(&detail.genres, "N/A"))]),
        Line::from(vec![
            label("Developers"),
            value(join_or(&detail.developers, "N/A")),
        ]),
        Line::from(vec![
            label("Publishers"),
            value(join_or(&detail.publishers, "N/A")),
        ]),
        Line::from(vec![
            label("Playtime"),
            value(
                detail
                    .playtime
                    .map(|h| format!("{h} hours"))
                    .unwrap_or_else(|| "Unknown".to_string()),
            ),
        ]),
        Line::from(""),
    ];

    lines.push(Line::from(Span::styled(
        "Description",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));
    let description = detail
        .description_raw
        .as_deref()
        .unwrap_or("No description available.");
    for part in description.split('\n') {
        lines.push(Line::from(Span::styled(
            part.to_string(),
            Style::default().fg(theme.text),
        )));
    }
    lines.push(Line::from(""));

    if let Some(trailer) = &bundle.trailer {
        lines.push(Line::from(vec![label("Trailer"), value(trailer.clone())]));
    }

    if !bundle.screenshots.is_empty() {
        lines.push(Line::from(Span::styled(
            "Screenshots",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        for shot in bundle.screenshots.iter().take(3) {
            lines.push(Line::from(Span::styled(
                format!("  {}", shot.image),
                Style::default().fg(theme.dim),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}
