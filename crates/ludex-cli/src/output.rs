use std::io::Write;

use ludex_core::DetailBundle;
use ludex_rawg::GameSummary;
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a ranked table of games.
pub fn print_games(
    w: &mut dyn Write,
    games: &[&GameSummary],
    color: ColorMode,
) -> std::io::Result<()> {
    for (rank, game) in games.iter().enumerate() {
        let year = game
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        let genres = game.genres.join(", ");

        if color.enabled() {
            writeln!(
                w,
                "{:>3}. {} ({})  {}  {}",
                rank + 1,
                game.name.bold(),
                year,
                score_label(game.metacritic, color),
                genres.dimmed(),
            )?;
        } else {
            writeln!(
                w,
                "{:>3}. {} ({})  {}  {}",
                rank + 1,
                game.name,
                year,
                score_label(game.metacritic, color),
                genres,
            )?;
        }
    }
    Ok(())
}

/// Print the full detail record plus media references.
pub fn print_detail(
    w: &mut dyn Write,
    bundle: &DetailBundle,
    color: ColorMode,
) -> std::io::Result<()> {
    let detail = match &bundle.detail {
        Some(d) => d,
        None => return Ok(()),
    };

    if color.enabled() {
        writeln!(w, "{}", detail.name.bold())?;
    } else {
        writeln!(w, "{}", detail.name)?;
    }

    let released = detail
        .released
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    writeln!(w, "Released:   {}", released)?;
    writeln!(w, "Metacritic: {}", score_label(detail.metacritic, color))?;
    writeln!(w, "Platforms:  {}", join_or(&detail.platforms))?;
    writeln!(w, "Genres:     {}", join_or(&detail.genres))?;
    writeln!(w, "Developers: {}", join_or(&detail.developers))?;
    writeln!(w, "Publishers: {}", join_or(&detail.publishers))?;
    let playtime = detail
        .playtime
        .map(|h| format!("{h} hours"))
        .unwrap_or_else(|| "Unknown".to_string());
    writeln!(w, "Playtime:   {}", playtime)?;

    writeln!(w)?;
    let description = detail
        .description_raw
        .as_deref()
        .unwrap_or("No description available.");
    writeln!(w, "{}", description)?;

    if let Some(trailer) = &bundle.trailer {
        writeln!(w)?;
        writeln!(w, "Trailer: {}", trailer)?;
    }

    if !bundle.screenshots.is_empty() {
        writeln!(w)?;
        writeln!(w, "Screenshots:")?;
        for shot in &bundle.screenshots {
            writeln!(w, "  {}", shot.image)?;
        }
    }
    Ok(())
}

/// Print a dimmed footnote line.
pub fn print_note(w: &mut dyn Write, note: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", note.dimmed())
    } else {
        writeln!(w, "{}", note)
    }
}

fn join_or(items: &[String]) -> String {
    if items.is_empty() {
        "N/A".to_string()
    } else {
        items.join(", ")
    }
}

fn score_label(score: Option<i32>, color: ColorMode) -> String {
    let Some(score) = score else {
        return "N/A".to_string();
    };
    if !color.enabled() {
        return score.to_string();
    }
    if score >= 75 {
        score.green().to_string()
    } else if score >= 50 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    }
}
