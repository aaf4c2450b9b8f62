use crate::game::{GameEngine, Player, Verdict};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole screen from engine queries alone.
pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = board_height(engine.row_count());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Lines taken by the board: column labels, two borders, the selection
/// marker and one line per row.
fn board_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.winner_name() {
        Verdict::Pending => {
            let player = engine.current_player();
            (
                format!(
                    "{} to move ({})",
                    engine.player_name(player),
                    player.color_name()
                ),
                player_color(player),
            )
        }
        Verdict::Winner(name) => {
            let color = engine
                .last_move()
                .map_or(Color::White, |m| player_color(m.player));
            (format!("{name} wins!"), color)
        }
        Verdict::Draw => ("Draw!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let columns = engine.column_count();
    let game_over = engine.is_over();
    let mut lines = Vec::new();

    // Column numbers; full columns are dimmed since they accept no drop
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for column in 1..=columns {
        let label = format!("{:^3}", column);
        let style = if game_over || engine.is_column_full(column) {
            Style::default().fg(Color::DarkGray)
        } else if column == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 1..=engine.row_count() {
        let mut row_spans = vec![Span::raw("  ║")];

        for column in 1..=columns {
            let piece = engine
                .cell_at(row, column)
                .ok()
                .and_then(Player::from_cell);
            let (symbol, color) = match piece {
                Some(player) => (" ● ", player_color(player)),
                None => (" . ", Color::DarkGray),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for column in 1..=columns {
        if column == selected_column && !game_over {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter or 1-9: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
