use crate::error::{Result, StatusError};
use crate::manager::EmojiManager;
use crate::status::SetOptions;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Terminal,
};
use std::io::{self, stdin, stdout, BufRead, Write};

/// Ask for message, emoji and availability, filling in `opts`
pub fn prompt(em: &EmojiManager, opts: &mut SetOptions) -> Result<()> {
    let mut input = stdin().lock();
    let mut output = stdout();

    opts.message = ask_required(&mut input, &mut output, "Status")?;
    let choice = pick_emoji(em)?;
    opts.emoji = em.emojis()[choice].canonical().to_string();
    if let Some(row) = em.display_choices().get(choice) {
        println!("? Emoji: {}", row);
    }
    opts.limited = ask_confirm(&mut input, &mut output, "Indicate limited availability?")?;

    Ok(())
}

/// Read a non-empty line, asking again until one is given
pub fn ask_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    loop {
        write!(output, "? {}: ", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(StatusError::Cancelled);
        }

        let value = line.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }

        execute!(
            output,
            SetForegroundColor(TermColor::Red),
            Print("X Sorry, your reply was invalid: Value is required\n"),
            ResetColor
        )?;
    }
}

/// Yes/no question defaulting to no
pub fn ask_confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<bool> {
    loop {
        write!(output, "? {} (y/N) ", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(StatusError::Cancelled);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "no" => return Ok(false),
            "y" | "yes" => return Ok(true),
            _ => writeln!(output, "X Sorry, your reply was invalid: answer y or n")?,
        }
    }
}

/// Catalog positions whose aliases or description contain `filter`
pub fn filter_choices(em: &EmojiManager, filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    em.emojis()
        .iter()
        .enumerate()
        .filter(|(_, emoji)| {
            needle.is_empty()
                || emoji.aliases.iter().any(|alias| alias.contains(&needle))
                || emoji.description.to_lowercase().contains(&needle)
        })
        .map(|(position, _)| position)
        .collect()
}

/// Row to highlight for `filter`: the default emoji on the unfiltered list,
/// otherwise the first match.
fn selection_for(em: &EmojiManager, filter: &str) -> usize {
    if filter.is_empty() {
        em.default_index()
    } else {
        0
    }
}

/// Full-screen emoji picker; returns the chosen catalog position
pub fn pick_emoji(em: &EmojiManager) -> Result<usize> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(StatusError::from)
        .and_then(|mut terminal| run_picker(&mut terminal, em));

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    result
}

fn run_picker(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    em: &EmojiManager,
) -> Result<usize> {
    let mut filter = String::new();
    let mut visible = filter_choices(em, &filter);
    let mut state = ListState::default();
    state.select(Some(selection_for(em, &filter)));

    loop {
        terminal.draw(|f| {
            let size = f.size();

            let items: Vec<ListItem> = visible
                .iter()
                .map(|&position| {
                    let emoji = &em.emojis()[position];
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{} ", emoji.glyph)),
                        Span::styled(emoji.aliases.join(", "), Style::default().fg(Color::Red)),
                        Span::raw(" "),
                        Span::styled(emoji.description.clone(), Style::default().fg(Color::White)),
                    ]))
                })
                .collect();

            let title = if filter.is_empty() {
                " Emoji (type to filter, Enter to choose, Esc to cancel) ".to_string()
            } else {
                format!(" Emoji [{}] ", filter)
            };

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            f.render_stateful_widget(list, size, &mut state);
        })?;

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        let selected = state.selected().unwrap_or(0);
        match code {
            KeyCode::Up => state.select(Some(selected.saturating_sub(1))),
            KeyCode::Down => {
                if selected + 1 < visible.len() {
                    state.select(Some(selected + 1));
                }
            }
            KeyCode::PageUp => state.select(Some(selected.saturating_sub(10))),
            KeyCode::PageDown => {
                state.select(Some((selected + 10).min(visible.len().saturating_sub(1))))
            }
            KeyCode::Enter => {
                if let Some(&position) = visible.get(selected) {
                    return Ok(position);
                }
            }
            KeyCode::Esc => return Err(StatusError::Cancelled),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(StatusError::Cancelled)
            }
            KeyCode::Backspace => {
                filter.pop();
                visible = filter_choices(em, &filter);
                state.select(Some(selection_for(em, &filter)));
            }
            KeyCode::Char(c) => {
                filter.push(c);
                visible = filter_choices(em, &filter);
                state.select(Some(selection_for(em, &filter)));
            }
            _ => {}
        }
    }
}
