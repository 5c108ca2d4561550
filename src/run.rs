use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::Store;
use crate::ui::app::{App, FormField, InputMode};

pub(crate) fn as_tui(store: &Store) -> Result<()> {
    let mut app = App::new(store.load());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &Store,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::MonthSelect => handle_month_input(key, app),
                InputMode::Entry => handle_entry_input(key, app, store)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('a') => {
            app.reset_form();
            app.status_message.clear();
            app.input_mode = InputMode::Entry;
        }
        KeyCode::Char('m') => {
            app.month_cursor = app.month_index;
            app.input_mode = InputMode::MonthSelect;
        }
        KeyCode::Char('H') | KeyCode::Left => {
            if app.month_index + 1 < app.months.len() {
                app.select_month(app.month_index + 1);
            }
        }
        KeyCode::Char('L') | KeyCode::Right => {
            if app.month_index > 0 {
                app.select_month(app.month_index - 1);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
}

fn handle_month_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.month_cursor + 1 < app.months.len() {
                app.month_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.month_cursor = app.month_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.month_cursor = 0;
        }
        KeyCode::Char('G') => {
            app.month_cursor = app.months.len().saturating_sub(1);
        }
        KeyCode::Enter => {
            app.select_month(app.month_cursor);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        _ => {}
    }
}

fn handle_entry_input(key: event::KeyEvent, app: &mut App, store: &Store) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.reset_form();
            app.input_mode = InputMode::Normal;
            app.set_status("Cancelled");
        }
        KeyCode::Enter => {
            app.submit_expense(store)?;
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev_field(),
        KeyCode::Left if app.form_focus == FormField::Category => app.cycle_category(-1),
        KeyCode::Right if app.form_focus == FormField::Category => app.cycle_category(1),
        KeyCode::Backspace => match app.form_focus {
            FormField::Amount => {
                app.form_amount.pop();
            }
            FormField::Remark => {
                app.form_remark.pop();
            }
            FormField::Category => {}
        },
        KeyCode::Char(c) => match app.form_focus {
            FormField::Amount if c.is_ascii_digit() || c == '.' => {
                app.form_amount.push(c);
            }
            FormField::Remark => {
                app.form_remark.push(c);
            }
            _ => {}
        },
        _ => {}
    }
    Ok(())
}
