use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::models::OTHER_CATEGORY;
use crate::report::HIGHLIGHT_COUNT;

use super::app::{App, FormField, InputMode};
use super::theme;
use super::util::{format_amount, humanize, truncate};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Min(5),    // Table + highlights
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_content(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_message_bar(f, chunks[3], app);

    match app.input_mode {
        InputMode::Entry => render_entry_form(f, f.area(), app),
        InputMode::MonthSelect => render_month_popup(f, f.area(), app),
        InputMode::Normal => {}
    }

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        " SpendTab ",
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    let month = Span::styled(
        format!(" {} ", app.active_month().label),
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    );
    let bar = Paragraph::new(Line::from(vec![title, month]))
        .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);

    render_table(f, columns[0], app);
    render_highlights(f, columns[1], app);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(
            format!(" Expenses for {} ", app.active_month().label),
            theme::title_style(),
        ));

    if app.summary.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses recorded for this month",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("Press a to add one", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for row in &app.summary.rows {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<20}", humanize(&row.name)), theme::normal_style()),
            Span::styled(format!("{:>10}", format_amount(row.total)), theme::normal_style()),
        ]));
        if row.name == OTHER_CATEGORY {
            for entry in &app.summary.other_entries {
                lines.push(Line::from(Span::styled(
                    format!(
                        "   - {}: {}",
                        truncate(&entry.remark, 18),
                        format_amount(entry.amount)
                    ),
                    theme::dim_style(),
                )));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!(" {:<20}", "Total"), theme::total_style()),
        Span::styled(
            format!("{:>10}", format_amount(app.summary.grand_total)),
            theme::total_style(),
        ),
    ]));

    let table = Paragraph::new(lines).block(block);
    f.render_widget(table, area);
}

fn render_highlights(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" High Spending ", theme::title_style()));

    // Content only when the month has spending at all.
    if app.summary.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let items: Vec<ListItem> = app
        .summary
        .top(HIGHLIGHT_COUNT)
        .iter()
        .map(|row| {
            ListItem::new(Line::from(Span::styled(
                format!(
                    " {}: {} (High!)",
                    humanize(&row.name),
                    format_amount(row.total)
                ),
                theme::highlight_style(),
            )))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Entry => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
        InputMode::MonthSelect => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} | total {}",
        app.active_month().key,
        format_amount(app.summary.grand_total)
    );

    let right = match app.input_mode {
        InputMode::Normal => " a add | m months | H/L month | ? help ",
        InputMode::Entry => " Tab field | Left/Right category | Enter save ",
        InputMode::MonthSelect => " j/k move | Enter select | Esc cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.status_message.is_empty() {
        Line::from(Span::styled(
            " Press a to add an expense, m to pick a month, ? for help",
            theme::dim_style(),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            theme::message_bar_style(),
        ))
    };
    let bar = Paragraph::new(content).style(Style::default().bg(theme::MESSAGE_BG));
    f.render_widget(bar, area);
}

// ── Popups ───────────────────────────────────────────────────

fn render_entry_form(f: &mut Frame, area: Rect, app: &App) {
    let height = if app.remark_required() { 8 } else { 7 };
    let popup = centered(area, 44, height);

    let field_style = |field: FormField| {
        if app.form_focus == field {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        }
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {:<9} ", "Category"), field_style(FormField::Category)),
            Span::styled(
                format!("< {} >", humanize(app.selected_category())),
                if app.form_focus == FormField::Category {
                    theme::selected_style()
                } else {
                    theme::normal_style()
                },
            ),
        ]),
        Line::from(vec![
            Span::styled(format!(" {:<9} ", "Amount"), field_style(FormField::Amount)),
            Span::styled(app.form_amount.as_str(), theme::normal_style()),
        ]),
    ];
    if app.remark_required() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<9} ", "Remark"), field_style(FormField::Remark)),
            Span::styled(app.form_remark.as_str(), theme::normal_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter save | Esc cancel",
        theme::dim_style(),
    )));

    f.render_widget(Clear, popup);
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG))
            .title(Span::styled(" Add Expense ", theme::title_style())),
    );
    f.render_widget(form, popup);

    // Text cursor inside the focused text field.
    let cursor = match app.form_focus {
        FormField::Amount => Some((app.form_amount.chars().count(), 3)),
        FormField::Remark => Some((app.form_remark.chars().count(), 4)),
        FormField::Category => None,
    };
    if let Some((len, row)) = cursor {
        f.set_cursor_position((popup.x + 12 + len as u16, popup.y + row));
    }
}

fn render_month_popup(f: &mut Frame, area: Rect, app: &App) {
    let height = (app.months.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup = centered(area, 30, height);

    let items: Vec<ListItem> = app
        .months
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let marker = if i == app.month_index { "*" } else { " " };
            let style = if i == app.month_cursor {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {marker} {}", month.label),
                style,
            )))
        })
        .collect();

    f.render_widget(Clear, popup);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG))
            .title(Span::styled(" Select Month ", theme::title_style())),
    );
    f.render_widget(list, popup);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " SpendTab Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  a                Add an expense",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  m                Pick a month (last 12)",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  H/L or arrows    Previous/next month",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  q or Ctrl-C      Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  In the form: Tab moves fields, Left/Right",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  pick the category, Enter saves, Esc cancels.",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup = centered(area, 52, popup_height);

    f.render_widget(Clear, popup);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
