//! Screen rendering.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table, TableState,
    Wrap,
};

use super::state::{Mode, TuiState, MENU_ITEMS};
use crate::catalog::{self, Tier};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = outer[0];
    let status_area = outer[1];

    match state.mode {
        Mode::Menu => draw_menu(f, main_area, state),
        Mode::Study => draw_study(f, main_area, state),
        Mode::Browse => draw_browse(f, main_area, state),
        Mode::Stats => draw_stats(f, main_area, state),
        Mode::ResetConfirm => {
            draw_menu(f, main_area, state);
            draw_reset_popup(f, main_area);
        }
    }

    draw_status_bar(f, status_area, state);
}

fn draw_menu(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .title(" ASN Memo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(MENU_ITEMS.len() as u16 + 1),
        ])
        .split(block.inner(area));

    f.render_widget(block, area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "ASN Memo",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Master Network AS Numbers",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, layout[0]);

    let items: Vec<ListItem> = MENU_ITEMS.iter().map(|item| ListItem::new(*item)).collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.menu_selected));
    f.render_stateful_widget(list, layout[1], &mut list_state);
}

fn draw_study(f: &mut Frame, area: Rect, state: &TuiState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let progress = if state.session_total > 0 {
        state.completed as f64 / state.session_total as f64
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .block(Block::default().title(" Study Session ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress.clamp(0.0, 1.0))
        .label(if state.session_finished() {
            format!("{} / {}", state.completed, state.session_total)
        } else {
            format!("Card {} of {}", state.completed + 1, state.session_total)
        });
    f.render_widget(gauge, layout[0]);

    let card_block = Block::default().borders(Borders::ALL);

    if state.session_finished() {
        let message = if state.session_total == 0 {
            vec![
                Line::default(),
                Line::from("Nothing to study right now."),
                Line::from("All caught up - come back when cards are due."),
            ]
        } else {
            vec![
                Line::default(),
                Line::from(Span::styled(
                    "Session Complete!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Cards reviewed: {}", state.completed)),
                Line::from("Great work! Keep practicing."),
            ]
        };
        let done = Paragraph::new(message)
            .block(card_block)
            .alignment(Alignment::Center);
        f.render_widget(done, layout[1]);
        return;
    }

    let network = state.current.expect("unfinished session has a card");
    let mut lines = vec![
        Line::from(Span::styled(
            format!("[{}]", network.tier.label()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            network.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(network.headquarters),
        Line::default(),
        Line::from(Span::styled(
            "What is the AS Number?",
            Style::default().fg(Color::Cyan),
        )),
    ];

    if state.revealed {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("AS{}", network.asn),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        if !network.specialization.is_empty() {
            lines.push(Line::from(network.specialization));
        }
        lines.push(Line::default());
        for fact in network.facts {
            lines.push(Line::from(format!("  - {fact}")));
        }
    }

    let card = Paragraph::new(lines)
        .block(card_block)
        .wrap(Wrap { trim: false });
    f.render_widget(card, layout[1]);
}

fn draw_browse(f: &mut Frame, area: Rect, state: &TuiState) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let tier_items: Vec<ListItem> = Tier::ALL
        .iter()
        .enumerate()
        .map(|(i, tier)| ListItem::new(format!("{} [{}]", tier.label(), i + 1)))
        .collect();
    let tier_list = List::new(tier_items)
        .block(Block::default().title(" Groups ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let tier_index = Tier::ALL
        .iter()
        .position(|t| *t == state.browse_tier)
        .unwrap_or(0);
    let mut tier_state = ListState::default();
    tier_state.select(Some(tier_index));
    f.render_stateful_widget(tier_list, panels[0], &mut tier_state);

    let rows: Vec<Row> = state
        .browse_networks()
        .iter()
        .map(|n| {
            Row::new(vec![
                format!("AS{}", n.asn),
                n.name.to_string(),
                if n.headquarters.is_empty() {
                    "-".to_string()
                } else {
                    n.headquarters.to_string()
                },
                if n.specialization.is_empty() {
                    "-".to_string()
                } else {
                    n.specialization.to_string()
                },
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ],
    )
    .header(
        Row::new(vec!["ASN", "Name", "Headquarters", "Specialization"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(format!(" {} Networks ", state.browse_tier.label()))
            .borders(Borders::ALL),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut table_state = TableState::default();
    table_state.select(Some(state.browse_row));
    f.render_stateful_widget(table, panels[1], &mut table_state);
}

fn draw_stats(f: &mut Frame, area: Rect, state: &TuiState) {
    let stats = state.app.statistics();
    let total_networks = catalog::NETWORKS.len();

    let lines = vec![
        Line::default(),
        Line::from(format!("Total Networks in Database: {total_networks}")),
        Line::from(format!(
            "Cards Studied: {} / {}",
            stats.total_studied, total_networks
        )),
        Line::from(format!("Due for Review: {}", stats.due_today)),
        Line::from(format!("Mastered (3+ correct reviews): {}", stats.mastered)),
        Line::from(format!("Still Learning: {}", stats.learning)),
        Line::from(format!("Average Ease Factor: {}", stats.average_ease)),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Learning Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(panel, area);
}

fn draw_reset_popup(f: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 7, area);
    f.render_widget(Clear, popup);

    let warning = Paragraph::new(vec![
        Line::default(),
        Line::from("This will delete ALL your learning progress."),
        Line::from("This action cannot be undone."),
        Line::default(),
        Line::from(Span::styled(
            "[y] Reset    [n] Cancel",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Reset Progress? ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(warning, popup);
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {msg}"))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.mode {
        Mode::Menu => " j/k: navigate  Enter: select  s/b/t: shortcuts  q: quit ",
        Mode::Study => {
            if state.session_finished() {
                " Enter/Esc: back to menu "
            } else if state.revealed {
                " 1: Again  2: Hard  3: Good  4: Easy  Esc: back "
            } else {
                " Space: reveal answer  Esc: back "
            }
        }
        Mode::Browse => " 1-6: group  j/k: scroll  Esc: back ",
        Mode::Stats => " Esc: back ",
        Mode::ResetConfirm => " y: confirm  n: cancel ",
    };

    let status =
        Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}

/// Fixed-size rect centered inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
