//! UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use crate::app::{App, Modal, StakeForm, StatusLine};
use wardstake_core::{StakeDetails, format_uward};

/// Render the application.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(0),    // Content
        Constraint::Length(4), // Footer
    ])
    .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_validator_panel(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);

    match &app.modal {
        Modal::None => {}
        Modal::Stake(form) => render_stake_modal(frame, app, form),
        Modal::SignTransaction => render_sign_modal(frame, app),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let pal = &app.palette;
    let mut spans = vec![
        Span::styled(" wardstake ", Style::default().fg(pal.primary).bold()),
        Span::styled("· Warden Protocol staking", Style::default().fg(pal.fg_dim)),
    ];
    if app.loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} loading", app.spinner_char()),
            Style::default().fg(pal.highlight),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border)),
    );
    frame.render_widget(header, area);
}

fn render_validator_panel(frame: &mut Frame, app: &App, area: Rect) {
    let pal = &app.palette;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.border))
        .title(" Validator ");

    let Some(snapshot) = &app.snapshot else {
        let waiting = Paragraph::new(Line::from(Span::styled(
            format!("{} fetching validator data...", app.spinner_char()),
            Style::default().fg(pal.fg_dim),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(waiting, area);
        return;
    };

    let validator = &snapshot.validator;
    let details = StakeDetails::new(
        validator,
        snapshot.bonded_tokens,
        snapshot.apr,
        app.rate_decimals,
    );
    let status_style = if validator.status.is_bonded() {
        Style::default().fg(pal.success)
    } else {
        Style::default().fg(pal.warning)
    };

    let rows = vec![
        detail_row("Name", details.validator.clone(), pal.fg),
        Row::new([
            Cell::from("Status"),
            Cell::from(validator.status.label()).style(status_style),
        ]),
        detail_row("Address", validator.operator_address.clone(), pal.fg_dim),
        detail_row("Bonded stake", format_uward(validator.tokens), pal.fg),
        detail_row("Commission", details.commission.clone(), pal.fg),
        detail_row("Voting power", details.voting_power.clone(), pal.fg),
        detail_row("Expected APR", details.expected_apr.clone(), pal.fg),
    ];

    let table = Table::new(
        rows,
        [Constraint::Length(14), Constraint::Percentage(100)],
    )
    .block(block);
    frame.render_widget(table, area);
}

fn detail_row(label: &str, value: String, value_color: ratatui::style::Color) -> Row<'static> {
    Row::new([
        Cell::from(label.to_string()),
        Cell::from(value).style(Style::default().fg(value_color)),
    ])
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let pal = &app.palette;
    let status = match &app.status {
        Some(StatusLine::Info(msg)) => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(pal.success),
        )),
        Some(StatusLine::Error(msg)) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(pal.error)))
        }
        None => Line::from(""),
    };
    let hints = Line::from(Span::styled(
        "s:Stake  r:Refresh  q:Quit",
        Style::default().fg(pal.muted),
    ));

    let footer = Paragraph::new(vec![status, hints]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border)),
    );
    frame.render_widget(footer, area);
}

fn render_stake_modal(frame: &mut Frame, app: &App, form: &StakeForm) {
    let pal = &app.palette;
    let Some(snapshot) = &app.snapshot else {
        return;
    };
    let validator = &snapshot.validator;
    let inactive = !validator.status.is_bonded();
    let details = StakeDetails::new(
        validator,
        snapshot.bonded_tokens,
        snapshot.apr,
        app.rate_decimals,
    );

    let area = frame.area();
    let banner_height: u16 = if inactive { 2 } else { 0 };
    let detail_count: u16 = if form.all_details { 5 } else { 2 };
    let width = 56.clamp(30, area.width.saturating_sub(2).max(30));
    let height = (8 + banner_height + detail_count).min(area.height.saturating_sub(2).max(10));
    let modal_area = centered_rect(width, height, area);

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.primary))
        .title(" Stake WARD ");
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut constraints = Vec::new();
    if inactive {
        constraints.push(Constraint::Length(2)); // Warning banner
    }
    constraints.extend([
        Constraint::Length(3),            // Amount input
        Constraint::Length(1),            // Details heading
        Constraint::Length(detail_count), // Detail rows
        Constraint::Min(0),
        Constraint::Length(1), // Key hints
    ]);
    let chunks = Layout::vertical(constraints).split(inner);
    let mut idx = 0;

    if inactive {
        let banner = Paragraph::new(Line::from(Span::styled(
            "⚠ Validator is inactive. Staking is not possible at this time",
            Style::default().fg(pal.warning).bold(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[idx]);
        idx += 1;
    }

    // Disabled form renders dimmed, mirroring its dead input handling.
    let form_fg = if inactive { pal.muted } else { pal.fg };

    let amount_line = if form.amount_input.is_empty() {
        Line::from(vec![
            Span::styled("0.0", Style::default().fg(pal.muted)),
            Span::styled(" WARD", Style::default().fg(pal.fg_dim)),
        ])
    } else {
        Line::from(vec![
            Span::styled(form.amount_input.clone(), Style::default().fg(form_fg)),
            Span::styled("█", Style::default().fg(pal.primary)),
            Span::styled(" WARD", Style::default().fg(pal.fg_dim)),
        ])
    };
    let amount = Paragraph::new(amount_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pal.border))
            .title(" Amount "),
    );
    frame.render_widget(amount, chunks[idx]);
    idx += 1;

    let heading = Line::from(vec![
        Span::styled("Details", Style::default().fg(form_fg).bold()),
        Span::styled(
            if form.all_details {
                "  Tab:Hide"
            } else {
                "  Tab:All"
            },
            Style::default().fg(pal.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), chunks[idx]);
    idx += 1;

    let mut rows = vec![
        detail_row("Validator", details.validator, form_fg),
        detail_row("Commission", details.commission, form_fg),
    ];
    if form.all_details {
        rows.push(detail_row("Voting power", details.voting_power, form_fg));
        rows.push(detail_row("Expected APR", details.expected_apr, form_fg));
        rows.push(detail_row(
            "Unbonding period",
            details.unbonding_period,
            form_fg,
        ));
    }
    let table = Table::new(
        rows,
        [Constraint::Length(18), Constraint::Percentage(100)],
    );
    frame.render_widget(table, chunks[idx]);
    idx += 2;

    let hints = if inactive {
        "Esc:Close"
    } else {
        "Enter:Stake  Tab:Details  Esc:Close"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(pal.muted),
        )))
        .alignment(Alignment::Center),
        chunks[idx],
    );
}

fn render_sign_modal(frame: &mut Frame, app: &App) {
    let pal = &app.palette;
    let area = frame.area();
    let modal_area = centered_rect(
        52.min(area.width.saturating_sub(2).max(30)),
        9.min(area.height.saturating_sub(2).max(7)),
        area,
    );

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.primary))
        .title(" Sign Transaction ");
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines = vec![
        Line::from(""),
        Line::from("Confirm the pending transaction in your signing tool."),
        Line::from(Span::styled(
            "Open the signer app if it did not open by itself.",
            Style::default().fg(pal.fg_dim),
        )),
        Line::from(""),
    ];
    if app.stake_in_flight {
        lines.push(Line::from(Span::styled(
            format!("{} waiting for broadcast...", app.spinner_char()),
            Style::default().fg(pal.highlight),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Esc:Dismiss",
        Style::default().fg(pal.muted),
    )));

    let panel = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(panel, inner);
}

/// Compute a centered rectangle of the given size inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
