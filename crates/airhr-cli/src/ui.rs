use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Terminal;
use tracing::info;

use airhr_core::actions::{ClipboardOutcome, RuntimeAction, ShellAction, UserAction};
use airhr_core::reducer::{reduce, ShellEffect};
use airhr_core::state::{GateState, ShellState};
use airhr_core::store::StoreBridge;
use airhr_core::view::{
    project, ControlView, DisclaimerDialogView, LandingView, Screen, ShareDialogView, ShellView,
};
use airhr_platform::{
    columns_to_px, ClipboardCompletion, ClipboardError, ClipboardWrite, ClipboardWriter,
    ViewportHub,
};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::store::LocalAppStore;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run(config: &CliConfig, clipboard: &dyn ClipboardWriter) -> Result<(), CliError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // Ensures terminal is restored on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, config, clipboard)?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct UiPalette {
    accent: Color,
    warning: Color,
    muted: Color,
    border: Color,
    panel_bg: Color,
}

const PALETTE: UiPalette = UiPalette {
    accent: Color::Cyan,
    warning: Color::Yellow,
    muted: Color::DarkGray,
    border: Color::Gray,
    panel_bg: Color::Black,
};

/// Routes effects to the store bridge and the clipboard.
struct EffectRunner<'a> {
    bridge: &'a StoreBridge,
    clipboard: &'a dyn ClipboardWriter,
    clipboard_done: &'a mpsc::Sender<ClipboardCompletion>,
}

impl EffectRunner<'_> {
    /// Returns whether a redraw was requested.
    fn run(&self, effects: Vec<ShellEffect>) -> bool {
        let mut redraw = false;
        for effect in effects {
            match effect {
                ShellEffect::RequestFrame => redraw = true,
                ShellEffect::WriteClipboard { request_id, text } => {
                    self.clipboard.write(
                        ClipboardWrite { request_id, text },
                        self.clipboard_done.clone(),
                    );
                }
                ShellEffect::Dispatch(event) => {
                    self.bridge.dispatch(event);
                }
            }
        }
        redraw
    }
}

fn clipboard_outcome(result: Result<(), ClipboardError>) -> ClipboardOutcome {
    match result {
        Ok(()) => ClipboardOutcome::Written,
        Err(err) => ClipboardOutcome::Failed {
            reason: err.to_string().into(),
        },
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &CliConfig,
    clipboard: &dyn ClipboardWriter,
) -> io::Result<()> {
    let cell_width_px = config.shell.cell_width_px();
    let size = terminal.size()?;

    let mut store = LocalAppStore::new(&config.store, Instant::now());
    let (bridge, store_rx) = StoreBridge::channel();
    let (clipboard_tx, clipboard_rx) = mpsc::channel::<ClipboardCompletion>();
    let (viewport_tx, viewport_rx) = mpsc::channel::<u32>();
    let runner = EffectRunner {
        bridge: &bridge,
        clipboard,
        clipboard_done: &clipboard_tx,
    };

    let hub = ViewportHub::new(columns_to_px(size.width, cell_width_px));
    let mut state = ShellState::mount(
        config.shell.share_url.as_str(),
        hub.width_px(),
        store.snapshot().clone(),
    );
    let mut subscription = hub.subscribe(move |width_px| {
        let _ = viewport_tx.send(width_px);
    });
    info!(width_px = hub.width_px(), "shell mounted");

    let mut dirty = true;
    loop {
        let mut effects = Vec::new();

        while let Ok(width_px) = viewport_rx.try_recv() {
            effects.extend(reduce(
                &mut state,
                ShellAction::Runtime(RuntimeAction::ViewportResized { width_px }),
            ));
        }

        if let Some(snapshot) = store.poll(Instant::now()) {
            effects.extend(reduce(
                &mut state,
                ShellAction::Runtime(RuntimeAction::StoreUpdated(snapshot)),
            ));
        }

        while let Ok(event) = store_rx.try_recv() {
            let snapshot = store.apply(event);
            effects.extend(reduce(
                &mut state,
                ShellAction::Runtime(RuntimeAction::StoreUpdated(snapshot)),
            ));
        }

        while let Ok(completion) = clipboard_rx.try_recv() {
            effects.extend(reduce(
                &mut state,
                ShellAction::Runtime(RuntimeAction::ClipboardWriteFinished {
                    request_id: completion.request_id,
                    outcome: clipboard_outcome(completion.result),
                }),
            ));
        }

        dirty |= runner.run(effects);
        if dirty {
            terminal.draw(|f| ui(f, &state))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key, &mut state) {
                        KeyHandlerResult::Continue(effects) => dirty |= runner.run(effects),
                        KeyHandlerResult::Exit => break,
                    }
                }
                Event::Resize(columns, _) => {
                    hub.publish(columns_to_px(columns, cell_width_px));
                    // Height-only changes leave the labels alone but still need a repaint.
                    dirty = true;
                }
                _ => {}
            }
        }
    }

    subscription.unsubscribe();
    info!("shell closed");
    Ok(())
}

enum KeyHandlerResult {
    Continue(Vec<ShellEffect>),
    Exit,
}

fn user(state: &mut ShellState, action: UserAction) -> Vec<ShellEffect> {
    reduce(state, ShellAction::User(action))
}

fn handle_landing_keys(key: KeyEvent, state: &mut ShellState) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Enter | KeyCode::Char('l') => user(state, UserAction::Launch),
        KeyCode::Esc | KeyCode::Char('q') => return KeyHandlerResult::Exit,
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_disclaimer_keys(key: KeyEvent, state: &mut ShellState) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Enter | KeyCode::Esc => user(state, UserAction::DismissDisclaimer),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_share_keys(key: KeyEvent, state: &mut ShellState) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Char('c') | KeyCode::Char(' ') | KeyCode::Enter => {
            user(state, UserAction::CopyShareUrl)
        }
        KeyCode::Esc | KeyCode::Char('q') => user(state, UserAction::DismissShare),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_shell_keys(key: KeyEvent, state: &mut ShellState) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Char('h') => user(state, UserAction::ToggleChatHistory),
        KeyCode::Char('s') => user(state, UserAction::OpenShare),
        KeyCode::Char('d') => user(state, UserAction::OpenDisclaimer),
        KeyCode::Char('q') => return KeyHandlerResult::Exit,
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_key_event(key: KeyEvent, state: &mut ShellState) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }

    // The disclaimer is drawn above the share panel, so it takes keys first.
    if state.gate == GateState::Landing {
        handle_landing_keys(key, state)
    } else if state.overlays.disclaimer.is_open() {
        handle_disclaimer_keys(key, state)
    } else if state.overlays.share.is_open() {
        handle_share_keys(key, state)
    } else {
        handle_shell_keys(key, state)
    }
}

fn ui(f: &mut ratatui::Frame, state: &ShellState) {
    let area = f.area();
    match project(state) {
        Screen::Landing(view) => render_landing(f, area, &view),
        Screen::Shell(view) => render_shell(f, area, &view),
    }
}

fn render_landing(f: &mut ratatui::Frame, area: Rect, view: &LandingView) {
    let area = centered_rect(80, 90, area);
    let mut lines = vec![
        Line::from(Span::styled(
            view.product_name,
            Style::default()
                .fg(PALETTE.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(view.description),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(PALETTE.accent)),
            Span::styled(
                view.launch_label,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            view.collaboration_title,
            Style::default().fg(PALETTE.muted),
        )),
    ];
    for partner in view.partners {
        lines.push(Line::from(vec![
            Span::styled(partner.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", partner.url),
                Style::default().fg(PALETTE.muted),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        view.contact,
        Style::default().fg(PALETTE.muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PALETTE.border));
    let p = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn control_spans(key: char, control: ControlView) -> Vec<Span<'static>> {
    let label = match control.label {
        Some(label) => format!(" {label}  "),
        None => "  ".to_string(),
    };
    vec![
        Span::styled(format!("[{key}]"), Style::default().fg(PALETTE.accent)),
        Span::raw(label),
    ]
}

fn render_shell(f: &mut ratatui::Frame, area: Rect, view: &ShellView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], view);
    render_content(f, chunks[1], view);
    render_footer(f, chunks[2], view);

    // Overlays
    if let Some(dialog) = &view.share_dialog {
        render_share_dialog(f, area, dialog);
    }
    if let Some(dialog) = &view.disclaimer_dialog {
        render_disclaimer_dialog(f, area, dialog);
    }
}

fn render_header(f: &mut ratatui::Frame, area: Rect, view: &ShellView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PALETTE.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let mut brand = Vec::new();
    if let Some(logo) = &view.header.logo {
        brand.push(Span::styled(
            format!("[{logo}] "),
            Style::default().fg(PALETTE.muted),
        ));
    }
    brand.push(Span::styled(
        view.header.title.to_string(),
        Style::default()
            .fg(PALETTE.accent)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(Line::from(brand)), halves[0]);

    let mut controls = Vec::new();
    if let Some(history) = view.header.history {
        controls.extend(control_spans('h', history));
    }
    if let Some(share) = view.header.share {
        controls.extend(control_spans('s', share));
    }
    f.render_widget(
        Paragraph::new(Line::from(controls)).alignment(Alignment::Right),
        halves[1],
    );
}

fn render_content(f: &mut ratatui::Frame, area: Rect, view: &ShellView) {
    let conversation_area = if view.content.chat_history_open {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Percentage(30)])
            .split(area);
        let history = Paragraph::new(Span::styled(
            "No saved conversations",
            Style::default().fg(PALETTE.muted),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Chat history")
                .border_style(Style::default().fg(PALETTE.border)),
        );
        f.render_widget(history, split[1]);
        split[0]
    } else {
        area
    };

    let conversation = Paragraph::new(vec![
        Line::from(Span::styled(
            "Ask a question about federal HR regulations.",
            Style::default().fg(PALETTE.muted),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Conversation")
            .border_style(Style::default().fg(PALETTE.border)),
    );
    f.render_widget(conversation, conversation_area);
}

fn render_footer(f: &mut ratatui::Frame, area: Rect, view: &ShellView) {
    let mut spans = vec![
        Span::styled("[d] ", Style::default().fg(PALETTE.accent)),
        Span::raw(view.footer.disclaimer_label),
        Span::styled(
            format!("  {}", view.footer.version),
            Style::default().fg(PALETTE.muted),
        ),
        Span::styled("  [q] quit", Style::default().fg(PALETTE.muted)),
    ];
    if let Some(notice) = &view.notice {
        spans.push(Span::styled(
            format!("  ! {notice}"),
            Style::default().fg(PALETTE.warning),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_share_dialog(f: &mut ratatui::Frame, area: Rect, dialog: &ShareDialogView) {
    let area = centered_rect(60, 30, area);
    f.render_widget(Clear, area);
    let block = Block::default()
        .title(dialog.title)
        .borders(Borders::ALL)
        .style(Style::default().bg(PALETTE.panel_bg).fg(Color::White))
        .border_style(Style::default().fg(PALETTE.accent));
    let lines = vec![
        Line::from(Span::styled(
            dialog.url.to_string(),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c] ", Style::default().fg(PALETTE.accent)),
            Span::raw(dialog.copy_label),
        ]),
        Line::from(Span::styled(
            "[Esc] close",
            Style::default().fg(PALETTE.muted),
        )),
    ];
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn render_disclaimer_dialog(f: &mut ratatui::Frame, area: Rect, dialog: &DisclaimerDialogView) {
    let area = centered_rect(80, 80, area);
    f.render_widget(Clear, area);
    let block = Block::default()
        .title(dialog.title)
        .borders(Borders::ALL)
        .style(Style::default().bg(PALETTE.panel_bg).fg(Color::White))
        .border_style(Style::default().fg(PALETTE.warning));

    let mut lines = Vec::new();
    for section in dialog.sections {
        if let Some(heading) = section.heading {
            lines.push(Line::from(Span::styled(
                heading,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        for paragraph in section.paragraphs {
            lines.push(Line::from(*paragraph));
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(PALETTE.accent)),
        Span::styled(
            dialog.confirm_label,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
