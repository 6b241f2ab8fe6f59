use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use trialsite_content::{
    CaseStudy, FilterCriteria, Region, TherapeuticArea, WhitePaper,
    catalog::{CASE_STUDIES, WHITE_PAPERS},
    filter_records,
};

use crate::text::styled_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    CaseStudies,
    WhitePapers,
}

impl Tab {
    fn toggle(self) -> Self {
        match self {
            Tab::CaseStudies => Tab::WhitePapers,
            Tab::WhitePapers => Tab::CaseStudies,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Tab::CaseStudies => "Case Studies",
            Tab::WhitePapers => "White Papers",
        }
    }
}

struct App {
    tab: Tab,
    criteria: FilterCriteria,
    list_state: ListState,
    should_quit: bool,
}

impl App {
    fn new(criteria: FilterCriteria) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            tab: Tab::CaseStudies,
            criteria,
            list_state,
            should_quit: false,
        }
    }

    fn case_studies(&self) -> Vec<&'static CaseStudy> {
        filter_records(CASE_STUDIES, &self.criteria)
    }

    fn white_papers(&self) -> Vec<&'static WhitePaper> {
        filter_records(WHITE_PAPERS, &self.criteria)
    }

    fn visible_len(&self) -> usize {
        match self.tab {
            Tab::CaseStudies => self.case_studies().len(),
            Tab::WhitePapers => self.white_papers().len(),
        }
    }

    fn update_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.list_state.select(Some(0));
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().unwrap_or(0).min(len - 1);
        let next = if forward {
            (i + 1) % len
        } else if i == 0 {
            len - 1
        } else {
            i - 1
        };
        self.list_state.select(Some(next));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Down => self.move_selection(true),
            KeyCode::Up => self.move_selection(false),
            KeyCode::Tab => {
                let area = self.criteria.area.cycle(&TherapeuticArea::ALL);
                self.update_criteria(self.criteria.clone().with_area(area));
            }
            KeyCode::BackTab => {
                let region = self.criteria.region.cycle(&Region::ALL);
                self.update_criteria(self.criteria.clone().with_region(region));
            }
            KeyCode::F(2) => {
                self.tab = self.tab.toggle();
                self.list_state.select(Some(0));
            }
            KeyCode::Backspace => {
                let mut term = self.criteria.search_term.clone();
                term.pop();
                self.update_criteria(self.criteria.clone().with_search_term(term));
            }
            KeyCode::Char(c) => {
                let term = format!("{}{c}", self.criteria.search_term);
                self.update_criteria(self.criteria.clone().with_search_term(term));
            }
            _ => {}
        }
    }
}

pub fn run(criteria: FilterCriteria) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(criteria);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Filter bar
    let filters = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}▏  ", app.criteria.search_term)),
        Span::styled("Area: ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}  ", app.criteria.area.label())),
        Span::styled("Region: ", Style::default().fg(Color::Yellow)),
        Span::raw(app.criteria.region.label()),
    ]);
    let filter_bar = Paragraph::new(filters)
        .block(Block::default().borders(Borders::ALL).title(app.tab.title()));
    f.render_widget(filter_bar, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let (titles, detail): (Vec<String>, Vec<Line<'static>>) = match app.tab {
        Tab::CaseStudies => {
            let found = app.case_studies();
            let titles = found.iter().map(|c| c.title.to_string()).collect();
            let detail = selected(&found, &app.list_state)
                .map(case_study_detail)
                .unwrap_or_default();
            (titles, detail)
        }
        Tab::WhitePapers => {
            let found = app.white_papers();
            let titles = found.iter().map(|w| w.title.to_string()).collect();
            let detail = selected(&found, &app.list_state)
                .map(white_paper_detail)
                .unwrap_or_default();
            (titles, detail)
        }
    };

    let count = titles.len();
    let items: Vec<ListItem> = titles.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{count} matches")),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, columns[0], &mut app.list_state);

    let detail = if detail.is_empty() {
        vec![Line::from("No records match the current filters")]
    } else {
        detail
    };
    let detail = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, columns[1]);

    let help = Line::from(vec![
        Span::raw("type: search | "),
        Span::raw("Tab: area | "),
        Span::raw("Shift-Tab: region | "),
        Span::raw("F2: switch list | "),
        Span::raw("↑/↓: select | Esc: quit"),
    ]);
    f.render_widget(Paragraph::new(help), rows[2]);
}

fn selected<'a, T>(found: &[&'a T], state: &ListState) -> Option<&'a T> {
    let i = state.selected()?;
    found.get(i).or(found.last()).copied()
}

fn case_study_detail(case: &CaseStudy) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(case.title, bold.fg(Color::Cyan))),
        Line::from(format!("{} · {}", case.area, case.region)),
        Line::default(),
        Line::from(vec![
            Span::styled("Outcome: ", bold),
            Span::raw(case.outcome),
        ]),
        Line::from(vec![
            Span::styled("Patients enrolled: ", bold),
            Span::raw(case.patients_enrolled.to_string()),
        ]),
        Line::default(),
        Line::from(case.description),
    ]
}

fn white_paper_detail(paper: &WhitePaper) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} · {} · {} min read",
                paper.area, paper.published_year, paper.reading_minutes
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    lines.extend(styled_lines(&paper.render()));
    lines
}
