use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    catalog::{HomeFeed, MediaItem},
    event::events::Event,
    ui::{
        components::{
            media_card::{CAROUSEL_HEIGHT, Carousel, open_action, play_action},
            spinner::Spinner,
            text_input::{InputOutcome, TextInput},
        },
        context::AppContext,
        state::{AppState, Route},
        traits::{Action, View},
    },
    util::{colors, task::TaskManager},
};

const GENRE_COLUMNS: usize = 4;
const GENRE_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    NewReleases,
    Popular,
    Genres,
}

impl Section {
    fn next(&self) -> Self {
        match self {
            Section::NewReleases => Section::Popular,
            Section::Popular => Section::Genres,
            Section::Genres => Section::Genres,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Section::NewReleases => Section::NewReleases,
            Section::Popular => Section::NewReleases,
            Section::Genres => Section::Popular,
        }
    }
}

pub struct Home {
    feed: Option<HomeFeed>,
    search: TextInput,
    section: Section,
    new_release_index: usize,
    popular_index: usize,
    genre_index: usize,
    tasks: TaskManager,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            feed: None,
            search: TextInput::new("Search songs, artists, albums..."),
            section: Section::NewReleases,
            new_release_index: 0,
            popular_index: 0,
            genre_index: 0,
            tasks: TaskManager::new(),
        }
    }
}

impl Home {
    fn len(&self, section: Section) -> usize {
        self.feed.as_ref().map_or(0, |feed| match section {
            Section::NewReleases => feed.new_releases.len(),
            Section::Popular => feed.popular_playlists.len(),
            Section::Genres => feed.genres.len(),
        })
    }

    fn index_mut(&mut self) -> &mut usize {
        match self.section {
            Section::NewReleases => &mut self.new_release_index,
            Section::Popular => &mut self.popular_index,
            Section::Genres => &mut self.genre_index,
        }
    }

    fn step(&mut self, delta: isize) {
        let len = self.len(self.section);
        if len == 0 {
            return;
        }
        let index = self.index_mut();
        *index = (*index as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn selected_card(&self) -> Option<&MediaItem> {
        let feed = self.feed.as_ref()?;
        match self.section {
            Section::NewReleases => feed.new_releases.get(self.new_release_index),
            Section::Popular => feed.popular_playlists.get(self.popular_index),
            Section::Genres => None,
        }
    }

    fn selected_genre(&self) -> Option<&str> {
        let feed = self.feed.as_ref()?;
        match self.section {
            Section::Genres => feed.genres.get(self.genre_index).map(String::as_str),
            _ => None,
        }
    }

    fn render_genres(&self, f: &mut Frame, area: Rect, genres: &[String]) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors::MUTED))
            .title(Span::styled(
                " Browse All ",
                if self.section == Section::Genres {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                },
            ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = genres.len().div_ceil(GENRE_COLUMNS);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(GENRE_HEIGHT); rows])
            .split(inner);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GENRE_COLUMNS as u32); GENRE_COLUMNS])
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let i = row * GENRE_COLUMNS + col;
                let Some(genre) = genres.get(i) else {
                    break;
                };
                let selected = self.section == Section::Genres && i == self.genre_index;
                let style = if selected {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default().fg(colors::MUTED)
                };
                let tile = Paragraph::new(genre.clone())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(colors::TEXT))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_set(border::ROUNDED)
                            .border_style(style),
                    );
                f.render_widget(tile, *cell);
            }
        }
    }
}

#[async_trait]
impl View for Home {
    async fn on_mount(&mut self, ctx: &AppContext) {
        let catalog = ctx.catalog.clone();
        let tx = ctx.event_tx.clone();
        self.tasks.spawn(
            "home_feed",
            tokio::spawn(async move {
                match catalog.home_feed().await {
                    Ok(feed) => {
                        let _ = tx.send(Event::HomeFeedFetched(feed));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(e.to_string()));
                    }
                }
            }),
        );
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(CAROUSEL_HEIGHT),
                Constraint::Length(CAROUSEL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        self.search.render(f, chunks[0], "Search");

        let Some(feed) = self.feed.as_ref() else {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading...");
            f.render_widget(spinner, chunks[1]);
            return;
        };

        let editing = self.search.is_editing();
        let focus = |section: Section, index: usize| {
            (!editing && self.section == section).then_some(index)
        };

        f.render_widget(
            Carousel::new("New Releases", &feed.new_releases)
                .selected(focus(Section::NewReleases, self.new_release_index)),
            chunks[1],
        );
        f.render_widget(
            Carousel::new("Popular Playlists", &feed.popular_playlists)
                .selected(focus(Section::Popular, self.popular_index)),
            chunks[2],
        );
        self.render_genres(f, chunks[3], &feed.genres);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.search.is_editing() {
            return match self.search.handle_key(key) {
                InputOutcome::Submitted(query) if !query.is_empty() => {
                    Some(Action::Navigate(Route::Search { query: Some(query) }))
                }
                _ => Some(Action::None),
            };
        }

        let fallback = &ctx.config.home_card;
        match key.code {
            KeyCode::Char('/') => {
                self.search.start_editing();
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.section = self.section.next();
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.section = self.section.prev();
                Some(Action::None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.step(1);
                Some(Action::None)
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.step(-1);
                Some(Action::None)
            }
            KeyCode::Enter => {
                if let Some(genre) = self.selected_genre() {
                    return Some(Action::Navigate(Route::Search {
                        query: Some(genre.to_string()),
                    }));
                }
                self.selected_card()
                    .and_then(|card| open_action(card, fallback))
                    .or(Some(Action::None))
            }
            KeyCode::Char('p') => self
                .selected_card()
                .and_then(|card| play_action(card, fallback))
                .or(Some(Action::None)),
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::HomeFeedFetched(feed) = event {
            self.feed = Some(feed.clone());
        }
    }
}
