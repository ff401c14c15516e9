use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};
use tracing::debug;

use crate::{
    catalog::{MediaItem, SearchResults},
    event::events::Event,
    ui::{
        components::{
            media_card::{card_list_item, open_action, play_action},
            song_row::{SongRow, play_or_pause},
            spinner::Spinner,
            text_input::{InputOutcome, TextInput},
        },
        context::AppContext,
        state::{AppState, Route},
        traits::{Action, View},
        util::step_selection,
    },
    util::{colors, task::TaskManager},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchTab {
    Songs,
    Albums,
    Artists,
    Playlists,
}

impl SearchTab {
    const ALL: [SearchTab; 4] = [
        SearchTab::Songs,
        SearchTab::Albums,
        SearchTab::Artists,
        SearchTab::Playlists,
    ];

    fn as_str(&self) -> &str {
        match self {
            SearchTab::Songs => "Songs",
            SearchTab::Albums => "Albums",
            SearchTab::Artists => "Artists",
            SearchTab::Playlists => "Playlists",
        }
    }

    fn empty_message(&self) -> &str {
        match self {
            SearchTab::Songs => "No songs found matching your query.",
            SearchTab::Albums => "No albums found matching your query.",
            SearchTab::Artists => "No artists found matching your query.",
            SearchTab::Playlists => "No playlists found matching your query.",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub fn heading(query: Option<&str>) -> String {
    match query {
        Some(q) => format!("Results for \"{}\"", q),
        None => "Search for your favorite music".to_string(),
    }
}

pub struct Search {
    query: Option<String>,
    input: TextInput,
    active_tab: SearchTab,
    list_state: ListState,
    results: Option<SearchResults>,
    tasks: TaskManager,
}

impl Search {
    pub fn new(query: Option<String>) -> Self {
        let mut input = TextInput::new("Search songs, artists, albums...")
            .with_value(query.clone().unwrap_or_default());
        if query.is_none() {
            input.start_editing();
        }
        Self {
            query,
            input,
            active_tab: SearchTab::Songs,
            list_state: ListState::default(),
            results: None,
            tasks: TaskManager::new(),
        }
    }

    fn cards(&self) -> &[MediaItem] {
        let Some(results) = &self.results else {
            return &[];
        };
        match self.active_tab {
            SearchTab::Songs => &[],
            SearchTab::Albums => &results.albums,
            SearchTab::Artists => &results.artists,
            SearchTab::Playlists => &results.playlists,
        }
    }

    fn tab_len(&self) -> usize {
        match (self.active_tab, &self.results) {
            (_, None) => 0,
            (SearchTab::Songs, Some(results)) => results.songs.len(),
            _ => self.cards().len(),
        }
    }

    fn select_tab(&mut self, tab: SearchTab) {
        self.active_tab = tab;
        let len = self.tab_len();
        self.list_state.select((len > 0).then_some(0));
    }

    fn selected_card(&self) -> Option<&MediaItem> {
        self.list_state.selected().and_then(|i| self.cards().get(i))
    }

    fn on_selected_song(&self, ctx: &AppContext) -> Option<Action> {
        let results = self.results.as_ref()?;
        let song = results.songs.get(self.list_state.selected()?)?;
        Some(play_or_pause(song, &ctx.playback.snapshot(), None))
    }
}

#[async_trait]
impl View for Search {
    async fn on_mount(&mut self, ctx: &AppContext) {
        let catalog = ctx.catalog.clone();
        let tx = ctx.event_tx.clone();
        let query = self.query.clone().unwrap_or_default();
        self.tasks.spawn(
            "search",
            tokio::spawn(async move {
                match catalog.search(&query).await {
                    Ok(results) => {
                        let _ = tx.send(Event::SearchResults(results));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(e.to_string()));
                    }
                }
            }),
        );
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        self.input.render(f, chunks[0], "Search");

        f.render_widget(
            Paragraph::new(Span::styled(
                heading(self.query.as_deref()),
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[1],
        );

        let titles = SearchTab::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>();
        let tabs_widget = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(self.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs_widget, chunks[2]);

        let results_area = chunks[3];
        let Some(results) = &self.results else {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Searching...");
            f.render_widget(spinner, results_area);
            return;
        };

        if self.tab_len() == 0 {
            f.render_widget(
                Paragraph::new(self.active_tab.empty_message())
                    .style(Style::default().fg(colors::NEUTRAL)),
                results_area,
            );
            return;
        }

        let width = results_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = match self.active_tab {
            SearchTab::Songs => {
                let session = ctx.playback.snapshot();
                results
                    .songs
                    .iter()
                    .enumerate()
                    .map(|(i, song)| SongRow::new(song, i + 1).to_list_item(&session, width))
                    .collect()
            }
            _ => self
                .cards()
                .iter()
                .map(|item| card_list_item(item, width))
                .collect(),
        };

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, results_area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.input.is_editing() {
            return match self.input.handle_key(key) {
                InputOutcome::Submitted(query) => {
                    let query = (!query.is_empty()).then_some(query);
                    if query == self.query {
                        return Some(Action::None);
                    }
                    Some(Action::Navigate(Route::Search { query }))
                }
                _ => Some(Action::None),
            };
        }

        let fallback = &ctx.config.browse_card;
        match key.code {
            KeyCode::Char('/') => {
                self.input.start_editing();
                Some(Action::None)
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_tab(self.active_tab.prev());
                Some(Action::None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_tab(self.active_tab.next());
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.tab_len();
                step_selection(&mut self.list_state, len, true);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.tab_len();
                step_selection(&mut self.list_state, len, false);
                Some(Action::None)
            }
            KeyCode::Enter => match self.active_tab {
                SearchTab::Songs => self.on_selected_song(ctx).or(Some(Action::None)),
                _ => self
                    .selected_card()
                    .and_then(|card| open_action(card, fallback))
                    .or(Some(Action::None)),
            },
            KeyCode::Char('p') if self.active_tab != SearchTab::Songs => self
                .selected_card()
                .and_then(|card| play_action(card, fallback))
                .or(Some(Action::None)),
            KeyCode::Char('f') if self.active_tab == SearchTab::Songs => {
                let id = self
                    .results
                    .as_ref()
                    .zip(self.list_state.selected())
                    .and_then(|(results, i)| results.songs.get(i))
                    .map(|song| song.id.clone())?;
                Some(Action::ToggleLike(id))
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::SearchResults(results) = event {
            let expected = self.query.as_deref().unwrap_or_default().trim();
            if results.query != expected {
                debug!(got = results.query.as_str(), expected, "stale search results");
                return;
            }
            self.results = Some(results.clone());
            self.select_tab(self.active_tab);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_reflects_query() {
        assert_eq!(heading(Some("neon")), "Results for \"neon\"");
        assert_eq!(heading(None), "Search for your favorite music");
    }

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(SearchTab::Playlists.next(), SearchTab::Songs);
        assert_eq!(SearchTab::Songs.prev(), SearchTab::Playlists);
    }
}
