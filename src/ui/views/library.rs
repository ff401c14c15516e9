use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

use crate::{
    catalog::{Library as LibraryData, MediaItem},
    event::events::Event,
    ui::{
        components::{
            media_card::{card_list_item, open_action, play_action},
            song_row::{SongRow, play_or_pause},
            spinner::Spinner,
        },
        context::AppContext,
        state::{AppState, LibraryTab},
        traits::{Action, View},
        util::step_selection,
    },
    util::{colors, task::TaskManager},
};

fn empty_message(tab: LibraryTab) -> &'static str {
    match tab {
        LibraryTab::Playlists => "You have no saved playlists.",
        LibraryTab::Liked => "Songs you like will appear here.",
        LibraryTab::Albums => "You have no saved albums.",
        LibraryTab::Artists => "You don't follow any artists yet.",
    }
}

pub struct Library {
    tab: LibraryTab,
    data: Option<LibraryData>,
    list_state: ListState,
    tasks: TaskManager,
}

impl Library {
    pub fn new(tab: LibraryTab) -> Self {
        Self {
            tab,
            data: None,
            list_state: ListState::default(),
            tasks: TaskManager::new(),
        }
    }

    fn cards(&self) -> &[MediaItem] {
        let Some(data) = &self.data else {
            return &[];
        };
        match self.tab {
            LibraryTab::Playlists => &data.playlists,
            LibraryTab::Albums => &data.albums,
            LibraryTab::Artists => &data.artists,
            LibraryTab::Liked => &[],
        }
    }

    fn tab_len(&self) -> usize {
        match (self.tab, &self.data) {
            (_, None) => 0,
            (LibraryTab::Liked, Some(data)) => data.liked_songs.len(),
            _ => self.cards().len(),
        }
    }

    fn select_tab(&mut self, tab: LibraryTab) {
        self.tab = tab;
        let len = self.tab_len();
        self.list_state.select((len > 0).then_some(0));
    }

    fn selected_card(&self) -> Option<&MediaItem> {
        self.list_state.selected().and_then(|i| self.cards().get(i))
    }

    fn selected_song_id(&self) -> Option<String> {
        let data = self.data.as_ref()?;
        let i = self.list_state.selected()?;
        data.liked_songs.get(i).map(|song| song.id.clone())
    }
}

#[async_trait]
impl View for Library {
    async fn on_mount(&mut self, ctx: &AppContext) {
        let catalog = ctx.catalog.clone();
        let tx = ctx.event_tx.clone();
        self.tasks.spawn(
            "library",
            tokio::spawn(async move {
                match catalog.library().await {
                    Ok(library) => {
                        let _ = tx.send(Event::LibraryFetched(library));
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
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::styled(
                "Your Library",
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[0],
        );

        let titles = LibraryTab::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>();
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, chunks[1]);

        let Some(data) = &self.data else {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading...");
            f.render_widget(spinner, chunks[2]);
            return;
        };

        if self.tab_len() == 0 {
            f.render_widget(
                Paragraph::new(empty_message(self.tab)).style(Style::default().fg(colors::NEUTRAL)),
                chunks[2],
            );
            return;
        }

        let width = chunks[2].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = if self.tab == LibraryTab::Liked {
            let session = ctx.playback.snapshot();
            data.liked_songs
                .iter()
                .enumerate()
                .map(|(i, song)| SongRow::new(song, i + 1).to_list_item(&session, width))
                .collect()
        } else {
            self.cards()
                .iter()
                .map(|item| card_list_item(item, width))
                .collect()
        };

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let fallback = &ctx.config.browse_card;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_tab(self.tab.prev());
                Some(Action::None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_tab(self.tab.next());
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
            KeyCode::Enter if self.tab == LibraryTab::Liked => {
                let data = self.data.as_ref()?;
                let song = data.liked_songs.get(self.list_state.selected()?)?;
                Some(play_or_pause(song, &ctx.playback.snapshot(), None))
            }
            KeyCode::Enter => self
                .selected_card()
                .and_then(|card| open_action(card, fallback))
                .or(Some(Action::None)),
            KeyCode::Char('p') if self.tab != LibraryTab::Liked => self
                .selected_card()
                .and_then(|card| play_action(card, fallback))
                .or(Some(Action::None)),
            KeyCode::Char('f') if self.tab == LibraryTab::Liked => {
                self.selected_song_id().map(Action::ToggleLike)
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        if let Event::LibraryFetched(data) = event {
            self.data = Some(data.clone());
            self.select_tab(self.tab);
        }
    }
}
