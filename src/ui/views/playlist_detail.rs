use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::warn;

use crate::{
    catalog::{CatalogError, PlaylistDetails},
    event::events::Event,
    ui::{
        components::{
            song_row::{SongRow, play_or_pause},
            spinner::Spinner,
            text_input::{InputOutcome, TextInput},
        },
        context::AppContext,
        state::{AppState, LibraryTab, Route},
        traits::{Action, View},
        util::step_selection,
    },
    util::{colors, format::format_long_duration, task::TaskManager},
};

pub const NOT_FOUND_MESSAGE: &str = "Playlist not found.";

pub struct PlaylistDetail {
    id: String,
    playlist: Option<PlaylistDetails>,
    not_found: bool,
    description: TextInput,
    list_state: ListState,
    tasks: TaskManager,
}

impl PlaylistDetail {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            playlist: None,
            not_found: false,
            description: TextInput::new("Playlist description..."),
            list_state: ListState::default(),
            tasks: TaskManager::new(),
        }
    }

    fn set_playlist(&mut self, playlist: PlaylistDetails) {
        self.description.set_value(playlist.description.clone());
        if self.list_state.selected().is_none() && !playlist.songs.is_empty() {
            self.list_state.select(Some(0));
        }
        self.playlist = Some(playlist);
    }

    fn save_description(&mut self, text: String, ctx: &AppContext) {
        let catalog = ctx.catalog.clone();
        let tx = ctx.event_tx.clone();
        let id = self.id.clone();
        self.tasks.spawn(
            "save_description",
            tokio::spawn(async move {
                match catalog.update_playlist_description(&id, &text).await {
                    Ok(playlist) => {
                        let _ = tx.send(Event::PlaylistDescriptionSaved(playlist));
                    }
                    Err(e) => {
                        warn!("Failed to save description: {}", e);
                        let _ = tx.send(Event::FetchError(e.to_string()));
                    }
                }
            }),
        );
    }

    fn render_header(&self, f: &mut Frame, area: Rect, playlist: &PlaylistDetails) {
        let editing = self.description.is_editing();
        let editor_height = if editing { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(editor_height),
                Constraint::Min(1),
            ])
            .split(area);

        let breadcrumb = Line::from(vec![
            Span::styled("Library", Style::default().fg(colors::NEUTRAL)),
            Span::styled(" › ", Style::default().fg(colors::MUTED)),
            Span::styled("Playlists", Style::default().fg(colors::NEUTRAL)),
            Span::styled(" › ", Style::default().fg(colors::MUTED)),
            Span::styled(playlist.name.clone(), Style::default().fg(colors::TEXT)),
        ]);
        f.render_widget(Paragraph::new(breadcrumb), chunks[0]);

        let title = vec![
            Line::from(Span::styled(
                "PLAYLIST",
                Style::default().fg(colors::NEUTRAL),
            )),
            Line::from(Span::styled(
                playlist.name.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(title), chunks[1]);

        if editing {
            self.description
                .render(f, chunks[2], "Description [Enter] save [Esc] cancel");
        }

        let mut lines = Vec::new();
        if !editing {
            let text = if playlist.description.is_empty() {
                "No description.".to_string()
            } else {
                playlist.description.clone()
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(colors::TEXT),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "Created by {} • {} songs • {}",
                playlist.creator,
                playlist.songs.len(),
                format_long_duration(playlist.total_duration_secs())
            ),
            Style::default().fg(colors::NEUTRAL),
        )));

        let mut hints = vec![Span::styled(
            "[a] Play All",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if playlist.is_editable && !editing {
            hints.push(Span::raw("  "));
            hints.push(Span::styled(
                "[e] Edit Description",
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        lines.push(Line::from(hints));

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[3]);
    }
}

#[async_trait]
impl View for PlaylistDetail {
    async fn on_mount(&mut self, ctx: &AppContext) {
        let catalog = ctx.catalog.clone();
        let tx = ctx.event_tx.clone();
        let id = self.id.clone();
        self.tasks.spawn(
            "playlist",
            tokio::spawn(async move {
                match catalog.playlist(&id).await {
                    Ok(playlist) => {
                        let _ = tx.send(Event::PlaylistFetched(playlist));
                    }
                    Err(CatalogError::NotFound { .. }) => {
                        warn!(id = id.as_str(), "Playlist not found");
                        let _ = tx.send(Event::PlaylistNotFound(id));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(e.to_string()));
                    }
                }
            }),
        );
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        if self.not_found {
            let lines = vec![
                Line::from(Span::styled(
                    NOT_FOUND_MESSAGE,
                    Style::default().fg(colors::TEXT),
                )),
                Line::from(Span::styled(
                    "[Esc] back",
                    Style::default().fg(colors::NEUTRAL),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                Rect {
                    y: area.y + area.height / 2,
                    height: area.height.min(2),
                    ..area
                },
            );
            return;
        }

        let Some(playlist) = self.playlist.clone() else {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading playlist...");
            f.render_widget(spinner, area);
            return;
        };

        let header_height = if self.description.is_editing() { 13 } else { 9 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header_height), Constraint::Min(0)])
            .split(area);

        self.render_header(f, chunks[0], &playlist);

        let session = ctx.playback.snapshot();
        let width = chunks[1].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = playlist
            .songs
            .iter()
            .enumerate()
            .map(|(i, song)| {
                SongRow::new(song, i + 1)
                    .show_album(false)
                    .to_list_item(&session, width)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.description.is_editing() {
            match self.description.handle_key(key) {
                InputOutcome::Submitted(text) => self.save_description(text, ctx),
                InputOutcome::Cancelled => {
                    let saved = self
                        .playlist
                        .as_ref()
                        .map(|p| p.description.clone())
                        .unwrap_or_default();
                    self.description.set_value(saved);
                }
                InputOutcome::Changed => {}
            }
            return Some(Action::None);
        }

        let playlist = self.playlist.as_ref()?;
        let len = playlist.songs.len();
        match key.code {
            KeyCode::Char('e') if playlist.is_editable => {
                self.description.start_editing();
                Some(Action::None)
            }
            KeyCode::Char('a') => {
                let song = playlist.songs.first()?;
                Some(Action::Play(
                    song.to_track(Some(&playlist.cover_image_url)),
                ))
            }
            KeyCode::Char('g') => Some(Action::Navigate(Route::Library {
                tab: LibraryTab::Playlists,
            })),
            KeyCode::Enter => {
                let song = playlist.songs.get(self.list_state.selected()?)?;
                Some(play_or_pause(
                    song,
                    &ctx.playback.snapshot(),
                    Some(&playlist.cover_image_url),
                ))
            }
            KeyCode::Char('f') => {
                let song = playlist.songs.get(self.list_state.selected()?)?;
                Some(Action::ToggleLike(song.id.clone()))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                step_selection(&mut self.list_state, len, true);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                step_selection(&mut self.list_state, len, false);
                Some(Action::None)
            }
            _ => None,
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::PlaylistFetched(playlist) | Event::PlaylistDescriptionSaved(playlist)
                if playlist.id == self.id =>
            {
                self.not_found = false;
                self.set_playlist(playlist.clone());
            }
            Event::PlaylistNotFound(id) if *id == self.id => {
                self.not_found = true;
            }
            _ => {}
        }
    }
}
