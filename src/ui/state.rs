use std::borrow::Cow;

use thiserror::Error;

use crate::ui::components::transport::TransportAreas;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub current_route: Route,
    pub sidebar_index: usize,
    pub notice: Option<String>,
    pub transport: TransportAreas,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("No page at {0}")]
    UnknownPath(String),

    #[error("Missing id in {0}")]
    MissingId(String),

    #[error("Unknown library tab {0:?}")]
    UnknownTab(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LibraryTab {
    #[default]
    Playlists,
    Liked,
    Albums,
    Artists,
}

impl LibraryTab {
    pub const ALL: [LibraryTab; 4] = [
        LibraryTab::Playlists,
        LibraryTab::Liked,
        LibraryTab::Albums,
        LibraryTab::Artists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryTab::Playlists => "Playlists",
            LibraryTab::Liked => "Liked Songs",
            LibraryTab::Albums => "Albums",
            LibraryTab::Artists => "Artists",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            LibraryTab::Playlists => "playlists",
            LibraryTab::Liked => "liked",
            LibraryTab::Albums => "albums",
            LibraryTab::Artists => "artists",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Route {
    #[default]
    Home,
    Search {
        query: Option<String>,
    },
    Library {
        tab: LibraryTab,
    },
    Playlist(String),
    Album(String),
}

pub const SIDEBAR_ROUTES: [&str; 3] = ["/", "/search", "/library"];

impl Route {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let params: Vec<(&str, Cow<'_, str>)> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let value = urlencoding::decode(value).unwrap_or(Cow::Borrowed(value));
                (key, value)
            })
            .collect();
        let param = |name: &str| {
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["search"] => Ok(Route::Search {
                query: param("q").or_else(|| param("genre")),
            }),
            ["library"] => {
                let tab = match param("tab") {
                    None => LibraryTab::default(),
                    Some(key) => LibraryTab::ALL
                        .into_iter()
                        .find(|t| t.key() == key)
                        .ok_or(RouteError::UnknownTab(key))?,
                };
                Ok(Route::Library { tab })
            }
            ["playlist", id] => Ok(Route::Playlist(id.to_string())),
            ["album", id] => Ok(Route::Album(id.to_string())),
            ["playlist"] | ["album"] => Err(RouteError::MissingId(raw.to_string())),
            _ => Err(RouteError::UnknownPath(raw.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search { query: None } => "/search".to_string(),
            Route::Search { query: Some(q) } => format!("/search?q={}", urlencoding::encode(q)),
            Route::Library { tab } => format!("/library?tab={}", tab.key()),
            Route::Playlist(id) => format!("/playlist/{id}"),
            Route::Album(id) => format!("/album/{id}"),
        }
    }

    pub fn from_sidebar(index: usize) -> Option<Route> {
        SIDEBAR_ROUTES
            .get(index)
            .and_then(|path| Route::parse(path).ok())
    }

    /// Top-level routes replace the whole view stack; detail routes stack on top.
    pub fn is_top_level(&self) -> bool {
        self.sidebar_index().is_some()
    }

    pub fn sidebar_index(&self) -> Option<usize> {
        match self {
            Route::Home => Some(0),
            Route::Search { .. } => Some(1),
            Route::Library { .. } => Some(2),
            Route::Playlist(_) | Route::Album(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/"), Ok(Route::Home));
        assert_eq!(Route::parse(""), Ok(Route::Home));
        assert_eq!(
            Route::parse("/search"),
            Ok(Route::Search { query: None })
        );
        assert_eq!(
            Route::parse("/library?tab=liked"),
            Ok(Route::Library {
                tab: LibraryTab::Liked
            })
        );
        assert_eq!(Route::parse("/playlist/p1"), Ok(Route::Playlist("p1".into())));
        assert_eq!(Route::parse("/album/album1"), Ok(Route::Album("album1".into())));
    }

    #[test]
    fn search_query_is_decoded() {
        assert_eq!(
            Route::parse("/search?q=neon%20rider"),
            Ok(Route::Search {
                query: Some("neon rider".into())
            })
        );
    }

    #[test]
    fn genre_stands_in_for_a_missing_query() {
        assert_eq!(
            Route::parse("/search?genre=Hip-Hop"),
            Ok(Route::Search {
                query: Some("Hip-Hop".into())
            })
        );
        assert_eq!(
            Route::parse("/search?q=&genre=Jazz"),
            Ok(Route::Search {
                query: Some("Jazz".into())
            })
        );
    }

    #[test]
    fn path_round_trips() {
        let routes = [
            Route::Home,
            Route::Search {
                query: Some("Future Funk Vol. 3 & more".into()),
            },
            Route::Library {
                tab: LibraryTab::Artists,
            },
            Route::Playlist("p1".into()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Ok(route));
        }
    }

    #[test]
    fn rejects_unknown_paths_and_tabs() {
        assert!(matches!(Route::parse("/settings"), Err(RouteError::UnknownPath(_))));
        assert!(matches!(Route::parse("/playlist"), Err(RouteError::MissingId(_))));
        assert_eq!(
            Route::parse("/library?tab=podcasts"),
            Err(RouteError::UnknownTab("podcasts".into()))
        );
    }

    #[test]
    fn library_tabs_cycle() {
        assert_eq!(LibraryTab::Artists.next(), LibraryTab::Playlists);
        assert_eq!(LibraryTab::Playlists.prev(), LibraryTab::Artists);
    }

    #[test]
    fn sidebar_routes_parse_to_top_level_pages() {
        for (i, path) in SIDEBAR_ROUTES.iter().enumerate() {
            let route = Route::parse(path).unwrap();
            assert!(route.is_top_level());
            assert_eq!(route.sidebar_index(), Some(i));
        }
        assert!(!Route::Playlist("p1".into()).is_top_level());
        assert_eq!(Route::from_sidebar(1), Some(Route::Search { query: None }));
        assert_eq!(Route::from_sidebar(3), None);
    }
}
