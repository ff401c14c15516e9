pub mod home;
pub mod library;
pub mod playlist_detail;
pub mod search;

pub use home::Home;
pub use library::Library;
pub use playlist_detail::PlaylistDetail;
pub use search::Search;

use crate::ui::{state::Route, traits::View};

/// The page for `route`, or `None` for routes without one (albums).
pub fn view_for(route: &Route) -> Option<Box<dyn View>> {
    match route {
        Route::Home => Some(Box::new(Home::default())),
        Route::Search { query } => Some(Box::new(Search::new(query.clone()))),
        Route::Library { tab } => Some(Box::new(Library::new(*tab))),
        Route::Playlist(id) => Some(Box::new(PlaylistDetail::new(id.clone()))),
        Route::Album(_) => None,
    }
}
