use super::*;
use crate::catalog::model::DEFAULT_ARTWORK;

fn card(id: &str, title: &str, subtitle: &str) -> CardInfo {
    CardInfo::new(id, title, subtitle, "https://example.test/art.jpg")
}

#[test]
fn every_variant_projects_the_same_card_shape() {
    let items = [
        MediaItem::Album(card("a", "A", "x")),
        MediaItem::Song(card("s", "S", "x")),
        MediaItem::Artist(card("r", "R", "x")),
        MediaItem::Playlist(card("p", "P", "x")),
    ];
    let kinds: Vec<_> = items.iter().map(MediaItem::kind).collect();
    assert_eq!(
        kinds,
        vec![
            MediaKind::Album,
            MediaKind::Song,
            MediaKind::Artist,
            MediaKind::Playlist
        ]
    );
    assert!(items.iter().all(|i| i.subtitle() == Some("x")));
}

#[test]
fn card_track_uses_fallback_duration_and_subtitle_as_artist() {
    let item = MediaItem::Album(card("album1", "Synth Dreams", "ElectroMaestro"));
    let track = item.to_track(&CardFallback::new(240, "Various Artists"));
    assert_eq!(track.id, "album1");
    assert_eq!(track.title, "Synth Dreams");
    assert_eq!(track.artist, "ElectroMaestro");
    assert_eq!(track.duration_secs, 240);
}

#[test]
fn card_without_subtitle_plays_as_the_fallback_artist() {
    let item = MediaItem::Playlist(card("p", "Mix", ""));
    assert_eq!(item.subtitle(), None);

    let track = item.to_track(&CardFallback::new(210, "Unknown"));
    assert_eq!(track.artist, "Unknown");
    assert_eq!(track.duration_secs, 210);
    assert_eq!(
        item.to_track(&CardFallback::new(240, "Various Artists")).artist,
        "Various Artists"
    );
}

#[test]
fn song_artwork_falls_back_to_collection_then_default() {
    let mut song = Song::new("s9", "T", "A", None, 100, None);
    assert_eq!(song.to_track(Some("cover.jpg")).artwork_url, "cover.jpg");
    assert_eq!(song.to_track(None).artwork_url, DEFAULT_ARTWORK);
    song.image_url = Some("own.jpg".into());
    assert_eq!(song.to_track(Some("cover.jpg")).artwork_url, "own.jpg");
}

#[test]
fn song_duration_label_is_derived_from_seconds() {
    let song = Song::new("s1", "Future Echoes", "Cybernetic Bard", None, 225, None);
    assert_eq!(song.duration_label, "3:45");
    let song = Song::new("s5", "Sunset Drive", "Palm Highway", None, 302, None);
    assert_eq!(song.duration_label, "5:02");
}

#[tokio::test]
async fn home_feed_has_both_carousels_and_genres() {
    let catalog = MockCatalog::new();
    let feed = catalog.home_feed().await.unwrap();
    assert_eq!(feed.new_releases.len(), 4);
    assert_eq!(feed.new_releases[0].title(), "Synth Dreams");
    assert_eq!(feed.popular_playlists.len(), 3);
    assert_eq!(feed.genres.len(), 8);
    assert_eq!(feed.welcome_track.unwrap().duration_secs, 180);
}

#[tokio::test]
async fn empty_search_returns_the_featured_results() {
    let catalog = MockCatalog::new();
    let results = catalog.search("   ").await.unwrap();
    let ids: Vec<_> = results.songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3"]);
    assert_eq!(results.albums.len(), 2);
    assert_eq!(results.artists.len(), 1);
    assert_eq!(results.playlists.len(), 1);
}

#[tokio::test]
async fn search_ranks_matching_song_first() {
    let catalog = MockCatalog::new();
    let results = catalog.search("neon rider").await.unwrap();
    assert_eq!(results.query, "neon rider");
    assert_eq!(results.songs.first().map(|s| s.id.as_str()), Some("s2"));
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let catalog = MockCatalog::new();
    let results = catalog.search("zzqxj").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn library_seeds_liked_ids() {
    let catalog = MockCatalog::new();
    let library = catalog.library().await.unwrap();
    let ids: Vec<_> = library.liked_songs.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, catalog.liked_song_ids());
    assert_eq!(ids, vec!["s2".to_string(), "s4".to_string()]);
}

#[tokio::test]
async fn unknown_playlist_is_not_found() {
    let catalog = MockCatalog::new();
    let err = catalog.playlist("p404").await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotFound {
            kind: MediaKind::Playlist,
            id: "p404".into()
        }
    );
    assert_eq!(err.to_string(), "playlist p404 not found");
}

#[tokio::test]
async fn description_edit_persists_in_memory() {
    let catalog = MockCatalog::new();
    let updated = catalog
        .update_playlist_description("p1", "  Late night synths  ")
        .await
        .unwrap();
    assert_eq!(updated.description, "Late night synths");
    let reloaded = catalog.playlist("p1").await.unwrap();
    assert_eq!(reloaded.description, "Late night synths");
    assert_eq!(reloaded.songs.len(), 4);
    assert_eq!(reloaded.total_duration_secs(), 225 + 252 + 302 + 230);
}
