use jikan_api::types::{
    Anime, AnimeEpisode, Character, PaginatedResponse, Producer, Recommendation, Response,
    Review, SeasonArchive, UserAnimeListEntry, UserProfile,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_anime_full() {
    let json = load_fixture("anime.json");
    let resp: Response<Anime> = serde_json::from_str(&json).unwrap();

    let anime = &resp.data;
    assert_eq!(anime.mal_id, 1);
    assert_eq!(anime.title, "Cowboy Bebop");
    assert_eq!(anime.anime_type.as_deref(), Some("TV"));
    assert_eq!(anime.episodes, Some(26));
    assert_eq!(anime.score, Some(8.75));
    assert!(!anime.airing);
    assert_eq!(anime.titles.len(), 3);
    assert_eq!(anime.titles[1].title_type, "Japanese");
    assert_eq!(
        anime.aired.from.map(|d| d.to_rfc3339()).as_deref(),
        Some("1998-04-03T00:00:00+00:00")
    );
    assert_eq!(anime.aired.string.as_deref(), Some("Apr 3, 1998 to Apr 24, 1999"));
    assert_eq!(
        anime.broadcast.as_ref().and_then(|b| b.timezone.as_deref()),
        Some("Asia/Tokyo")
    );
    assert_eq!(anime.studios[0].name, "Sunrise");
    assert_eq!(anime.genres.len(), 3);
    assert!(anime.explicit_genres.is_empty());
    assert_eq!(
        anime.images.webp.as_ref().and_then(|w| w.large_image_url.as_deref()),
        Some("https://cdn.myanimelist.net/images/anime/4/19644l.webp")
    );
    assert_eq!(
        anime.trailer.as_ref().and_then(|t| t.youtube_id.as_deref()),
        Some("qig4KOK2R2g")
    );
}

#[test]
fn deserialize_anime_search_with_sparse_entries() {
    let json = load_fixture("anime_search.json");
    let resp: PaginatedResponse<Anime> = serde_json::from_str(&json).unwrap();

    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.pagination.current_page, Some(1));
    assert_eq!(resp.pagination.last_visible_page, 12);
    assert!(resp.pagination.has_next_page);
    let items = resp.pagination.items.as_ref().unwrap();
    assert_eq!(items.count, 2);
    assert_eq!(items.total, 24);
    assert_eq!(items.per_page, 2);

    let sparse = &resp.data[1];
    assert_eq!(sparse.mal_id, 59999);
    assert!(sparse.anime_type.is_none());
    assert!(sparse.score.is_none());
    assert!(sparse.trailer.is_none());
    assert!(sparse.titles.is_empty());
    assert!(!sparse.approved);
    assert!(sparse.aired.from.is_none());
    assert!(sparse.images.jpg.image_url.is_none());
}

#[test]
fn deserialize_episodes_with_short_pagination() {
    let json = load_fixture("anime_episodes.json");
    let resp: PaginatedResponse<AnimeEpisode> = serde_json::from_str(&json).unwrap();

    assert!(!resp.pagination.has_next_page);
    assert!(resp.pagination.current_page.is_none());
    assert!(resp.pagination.items.is_none());
    assert_eq!(resp.data[0].title.as_deref(), Some("Asteroid Blues"));
    assert!(resp.data[1].recap);
    assert!(resp.data[1].aired.is_none());
}

#[test]
fn deserialize_character_appearances() {
    let json = load_fixture("character_full.json");
    let resp: Response<Character> = serde_json::from_str(&json).unwrap();

    let character = &resp.data;
    assert_eq!(character.name, "Spike Spiegel");
    assert_eq!(character.nicknames, vec!["Swimming Bird".to_string()]);
    assert_eq!(character.animeography.len(), 1);
    assert_eq!(character.animeography[0].role, "Main");
    assert_eq!(character.animeography[0].anime.title, "Cowboy Bebop");
    assert!(character.mangaography.is_empty());
    assert_eq!(character.voices[0].language, "Japanese");
    assert_eq!(character.voices[0].person.name, "Yamadera, Kouichi");
}

#[test]
fn deserialize_season_archive() {
    let json = load_fixture("seasons.json");
    let resp: Response<Vec<SeasonArchive>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].year, 2025);
    assert_eq!(resp.data[0].seasons.len(), 4);
    assert_eq!(resp.data[1].seasons, vec!["winter".to_string()]);
}

#[test]
fn deserialize_reviews() {
    let json = load_fixture("reviews.json");
    let resp: PaginatedResponse<Review> = serde_json::from_str(&json).unwrap();

    let review = &resp.data[0];
    assert_eq!(review.review_type.as_deref(), Some("anime"));
    assert_eq!(review.reactions.overall, 10);
    assert_eq!(review.reactions.nice, 8);
    assert_eq!(review.score, Some(9));
    assert!(review.is_preliminary);
    assert_eq!(review.episodes_watched, Some(12));
    assert!(review.chapters_read.is_none());
    assert_eq!(review.entry.as_ref().map(|e| e.mal_id), Some(1));
    assert_eq!(review.user.as_ref().map(|u| u.username.as_str()), Some("spike"));
}

#[test]
fn deserialize_recommendation_pairs() {
    let json = load_fixture("recommendations.json");
    let resp: PaginatedResponse<Recommendation> = serde_json::from_str(&json).unwrap();

    let rec = &resp.data[0];
    assert_eq!(rec.mal_id, "1-205");
    assert_eq!(rec.entry.len(), 2);
    assert_eq!(rec.entry[1].title, "Samurai Champloo");
    assert_eq!(rec.user.username, "faye");
    assert!(rec.user.images.is_none());
}

#[test]
fn deserialize_user_profile() {
    let json = load_fixture("user_profile.json");
    let resp: Response<UserProfile> = serde_json::from_str(&json).unwrap();

    let profile = &resp.data;
    assert_eq!(profile.user.username, "Xinil");
    assert_eq!(profile.user.mal_id, Some(1));
    assert!(profile.user.birthday.is_none());
    assert!(profile.user.joined.is_some());
    let stats = profile.statistics.as_ref().unwrap();
    assert_eq!(stats.anime.completed, 400);
    assert_eq!(stats.manga.volumes_read, 80);
    assert_eq!(profile.external[0].name, "Website");
    assert!(profile.favorites.is_none());
    assert!(profile.about.is_none());
}

#[test]
fn deserialize_user_anime_list() {
    let json = load_fixture("user_animelist.json");
    let resp: PaginatedResponse<UserAnimeListEntry> = serde_json::from_str(&json).unwrap();

    let entry = &resp.data[0];
    assert_eq!(entry.node.title, "Cowboy Bebop");
    assert_eq!(entry.list_status.status, "completed");
    assert_eq!(entry.list_status.score, 10);
    assert_eq!(entry.list_status.num_episodes_watched, 26);
    assert!(resp.pagination.items.is_none());
}

#[test]
fn deserialize_producer_titles() {
    let json = load_fixture("producer.json");
    let resp: Response<Producer> = serde_json::from_str(&json).unwrap();

    assert!(resp.data.name.is_none());
    assert_eq!(resp.data.display_name(), Some("Sunrise"));
    assert_eq!(resp.data.count, 800);
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{"data": {"year": 2024, "seasons": ["fall"], "future_field": {"x": 1}}}"#;
    let resp: Response<SeasonArchive> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.data.year, 2024);
}

#[test]
fn missing_required_field_is_rejected() {
    let json = r#"{"data": {"mal_id": 1, "url": "https://myanimelist.net/anime/1"}}"#;
    assert!(serde_json::from_str::<Response<Anime>>(json).is_err());
}
