mod meta;
pub use self::meta::{PaginatedResponse, Pagination, PaginationItems, Response};

mod common;
pub use self::common::{
    CharacterRef, DateRange, EntryRecommendation, EntryRef, ExternalLink, ForumTopic, ImageUrls,
    Images, LastComment, MalEntry, MalId, MoreInfo, NamedRef, NewsArticle, PersonRef, Picture,
    Relation, ScoreCount, Timestamp, Title, Trailer, TrailerImages, UserRef,
};

mod anime;
pub use self::anime::{
    Anime, AnimeCharacter, AnimeEpisode, AnimeStaff, AnimeStatistics, AnimeThemes,
    AnimeUserUpdate, AnimeVideos, Broadcast, EpisodeVideo, Promo, VoiceActor,
};

mod manga;
pub use self::manga::{Manga, MangaCharacter, MangaStatistics, MangaUserUpdate};

mod people;
pub use self::people::{
    Character, CharacterAnimeRole, CharacterMangaRole, CharacterVoice, Person,
    PersonAnimePosition, PersonMangaPosition, PersonVoiceRole,
};

mod clubs;
pub use self::clubs::{Club, ClubMember, ClubRelations, ClubStaff};

mod catalog;
pub use self::catalog::{Genre, Magazine, Producer};

mod seasons;
pub use self::seasons::{SeasonArchive, SeasonalAnime};

mod recommendations;
pub use self::recommendations::Recommendation;

mod reviews;
pub use self::reviews::{AnimeReview, MangaReview, Reactions, Review, UserReview};

mod top;
pub use self::top::{TopAnime, TopCharacter, TopManga, TopPerson, TopReview};

mod users;
pub use self::users::{
    AnimeListEntryStatus, AnimeListUpdate, FavoriteEntry, FriendRef, MangaListEntryStatus,
    MangaListUpdate, User, UserAbout, UserAnimeListEntry, UserAnimeStatistics, UserClub,
    UserFavorites, UserFriend, UserHistory, UserMangaListEntry, UserMangaStatistics,
    UserProfile, UserRecommendation, UserStatistics, UserUpdates,
};
