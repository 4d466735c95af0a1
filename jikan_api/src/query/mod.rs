/// Declares a fieldless enum whose variants map one-to-one onto API wire
/// strings, with `Display`, `FromStr` and a [`ParamValue`] conversion.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string sent to the API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl From<$name> for $crate::query::ParamValue {
            fn from(value: $name) -> Self {
                $crate::query::ParamValue::Str(value.as_str().to_string())
            }
        }
    };
}

mod common;
pub use self::common::{PageQuery, PagedQuery, ParamValue, Query, QueryParams, SortDirection};

mod anime;
pub use self::anime::{AnimeOrderBy, AnimeQuery, AnimeRating, AnimeStatus, AnimeType, ForumFilter};

mod manga;
pub use self::manga::{MangaOrderBy, MangaQuery, MangaStatus, MangaType};

mod people;
pub use self::people::{CharacterOrderBy, CharacterQuery, PersonOrderBy, PersonQuery};

mod clubs;
pub use self::clubs::{ClubCategory, ClubOrderBy, ClubQuery, ClubType};

mod catalog;
pub use self::catalog::{
    CatalogOrderBy, CatalogQuery, GenreFilter, GenreQuery, MagazineQuery, ProducerQuery,
};

mod seasons;
pub use self::seasons::{ScheduleDay, ScheduleQuery, Season, SeasonFilter, SeasonQuery};

mod listings;
pub use self::listings::{RecommendationQuery, ReviewQuery, TopQuery};

mod users;
pub use self::users::{
    AnimeListStatus, HistoryType, MangaListStatus, UserAnimeListQuery, UserMangaListQuery,
    UserQuery,
};
