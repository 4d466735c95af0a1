//! Endpoint facades, one per resource group.
//!
//! Every facade shares the client's [`Transport`] and maps its methods onto
//! fixed paths. Responses and errors are returned exactly as the transport
//! produced them.

mod anime;
mod catalog;
mod characters;
mod clubs;
mod listings;
mod manga;
mod people;
mod random;
mod seasons;
mod users;

pub use self::anime::AnimeEndpoints;
pub use self::catalog::{GenreEndpoints, MagazineEndpoints, ProducerEndpoints};
pub use self::characters::CharacterEndpoints;
pub use self::clubs::ClubEndpoints;
pub use self::listings::{RecommendationEndpoints, ReviewEndpoints, TopEndpoints};
pub use self::manga::MangaEndpoints;
pub use self::people::PeopleEndpoints;
pub use self::random::RandomEndpoints;
pub use self::seasons::{ScheduleEndpoints, SeasonEndpoints};
pub use self::users::UserEndpoints;

/// Declares a facade struct holding the shared transport.
macro_rules! endpoint_facade {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            transport: std::sync::Arc<$crate::transport::Transport>,
        }

        impl $name {
            pub(crate) fn new(transport: std::sync::Arc<$crate::transport::Transport>) -> Self {
                Self { transport }
            }
        }
    };
}

pub(crate) use endpoint_facade;

/// `{ page }` parameters of the id-scoped listings that only take a page.
fn page_param(page: Option<u32>) -> crate::query::QueryParams {
    crate::query::QueryParams::new().with("page", page)
}
