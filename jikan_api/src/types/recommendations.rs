use serde::{Deserialize, Serialize};

use super::common::{EntryRef, Timestamp, UserRef};

/// User-submitted recommendation pairing two entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Pair identifier of the form `"{id}-{id}"`.
    pub mal_id: String,
    pub entry: Vec<EntryRef>,
    pub content: Option<String>,
    pub date: Option<Timestamp>,
    pub user: UserRef,
}
