//! Fetch the set of Twitter users whose updates Stream Spigot wants to hear about.
mod err;
pub use err::FollowingErr;

use crate::event::Id;

use hashbrown::HashSet;
use reqwest::{Client, StatusCode};
use url::Url;

/// The users to follow, in the order the stream subscription lists them, plus the same
/// users as a set for membership checks.
///
/// The two views are only ever built together, so the set is always exactly the IDs in
/// the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowingSet {
    ids: Vec<Id>,
    members: HashSet<Id>,
}

impl FollowingSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn contains(&self, id: Id) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<Id>> for FollowingSet {
    fn from(ids: Vec<Id>) -> Self {
        let members = ids.iter().copied().collect();
        Self { ids, members }
    }
}

/// GET the following list from `url`.
///
/// A non-200 status is logged and treated as an empty list so the pinger keeps running;
/// a transport failure or an unparsable body is returned as an error.
pub async fn fetch(client: &Client, url: &Url) -> Result<FollowingSet, FollowingErr> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FollowingErr::Network)?;

    if response.status() != StatusCode::OK {
        log::warn!(
            "  ...got HTTP status {} when trying to fetch following list",
            response.status().as_u16()
        );
        return Ok(FollowingSet::empty());
    }

    let contents = response.bytes().await.map_err(FollowingErr::Read)?;
    let ids: Vec<Id> = serde_json::from_slice(&contents)?;
    Ok(FollowingSet::from(ids))
}
