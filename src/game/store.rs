use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use eyre::Result;
use futures::future::BoxFuture;
use hashbrown::{HashMap, HashSet};
use parking_lot::RwLock;
use twilight_model::id::{marker::UserMarker, Id};

use super::{CatalogEntry, DexEntry, GameLogic, Names, StoreError, UserData};

const FALLBACK_LOCALE: &str = "english";

/// Game state persisted as json files.
///
/// The catalog lives in `<data>/pokedex.json`, every user gets their own
/// `<data>/users/<user id>.json`.
pub struct JsonStore {
    users_dir: PathBuf,
    catalog: Box<[CatalogEntry]>,
    users: RwLock<HashMap<Id<UserMarker>, UserData>>,
}

impl JsonStore {
    pub async fn load(data_path: &Path) -> Result<Self, StoreError> {
        let catalog_path = data_path.join("pokedex.json");

        let bytes = tokio::fs::read(&catalog_path)
            .await
            .map_err(|source| StoreError::Read {
                path: catalog_path.clone(),
                source,
            })?;

        let catalog: Vec<CatalogEntry> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Deserialize {
                path: catalog_path,
                source,
            })?;

        info!(entries = catalog.len(), "Loaded pokédex catalog");

        Ok(Self::new(data_path.join("users"), catalog.into_boxed_slice()))
    }

    pub fn new(users_dir: PathBuf, catalog: Box<[CatalogEntry]>) -> Self {
        Self {
            users_dir,
            catalog,
            users: RwLock::new(HashMap::new()),
        }
    }

    pub async fn user(&self, user: Id<UserMarker>) -> Result<UserData, StoreError> {
        let cached = self.users.read().get(&user).cloned();

        if let Some(data) = cached {
            return Ok(data);
        }

        let path = self.user_path(user);

        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|source| StoreError::Deserialize { path, source })?,
            Err(err) if err.kind() == ErrorKind::NotFound => UserData::default(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        self.users.write().insert(user, data.clone());

        Ok(data)
    }

    /// Every catalog entry with the amount of catches of `user`.
    pub async fn dex_entries(&self, user: Id<UserMarker>) -> Result<Vec<DexEntry>, StoreError> {
        let data = self.user(user).await?;

        let entries = self
            .catalog
            .iter()
            .map(|entry| DexEntry {
                id: entry.id,
                name: entry.name.clone(),
                amount: data.pokeids.get(&entry.id).copied().unwrap_or(0),
            })
            .collect();

        Ok(entries)
    }

    async fn select_index(&self, user: Id<UserMarker>, index: usize) -> Result<(), StoreError> {
        let mut data = self.user(user).await?;
        let len = data.pokemon.len();

        if index >= len {
            return Err(StoreError::InvalidSelection {
                index: index + 1,
                len,
            });
        }

        data.selected = Some(index);
        self.persist(user, &data).await?;
        self.users.write().insert(user, data);

        Ok(())
    }

    async fn persist(&self, user: Id<UserMarker>, data: &UserData) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(data).map_err(StoreError::Serialize)?;

        tokio::fs::create_dir_all(&self.users_dir)
            .await
            .map_err(|source| StoreError::Write {
                path: self.users_dir.clone(),
                source,
            })?;

        let path = self.user_path(user);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StoreError::Write { path, source })
    }

    fn user_path(&self, user: Id<UserMarker>) -> PathBuf {
        self.users_dir.join(format!("{user}.json"))
    }
}

impl GameLogic for JsonStore {
    fn total_xp_for_level(&self, level: u32) -> u64 {
        25 * level as u64
    }

    fn display_name(&self, names: &Names, viewer: Id<UserMarker>) -> String {
        let users = self.users.read();

        let localized = users
            .get(&viewer)
            .and_then(|data| data.locale.as_deref())
            .and_then(|locale| names.get(locale));

        localized
            .or_else(|| names.get(FALLBACK_LOCALE))
            .or_else(|| names.values().next())
            .map_or_else(|| "Unknown".to_owned(), |name| name.to_string())
    }

    fn select(&self, viewer: Id<UserMarker>, index: usize) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.select_index(viewer, index).await?;
            debug!(user = %viewer, index, "Selected pokémon");

            Ok(())
        })
    }

    fn caught_ids(&self, viewer: Id<UserMarker>) -> BoxFuture<'_, Result<HashSet<u32>>> {
        Box::pin(async move {
            let data = self.user(viewer).await?;

            Ok(data.pokeids.keys().copied().collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::game::{Pokemon, Stats};

    fn temp_dir() -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);

        let n = COUNTER.fetch_add(1, Ordering::Relaxed);

        std::env::temp_dir().join(format!("pokecord-store-{}-{n}", std::process::id()))
    }

    fn names(pairs: &[(&str, &str)]) -> Names {
        pairs
            .iter()
            .map(|(lang, name)| (Box::from(*lang), Box::from(*name)))
            .collect()
    }

    fn pokemon(sid: usize) -> Pokemon {
        Pokemon {
            name: names(&[("english", "Pikachu")]),
            level: 5,
            types: vec![Box::from("Electric")],
            xp: 10,
            stats: Stats::default(),
            nickname: None,
            variant: None,
            url: None,
            id: Some(25),
            sid,
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        let store = JsonStore::new(temp_dir(), Box::default());
        let viewer = Id::new(1);

        let both = names(&[("english", "Bulbasaur"), ("french", "Bulbizarre")]);
        assert_eq!(store.display_name(&both, viewer), "Bulbasaur");

        store.users.write().insert(
            viewer,
            UserData {
                locale: Some(Box::from("french")),
                ..Default::default()
            },
        );
        assert_eq!(store.display_name(&both, viewer), "Bulbizarre");

        let japanese = names(&[("japanese", "フシギダネ")]);
        assert_eq!(store.display_name(&japanese, viewer), "フシギダネ");

        assert_eq!(store.display_name(&Names::new(), viewer), "Unknown");
    }

    #[test]
    fn test_total_xp_for_level() {
        let store = JsonStore::new(temp_dir(), Box::default());

        assert_eq!(store.total_xp_for_level(1), 25);
        assert_eq!(store.total_xp_for_level(40), 1000);
    }

    #[tokio::test]
    async fn test_missing_user_is_empty() {
        let store = JsonStore::new(temp_dir(), Box::default());
        let data = store.user(Id::new(7)).await.unwrap();

        assert!(data.pokemon.is_empty());
        assert!(store.caught_ids(Id::new(7)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_select_persists_and_checks_bounds() {
        let dir = temp_dir();
        let user = Id::new(42);

        let store = JsonStore::new(dir.clone(), Box::default());
        store.users.write().insert(
            user,
            UserData {
                pokemon: vec![pokemon(1), pokemon(2)],
                ..Default::default()
            },
        );

        store.select(user, 1).await.unwrap();

        let err = store.select_index(user, 2).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidSelection { index: 3, len: 2 }));

        let reloaded = JsonStore::new(dir.clone(), Box::default());
        assert_eq!(reloaded.user(user).await.unwrap().selected, Some(1));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_dex_entries_count_catches() {
        let catalog = vec![
            CatalogEntry {
                id: 1,
                name: names(&[("english", "Bulbasaur")]),
            },
            CatalogEntry {
                id: 25,
                name: names(&[("english", "Pikachu")]),
            },
        ];

        let store = JsonStore::new(temp_dir(), catalog.into_boxed_slice());
        let user = Id::new(3);

        let mut pokeids = HashMap::new();
        pokeids.insert(25, 3);

        store.users.write().insert(
            user,
            UserData {
                pokeids,
                ..Default::default()
            },
        );

        let entries = store.dex_entries(user).await.unwrap();
        let amounts: Vec<_> = entries.iter().map(|entry| entry.amount).collect();

        assert_eq!(amounts, [0, 3]);
        assert_eq!(store.caught_ids(user).await.unwrap().len(), 1);
    }
}
