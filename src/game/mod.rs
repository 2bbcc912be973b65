use eyre::Result;
use futures::future::BoxFuture;
use hashbrown::HashSet;
use twilight_model::id::{marker::UserMarker, Id};

pub use self::{
    error::StoreError,
    model::{CatalogEntry, DexEntry, Names, Pokemon, Stats, UserData},
    store::JsonStore,
};

mod error;
mod model;
mod store;

/// The game rules and catch state that menus read from.
pub trait GameLogic: Send + Sync {
    /// XP required to advance past `level`.
    fn total_xp_for_level(&self, level: u32) -> u64;

    /// Name of a pokémon as it should be shown to `viewer`.
    fn display_name(&self, names: &Names, viewer: Id<UserMarker>) -> String;

    /// Make the pokémon at the 0-based `index` of the viewer's list their
    /// selected one.
    fn select(&self, viewer: Id<UserMarker>, index: usize) -> BoxFuture<'_, Result<()>>;

    /// Catalog ids that `viewer` caught at least once.
    fn caught_ids(&self, viewer: Id<UserMarker>) -> BoxFuture<'_, Result<HashSet<u32>>>;
}
