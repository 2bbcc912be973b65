use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Names of a pokémon keyed by language, e.g. `"english"`.
pub type Names = HashMap<Box<str>, Box<str>>;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Stats {
    #[serde(rename = "HP")]
    pub hp: u32,
    #[serde(rename = "Attack")]
    pub attack: u32,
    #[serde(rename = "Defence")]
    pub defence: u32,
    #[serde(rename = "Sp. Atk")]
    pub sp_atk: u32,
    #[serde(rename = "Sp. Def")]
    pub sp_def: u32,
    #[serde(rename = "Speed")]
    pub speed: u32,
}

impl Stats {
    pub fn rows(&self) -> [(&'static str, u32); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defence", self.defence),
            ("Sp. Atk", self.sp_atk),
            ("Sp. Def", self.sp_def),
            ("Speed", self.speed),
        ]
    }
}

/// A caught pokémon.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Pokemon {
    pub name: Names,
    pub level: u32,
    #[serde(rename = "type")]
    pub types: Vec<Box<str>>,
    pub xp: u64,
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Box<str>>,
    /// Catalog id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Position within the owner's list, starting at 1
    #[serde(default)]
    pub sid: usize,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: Names,
}

/// A catalog entry together with how often the viewer caught it.
#[derive(Clone, Debug)]
pub struct DexEntry {
    pub id: u32,
    pub name: Names,
    pub amount: u32,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserData {
    #[serde(default)]
    pub pokemon: Vec<Pokemon>,
    /// Amount of catches per catalog id
    #[serde(default)]
    pub pokeids: HashMap<u32, u32>,
    #[serde(default)]
    pub selected: Option<usize>,
    #[serde(default)]
    pub locale: Option<Box<str>>,
}
