// Colors
pub const RED: u32 = 0xE74C3C;

// Assets
pub const POKEDEX_SPRITE_URL: &str = "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/";

// Error messages
pub const GENERAL_ISSUE: &str = "Something went wrong, please try again later";
