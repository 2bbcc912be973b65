pub use self::{
    generic::GenericMenu,
    pokedex::PokedexPages,
    pokemon_list::{selected_content, PokeListMenu},
    search::SearchPages,
};

mod generic;
mod pokedex;
mod pokemon_list;
mod search;
