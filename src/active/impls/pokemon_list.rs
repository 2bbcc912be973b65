use std::{fmt::Write, future::ready};

use eyre::Result;
use futures::future::BoxFuture;

use crate::{
    active::{visible_controls, Controls, Menu, PageContext, PageRenderer},
    game::{Pokemon, Stats},
    util::{constants::POKEDEX_SPRITE_URL, EmbedBuilder, FooterBuilder},
};

/// Detailed view of a user's pokémon, one per page.
pub struct PokeListMenu {
    renderer: PokemonPages,
    can_select: bool,
}

impl PokeListMenu {
    /// `can_select` should only be set when the viewer owns the listed pokémon.
    pub fn new(pokemon: Vec<Pokemon>, can_select: bool) -> Self {
        Self {
            renderer: PokemonPages::new(pokemon),
            can_select,
        }
    }
}

impl Menu for PokeListMenu {
    type Renderer = PokemonPages;

    fn renderer(&self) -> &Self::Renderer {
        &self.renderer
    }

    fn controls(&self, max_pages: Option<usize>) -> Controls {
        let mut controls =
            (visible_controls(max_pages) & Controls::SINGLE_STEP) | Controls::STOP | Controls::JUMP;

        if self.can_select {
            controls |= Controls::SELECT;
        }

        controls
    }

    fn selection_notice(&self, ctx: PageContext<'_>) -> Option<String> {
        let pokemon = self.renderer.pokemon.get(ctx.pages.index())?;
        let name = ctx.game.display_name(&pokemon.name, ctx.viewer);

        Some(selected_content(&name, pokemon.sid))
    }
}

pub fn selected_content(name: &str, sid: usize) -> String {
    format!("Selected your {name} (ID {sid}).")
}

pub struct PokemonPages {
    pokemon: Box<[Pokemon]>,
}

impl PokemonPages {
    pub fn new(pokemon: Vec<Pokemon>) -> Self {
        Self {
            pokemon: pokemon.into_boxed_slice(),
        }
    }

    fn build_page(&self, ctx: PageContext<'_>) -> Result<EmbedBuilder> {
        let PageContext { pages, viewer, game } = ctx;

        let Some(pokemon) = self.pokemon.get(pages.index()) else {
            bail!("no pokémon on page {}", pages.curr_page());
        };

        let mut description = String::with_capacity(512);

        match pokemon.id {
            Some(id) => {
                let _ = writeln!(description, "**ID**: #{id}");
            }
            None => description.push_str("**ID**: 0\n"),
        }

        if let Some(ref nickname) = pokemon.nickname {
            let _ = writeln!(description, "**Nickname**: {nickname}");
        }

        let _ = writeln!(
            description,
            "**Level**: {level}\n\
            **Type**: {types}\n\
            **XP**: {xp}/{total_xp}",
            level = pokemon.level,
            types = pokemon.types.join(", "),
            xp = pokemon.xp,
            total_xp = game.total_xp_for_level(pokemon.level),
        );

        if let Some(ref variant) = pokemon.variant {
            let _ = writeln!(description, "**Variant**: {variant}");
        }

        let _ = write!(description, "```prolog\n{}```", stat_table(&pokemon.stats));

        let footer = FooterBuilder::new(format!(
            "Pokémon ID: {number}/{amount}",
            number = pokemon.sid,
            amount = pages.total(),
        ));

        let mut embed = EmbedBuilder::new()
            .description(description)
            .footer(footer)
            .title(game.display_name(&pokemon.name, viewer));

        if let Some(id) = pokemon.id {
            embed = match pokemon.url {
                Some(ref url) => embed.thumbnail(url.to_string()),
                None => embed.thumbnail(format!("{POKEDEX_SPRITE_URL}{id:03}.png")),
            };
        }

        Ok(embed)
    }
}

impl PageRenderer for PokemonPages {
    fn max_pages(&self) -> Option<usize> {
        Some(self.pokemon.len())
    }

    fn format_page<'a>(&'a self, ctx: PageContext<'a>) -> BoxFuture<'a, Result<EmbedBuilder>> {
        Box::pin(ready(self.build_page(ctx)))
    }
}

/// Two column table with left-aligned labels and right-aligned values.
/// Each column is at least two characters wider than its header.
fn stat_table(stats: &Stats) -> String {
    const LABEL: &str = "Stats";
    const VALUE: &str = "Value";
    const MIN_PADDING: usize = 2;

    let rows = stats.rows();
    let values = rows.map(|(_, value)| value.to_string());

    let label_len = rows
        .iter()
        .map(|(label, _)| label.len())
        .fold(LABEL.len() + MIN_PADDING, usize::max);

    let value_len = values
        .iter()
        .map(String::len)
        .fold(VALUE.len() + MIN_PADDING, usize::max);

    let mut table = String::with_capacity((label_len + value_len + 3) * (rows.len() + 2));

    let _ = writeln!(table, "{LABEL:<label_len$}  {VALUE:>value_len$}");
    let _ = writeln!(table, "{:-<label_len$}  {:->value_len$}", "", "");

    for ((label, _), value) in rows.iter().zip(values.iter()) {
        let _ = writeln!(table, "{label:<label_len$}  {value:>value_len$}");
    }

    table
}
