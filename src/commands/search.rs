use std::sync::Arc;

use eyre::{Result, WrapErr};
use itertools::Itertools;
use twilight_model::{
    channel::Message,
    id::{marker::UserMarker, Id},
};

use super::{numbered, start_menu};
use crate::{
    active::impls::{GenericMenu, SearchPages},
    core::{BotConfig, Context},
    game::{GameLogic, Pokemon},
    util::ChannelExt,
};

const PER_PAGE: usize = 10;

pub async fn search(ctx: Arc<Context>, msg: &Message, query: &str) -> Result<()> {
    if query.is_empty() {
        return msg
            .plain_message(&ctx, "Please specify a pokémon name to search for.")
            .await;
    }

    let author = msg.author.id;

    let data = ctx
        .store
        .user(author)
        .await
        .wrap_err("failed to get user data")?;

    let pokemon = numbered(data.pokemon);
    let entries = search_pages(ctx.store.as_ref(), &pokemon, query, author);

    if entries.is_empty() {
        let content = format!("No pokémon found matching `{query}`.");

        return msg.plain_message(&ctx, &content).await;
    }

    let renderer = SearchPages::new(entries, BotConfig::get().embed_color);
    start_menu(ctx, msg, GenericMenu::new(renderer));

    Ok(())
}

/// Case-insensitive match against every name of a pokémon, grouped into pages.
fn search_pages(
    game: &dyn GameLogic,
    pokemon: &[Pokemon],
    query: &str,
    viewer: Id<UserMarker>,
) -> Vec<String> {
    let query = query.to_lowercase();

    let lines = pokemon
        .iter()
        .filter(|pokemon| {
            pokemon
                .name
                .values()
                .any(|name| name.to_lowercase().contains(&query))
        })
        .map(|pokemon| {
            format!(
                "**{name}** | Level: {level} | ID: {sid}",
                name = game.display_name(&pokemon.name, viewer),
                level = pokemon.level,
                sid = pokemon.sid,
            )
        });

    let chunks = lines.chunks(PER_PAGE);

    let pages = chunks.into_iter().map(|mut chunk| chunk.join("\n")).collect();

    pages
}
