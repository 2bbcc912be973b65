use std::sync::Arc;

use eyre::{Result, WrapErr};
use itertools::Itertools;
use twilight_model::channel::Message;

use super::start_menu;
use crate::{
    active::impls::{GenericMenu, PokedexPages},
    core::{BotConfig, Context},
    game::DexEntry,
    util::ChannelExt,
};

const PER_PAGE: usize = 12;

pub async fn pokedex(ctx: Arc<Context>, msg: &Message) -> Result<()> {
    let entries = ctx
        .store
        .dex_entries(msg.author.id)
        .await
        .wrap_err("failed to get pokédex entries")?;

    if entries.is_empty() {
        return msg.plain_message(&ctx, "The pokédex is empty.").await;
    }

    let catalog_size = entries.len();
    let renderer = PokedexPages::new(batches(entries), catalog_size, BotConfig::get().embed_color);
    start_menu(ctx, msg, GenericMenu::new(renderer));

    Ok(())
}

fn batches(entries: Vec<DexEntry>) -> Vec<Vec<(usize, DexEntry)>> {
    let chunks = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (i + 1, entry))
        .chunks(PER_PAGE);

    let batches = chunks.into_iter().map(|chunk| chunk.collect()).collect();

    batches
}
