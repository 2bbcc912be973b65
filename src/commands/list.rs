use std::sync::Arc;

use eyre::{Result, WrapErr};
use twilight_model::channel::Message;

use super::{numbered, start_menu};
use crate::{active::impls::PokeListMenu, core::Context, util::ChannelExt};

pub async fn list(ctx: Arc<Context>, msg: &Message) -> Result<()> {
    let author = msg.author.id;
    let target = msg.mentions.first().map_or(author, |user| user.id);

    // Loads the author's locale into the store
    ctx.store
        .user(author)
        .await
        .wrap_err("failed to get author data")?;

    let data = ctx
        .store
        .user(target)
        .await
        .wrap_err("failed to get user data")?;

    if data.pokemon.is_empty() {
        let content = if target == author {
            "You haven't caught any pokémon yet."
        } else {
            "That user hasn't caught any pokémon yet."
        };

        return msg.plain_message(&ctx, content).await;
    }

    let menu = PokeListMenu::new(numbered(data.pokemon), target == author);
    start_menu(ctx, msg, menu);

    Ok(())
}
