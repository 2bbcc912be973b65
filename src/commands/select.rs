use std::sync::Arc;

use eyre::{Result, WrapErr};
use twilight_model::channel::Message;

use super::numbered;
use crate::{
    active::impls::selected_content, core::Context, game::GameLogic, util::ChannelExt,
};

pub async fn select(ctx: Arc<Context>, msg: &Message, args: &str) -> Result<()> {
    let Ok(sid) = args.parse::<usize>() else {
        return msg
            .plain_message(&ctx, "Please specify the ID of the pokémon to select.")
            .await;
    };

    let author = msg.author.id;

    let data = ctx
        .store
        .user(author)
        .await
        .wrap_err("failed to get user data")?;

    let pokemon = numbered(data.pokemon);

    let Some(index) = pokemon.iter().position(|pokemon| pokemon.sid == sid) else {
        let content = format!("You don't have a pokémon with ID {sid}.");

        return msg.plain_message(&ctx, &content).await;
    };

    ctx.store.select(author, index).await?;

    let name = ctx.store.display_name(&pokemon[index].name, author);
    let content = selected_content(&name, sid);

    msg.plain_message(&ctx, &content).await
}
