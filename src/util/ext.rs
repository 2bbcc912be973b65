use eyre::{Result, WrapErr};
use futures::future::BoxFuture;
use twilight_model::{
    channel::Message,
    id::{marker::ChannelMarker, Id},
};

use super::EmbedBuilder;
use crate::core::Context;

pub trait ChannelExt {
    /// Create a message inside a red embed
    fn error<'a>(&'a self, ctx: &'a Context, content: &'a str) -> BoxFuture<'a, Result<()>>;

    /// Create a message without embed; only content
    fn plain_message<'a>(&'a self, ctx: &'a Context, content: &'a str)
        -> BoxFuture<'a, Result<()>>;
}

impl ChannelExt for Id<ChannelMarker> {
    fn error<'a>(&'a self, ctx: &'a Context, content: &'a str) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let embed = EmbedBuilder::new().description(content).build();

            ctx.http
                .create_message(*self)
                .embeds(&[embed])?
                .await
                .wrap_err("failed to send error message")?;

            Ok(())
        })
    }

    fn plain_message<'a>(
        &'a self,
        ctx: &'a Context,
        content: &'a str,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            ctx.http
                .create_message(*self)
                .content(content)?
                .await
                .wrap_err("failed to send message")?;

            Ok(())
        })
    }
}

impl ChannelExt for Message {
    fn error<'a>(&'a self, ctx: &'a Context, content: &'a str) -> BoxFuture<'a, Result<()>> {
        self.channel_id.error(ctx, content)
    }

    fn plain_message<'a>(
        &'a self,
        ctx: &'a Context,
        content: &'a str,
    ) -> BoxFuture<'a, Result<()>> {
        self.channel_id.plain_message(ctx, content)
    }
}
