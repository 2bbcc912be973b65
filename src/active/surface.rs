use std::{sync::Arc, time::Duration};

use eyre::{Result, WrapErr};
use futures::{future::BoxFuture, StreamExt};
use twilight_gateway::Event;
use twilight_model::{
    channel::message::embed::Embed,
    gateway::payload::incoming::MessageCreate,
    id::{
        marker::{ChannelMarker, MessageMarker, UserMarker},
        Id,
    },
};
use twilight_standby::future::WaitForEventStream;

use super::{ActionEvent, ActionSource, Control, Controls, NumericReply, PromptFacility, RenderSink};
use crate::core::Context;

/// Displays a menu as a message in a channel with its controls as reactions.
pub struct DiscordSurface {
    ctx: Arc<Context>,
    channel: Id<ChannelMarker>,
    msg: Option<Id<MessageMarker>>,
    shown: Controls,
    reactions: Option<WaitForEventStream>,
    delete_message_after: bool,
}

impl DiscordSurface {
    pub fn new(ctx: Arc<Context>, channel: Id<ChannelMarker>, delete_message_after: bool) -> Self {
        Self {
            ctx,
            channel,
            msg: None,
            shown: Controls::empty(),
            reactions: None,
            delete_message_after,
        }
    }

    async fn create(&mut self, embed: Embed, controls: Controls) -> Result<()> {
        let embeds = [embed];

        let msg = self
            .ctx
            .http
            .create_message(self.channel)
            .embeds(&embeds)?
            .await
            .wrap_err("failed to create menu message")?
            .model()
            .await
            .wrap_err("failed to deserialize menu message")?
            .id;

        self.msg = Some(msg);

        // Listen before reacting so that no early press gets lost
        let bot_id = self.ctx.bot_id();

        let stream = self.ctx.standby.wait_for_event_stream(move |event: &Event| match event {
            Event::ReactionAdd(reaction) => reaction.message_id == msg && reaction.user_id != bot_id,
            Event::ReactionRemove(reaction) => {
                reaction.message_id == msg && reaction.user_id != bot_id
            }
            _ => false,
        });

        self.reactions = Some(stream);
        self.sync_reactions(msg, controls).await
    }

    async fn update(&mut self, msg: Id<MessageMarker>, embed: Embed, controls: Controls) -> Result<()> {
        let embeds = [embed];

        self.ctx
            .http
            .update_message(self.channel, msg)
            .embeds(Some(&embeds))?
            .await
            .wrap_err("failed to update menu message")?;

        self.sync_reactions(msg, controls).await
    }

    async fn sync_reactions(&mut self, msg: Id<MessageMarker>, controls: Controls) -> Result<()> {
        let added = controls - self.shown;
        let removed = self.shown - controls;

        for control in removed.iter() {
            let emoji = control.request_reaction_type();

            self.ctx
                .http
                .delete_current_user_reaction(self.channel, msg, &emoji)
                .await
                .wrap_err("failed to remove reaction")?;

            self.shown.remove(control.flag());
        }

        for control in added.iter() {
            let emoji = control.request_reaction_type();

            self.ctx
                .http
                .create_reaction(self.channel, msg, &emoji)
                .await
                .wrap_err("failed to add reaction")?;

            self.shown.insert(control.flag());
        }

        Ok(())
    }

    async fn next_reaction(&mut self) -> Option<ActionEvent> {
        let stream = self.reactions.as_mut()?;

        loop {
            let reaction = match stream.next().await? {
                Event::ReactionAdd(event) => event.0,
                Event::ReactionRemove(event) => event.0,
                _ => continue,
            };

            if let Some(control) = Control::from_reaction(&reaction.emoji) {
                return Some(ActionEvent {
                    actor: reaction.user_id,
                    control,
                });
            }
        }
    }

    async fn remove(&mut self) -> Result<()> {
        self.reactions = None;

        let Some(msg) = self.msg.take() else {
            return Ok(());
        };

        if self.delete_message_after {
            self.ctx
                .http
                .delete_message(self.channel, msg)
                .await
                .wrap_err("failed to delete menu message")?;
        } else {
            self.ctx
                .http
                .delete_all_reactions(self.channel, msg)
                .await
                .wrap_err("failed to clear menu reactions")?;
        }

        self.shown = Controls::empty();

        Ok(())
    }

    async fn prompt(&mut self, content: &str) -> Result<Id<MessageMarker>> {
        let msg = self
            .ctx
            .http
            .create_message(self.channel)
            .content(content)?
            .await
            .wrap_err("failed to create message")?
            .model()
            .await
            .wrap_err("failed to deserialize message")?;

        Ok(msg.id)
    }

    async fn number(&mut self, actor: Id<UserMarker>, timeout: Duration) -> Option<NumericReply> {
        let reply = self
            .ctx
            .standby
            .wait_for_message(self.channel, move |event: &MessageCreate| {
                event.author.id == actor && parse_number(&event.content).is_some()
            });

        match tokio::time::timeout(timeout, reply).await {
            Ok(Ok(event)) => parse_number(&event.content).map(|value| NumericReply {
                msg: event.id,
                value,
            }),
            Ok(Err(_)) | Err(_) => None,
        }
    }
}

/// Any integer, saturating at the bounds of `i64`.
fn parse_number(content: &str) -> Option<i64> {
    let content = content.trim();

    let (negative, digits) = match content.as_bytes().first()? {
        b'-' => (true, &content[1..]),
        b'+' => (false, &content[1..]),
        _ => (false, content),
    };

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let value = digits.bytes().fold(0_i64, |value, byte| {
        let digit = i64::from(byte - b'0');

        if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        }
    });

    Some(value)
}

impl ActionSource for DiscordSurface {
    fn next_action(&mut self) -> BoxFuture<'_, Option<ActionEvent>> {
        Box::pin(self.next_reaction())
    }
}

impl RenderSink for DiscordSurface {
    fn render(&mut self, embed: Embed, controls: Controls) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            match self.msg {
                Some(msg) => self.update(msg, embed, controls).await,
                None => self.create(embed, controls).await,
            }
        })
    }

    fn teardown(&mut self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.remove())
    }
}

impl PromptFacility for DiscordSurface {
    fn send_prompt<'a>(&'a mut self, content: &'a str) -> BoxFuture<'a, Result<Id<MessageMarker>>> {
        Box::pin(self.prompt(content))
    }

    fn await_number(
        &mut self,
        actor: Id<UserMarker>,
        timeout: Duration,
    ) -> BoxFuture<'_, Option<NumericReply>> {
        Box::pin(self.number(actor, timeout))
    }

    fn send_notice<'a>(
        &'a mut self,
        content: &'a str,
        delete_after: Duration,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let msg = self.prompt(content).await?;
            let ctx = Arc::clone(&self.ctx);
            let channel = self.channel;

            tokio::spawn(async move {
                tokio::time::sleep(delete_after).await;

                if let Err(err) = ctx.http.delete_message(channel, msg).await {
                    warn!(?err, "Failed to delete notice");
                }
            });

            Ok(())
        })
    }

    fn delete(&mut self, msg: Id<MessageMarker>) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.ctx
                .http
                .delete_message(self.channel, msg)
                .await
                .wrap_err("failed to delete message")?;

            Ok(())
        })
    }
}
