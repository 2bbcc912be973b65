use std::{
    collections::VecDeque,
    future::ready,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use eyre::Result;
use futures::future::{pending, BoxFuture};
use hashbrown::HashSet;
use parking_lot::Mutex;
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        marker::{MessageMarker, UserMarker},
        Id,
    },
};

use super::{ActionEvent, ActionSource, Controls, NumericReply, PromptFacility, RenderSink};
use crate::game::{GameLogic, Names};

pub fn user(id: u64) -> Id<UserMarker> {
    Id::new(id)
}

pub fn names(english: &str) -> Names {
    let mut names = Names::new();
    names.insert(Box::from("english"), Box::from(english));

    names
}

/// In-memory surface recording everything a menu does with it.
#[derive(Default)]
pub struct FakeSurface {
    pub actions: VecDeque<ActionEvent>,
    pub rendered: Vec<(Embed, Controls)>,
    pub torn_down: bool,
    /// Replies handed out to prompts, `None` simulates a timeout.
    pub replies: VecDeque<Option<i64>>,
    pub prompts: Vec<(Id<MessageMarker>, String)>,
    pub notices: Vec<String>,
    pub deleted: Vec<Id<MessageMarker>>,
    /// Time that passes before each action arrives.
    pub delay: Option<Duration>,
    /// Keep waiting instead of ending once all actions were handed out.
    pub idle: bool,
    pub fail_renders: bool,
    pub(crate) next_msg: u64,
}

impl FakeSurface {
    pub fn with_actions(actions: impl IntoIterator<Item = ActionEvent>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_replies(replies: impl IntoIterator<Item = Option<i64>>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn last_footer(&self) -> Option<String> {
        self.rendered
            .last()
            .and_then(|(embed, _)| embed.footer.as_ref())
            .map(|footer| footer.text.clone())
    }

    fn next_msg_id(&mut self) -> Id<MessageMarker> {
        self.next_msg += 1;

        Id::new(self.next_msg)
    }
}

impl ActionSource for FakeSurface {
    fn next_action(&mut self) -> BoxFuture<'_, Option<ActionEvent>> {
        Box::pin(async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            match self.actions.pop_front() {
                Some(action) => Some(action),
                None if self.idle => pending().await,
                None => None,
            }
        })
    }
}

impl RenderSink for FakeSurface {
    fn render(&mut self, embed: Embed, controls: Controls) -> BoxFuture<'_, Result<()>> {
        if self.fail_renders {
            return Box::pin(ready(Err(eyre!("failed to render"))));
        }

        self.rendered.push((embed, controls));

        Box::pin(ready(Ok(())))
    }

    fn teardown(&mut self) -> BoxFuture<'_, Result<()>> {
        self.torn_down = true;

        Box::pin(ready(Ok(())))
    }
}

impl PromptFacility for FakeSurface {
    fn send_prompt<'a>(&'a mut self, content: &'a str) -> BoxFuture<'a, Result<Id<MessageMarker>>> {
        let msg = self.next_msg_id();
        self.prompts.push((msg, content.to_owned()));

        Box::pin(ready(Ok(msg)))
    }

    fn await_number(
        &mut self,
        _actor: Id<UserMarker>,
        _timeout: Duration,
    ) -> BoxFuture<'_, Option<NumericReply>> {
        let reply = match self.replies.pop_front().flatten() {
            Some(value) => Some(NumericReply {
                msg: self.next_msg_id(),
                value,
            }),
            None => None,
        };

        Box::pin(ready(reply))
    }

    fn send_notice<'a>(
        &'a mut self,
        content: &'a str,
        _delete_after: Duration,
    ) -> BoxFuture<'a, Result<()>> {
        self.notices.push(content.to_owned());

        Box::pin(ready(Ok(())))
    }

    fn delete(&mut self, msg: Id<MessageMarker>) -> BoxFuture<'_, Result<()>> {
        self.deleted.push(msg);

        Box::pin(ready(Ok(())))
    }
}

#[derive(Default)]
pub struct FakeGame {
    caught: HashSet<u32>,
    caught_queries: AtomicUsize,
    pub selected: Mutex<Vec<(Id<UserMarker>, usize)>>,
}

impl FakeGame {
    pub fn with_caught(caught: HashSet<u32>) -> Self {
        Self {
            caught,
            ..Default::default()
        }
    }

    pub fn caught_queries(&self) -> usize {
        self.caught_queries.load(Ordering::Relaxed)
    }
}

impl GameLogic for FakeGame {
    fn total_xp_for_level(&self, level: u32) -> u64 {
        25 * level as u64
    }

    fn display_name(&self, names: &Names, _viewer: Id<UserMarker>) -> String {
        names
            .get("english")
            .map_or_else(|| "?".to_owned(), |name| name.to_string())
    }

    fn select(&self, viewer: Id<UserMarker>, index: usize) -> BoxFuture<'_, Result<()>> {
        self.selected.lock().push((viewer, index));

        Box::pin(ready(Ok(())))
    }

    fn caught_ids(&self, _viewer: Id<UserMarker>) -> BoxFuture<'_, Result<HashSet<u32>>> {
        self.caught_queries.fetch_add(1, Ordering::Relaxed);

        Box::pin(ready(Ok(self.caught.clone())))
    }
}
