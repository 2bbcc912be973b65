use std::time::Duration;

use eyre::Result;
use futures::future::BoxFuture;
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        marker::{MessageMarker, UserMarker},
        Id,
    },
};

pub use self::{
    controller::{Access, MenuConfig, MenuController},
    controls::{visible_controls, Control, Controls},
    pages::{JumpTarget, PageIndex},
    surface::DiscordSurface,
};
use crate::{game::GameLogic, util::EmbedBuilder};

pub mod impls;

mod controller;
mod controls;
mod pages;
mod surface;

#[cfg(test)]
pub(crate) mod testing;

/// A control pressed by some user on a menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    pub actor: Id<UserMarker>,
    pub control: Control,
}

/// A numeric message sent in response to a prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NumericReply {
    pub msg: Id<MessageMarker>,
    pub value: i64,
}

/// Everything a renderer may look at while building a page.
#[derive(Copy, Clone)]
pub struct PageContext<'a> {
    pub pages: &'a PageIndex,
    pub viewer: Id<UserMarker>,
    pub game: &'a dyn GameLogic,
}

/// Delivers the controls pressed on a displayed menu.
pub trait ActionSource: Send {
    /// `None` once no more actions can arrive.
    fn next_action(&mut self) -> BoxFuture<'_, Option<ActionEvent>>;
}

/// Displays the pages of a menu.
pub trait RenderSink: Send {
    /// Replace the currently displayed page and show exactly `controls`.
    fn render(&mut self, embed: Embed, controls: Controls) -> BoxFuture<'_, Result<()>>;

    /// Remove the menu so that it can no longer be interacted with.
    fn teardown(&mut self) -> BoxFuture<'_, Result<()>>;
}

/// Sends transient messages alongside a menu.
pub trait PromptFacility: Send {
    fn send_prompt<'a>(&'a mut self, content: &'a str) -> BoxFuture<'a, Result<Id<MessageMarker>>>;

    /// Wait for a numeric message of `actor`. Non-numeric messages are
    /// skipped, `None` if nothing arrived in time.
    fn await_number(
        &mut self,
        actor: Id<UserMarker>,
        timeout: Duration,
    ) -> BoxFuture<'_, Option<NumericReply>>;

    /// Send a message that deletes itself after `delete_after`.
    fn send_notice<'a>(
        &'a mut self,
        content: &'a str,
        delete_after: Duration,
    ) -> BoxFuture<'a, Result<()>>;

    fn delete(&mut self, msg: Id<MessageMarker>) -> BoxFuture<'_, Result<()>>;
}

/// Formats single pages of a menu.
pub trait PageRenderer: Send + Sync {
    /// `None` if the amount of pages is unknown.
    fn max_pages(&self) -> Option<usize>;

    fn format_page<'a>(&'a self, ctx: PageContext<'a>) -> BoxFuture<'a, Result<EmbedBuilder>>;
}

/// A menu variant, combining a renderer with the controls it offers.
pub trait Menu: Send + Sync {
    type Renderer: PageRenderer;

    fn renderer(&self) -> &Self::Renderer;

    fn controls(&self, max_pages: Option<usize>) -> Controls;

    /// Confirmation shown after selecting the current page.
    fn selection_notice(&self, _ctx: PageContext<'_>) -> Option<String> {
        None
    }
}
