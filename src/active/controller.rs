use std::{sync::Arc, time::Duration};

use eyre::{Result, WrapErr};
use smallvec::{smallvec, SmallVec};
use tokio::time::{timeout_at, Instant};
use twilight_model::id::{
    marker::{MessageMarker, UserMarker},
    Id,
};

use super::{
    ActionEvent, ActionSource, Control, Controls, JumpTarget, Menu, PageContext, PageIndex,
    PageRenderer, PromptFacility, RenderSink,
};
use crate::game::GameLogic;

const JUMP_PROMPT: &str = "Please select the Pokémon ID number to jump to.";
const JUMP_END_NOTICE: &str = "Invalid Pokémon ID, jumping to the end.";
const JUMP_START_NOTICE: &str = "Invalid Pokémon ID, jumping to the start.";

#[derive(Copy, Clone, Debug)]
pub struct MenuConfig {
    /// Inactivity after which the menu stops.
    pub idle_timeout: Duration,
    /// How long to wait for the reply to a jump prompt.
    pub jump_timeout: Duration,
    /// How long notices stay visible.
    pub notice_duration: Duration,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(180),
            jump_timeout: Duration::from_secs(10),
            notice_duration: Duration::from_secs(5),
        }
    }
}

/// Users that may operate a menu.
#[derive(Clone, Debug)]
pub struct Access {
    author: Id<UserMarker>,
    privileged: SmallVec<[Id<UserMarker>; 2]>,
}

impl Access {
    pub fn new(author: Id<UserMarker>, privileged: &[Id<UserMarker>]) -> Self {
        Self {
            author,
            privileged: SmallVec::from_slice(privileged),
        }
    }

    pub fn author(&self) -> Id<UserMarker> {
        self.author
    }

    pub fn allows(&self, actor: Id<UserMarker>) -> bool {
        self.author == actor || self.privileged.contains(&actor)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuState {
    Active,
    Stopped,
}

/// What handling a single action resulted in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Unauthorized actor, hidden control, or the menu already stopped.
    Ignored,
    Rendered,
    /// The action was processed but nothing needed to be displayed.
    Unchanged,
    Selected,
    Stopped,
}

pub struct MenuController<M> {
    menu: M,
    pages: PageIndex,
    state: MenuState,
    access: Access,
    game: Arc<dyn GameLogic>,
    config: MenuConfig,
}

impl<M: Menu> MenuController<M> {
    pub fn new(menu: M, access: Access, game: Arc<dyn GameLogic>) -> Self {
        let pages = PageIndex::new(menu.renderer().max_pages().unwrap_or(0));

        Self {
            menu,
            pages,
            state: MenuState::Active,
            access,
            game,
            config: MenuConfig::default(),
        }
    }

    pub fn config(self, config: MenuConfig) -> Self {
        Self { config, ..self }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }

    pub fn controls(&self) -> Controls {
        self.menu.controls(self.menu.renderer().max_pages())
    }

    /// Display the menu and handle its actions until it stops.
    pub async fn run<S>(mut self, surface: &mut S) -> Result<()>
    where
        S: ActionSource + RenderSink + PromptFacility,
    {
        if let Err(err) = self.render(surface).await {
            if let Err(err) = self.stop(surface).await {
                warn!(?err, "Failed to remove partially displayed menu");
            }

            return Err(err.wrap_err("failed to display menu"));
        }

        let mut deadline = Instant::now() + self.config.idle_timeout;

        loop {
            let event = match timeout_at(deadline, surface.next_action()).await {
                Ok(Some(event)) => event,
                Ok(None) => {
                    debug!("Menu action source ended");

                    break;
                }
                Err(_) => {
                    debug!("Menu timed out");

                    break;
                }
            };

            match self.handle(event, surface).await {
                Ok(MenuOutcome::Stopped) => return Ok(()),
                Ok(MenuOutcome::Ignored) => {}
                Ok(_) => deadline = Instant::now() + self.config.idle_timeout,
                Err(err) => warn!(control = ?event.control, ?err, "Failed to handle menu action"),
            }
        }

        self.stop(surface).await
    }

    /// Process a single action and update the displayed page accordingly.
    pub async fn handle<S>(&mut self, event: ActionEvent, surface: &mut S) -> Result<MenuOutcome>
    where
        S: RenderSink + PromptFacility,
    {
        let ActionEvent { actor, control } = event;

        if self.state == MenuState::Stopped {
            return Ok(MenuOutcome::Ignored);
        }

        if !self.access.allows(actor) {
            trace!(%actor, ?control, "Ignoring action of unauthorized user");

            return Ok(MenuOutcome::Ignored);
        }

        if !self.controls().shows(control) {
            trace!(%actor, ?control, "Ignoring hidden control");

            return Ok(MenuOutcome::Ignored);
        }

        let prev = self.pages.clone();

        match control {
            Control::First => self.pages.first(),
            Control::Previous => self.pages.previous(),
            Control::Next => self.pages.next(),
            Control::Last => self.pages.last(),
            Control::Stop => {
                self.stop(surface).await?;

                return Ok(MenuOutcome::Stopped);
            }
            Control::Select => return self.select(surface).await,
            Control::Jump => return self.jump(actor, surface).await,
        }

        self.render_or_revert(prev, surface).await?;

        Ok(MenuOutcome::Rendered)
    }

    async fn select<S: PromptFacility>(&mut self, surface: &mut S) -> Result<MenuOutcome> {
        self.game
            .select(self.access.author(), self.pages.index())
            .await
            .wrap_err("failed to select pokémon")?;

        if let Some(notice) = self.menu.selection_notice(self.page_context()) {
            if let Err(err) = surface
                .send_notice(&notice, self.config.notice_duration)
                .await
            {
                warn!(?err, "Failed to send selection notice");
            }
        }

        Ok(MenuOutcome::Selected)
    }

    async fn jump<S>(&mut self, actor: Id<UserMarker>, surface: &mut S) -> Result<MenuOutcome>
    where
        S: RenderSink + PromptFacility,
    {
        let prompt = surface
            .send_prompt(JUMP_PROMPT)
            .await
            .wrap_err("failed to send jump prompt")?;

        let mut transient: SmallVec<[Id<MessageMarker>; 2]> = smallvec![prompt];

        let res = match surface.await_number(actor, self.config.jump_timeout).await {
            Some(reply) => {
                transient.push(reply.msg);

                self.jump_to(reply.value, surface).await
            }
            None => {
                debug!(%actor, "Jump prompt timed out");

                Ok(MenuOutcome::Unchanged)
            }
        };

        for msg in transient {
            if let Err(err) = surface.delete(msg).await {
                warn!(?err, "Failed to delete transient message");
            }
        }

        res
    }

    async fn jump_to<S>(&mut self, target: i64, surface: &mut S) -> Result<MenuOutcome>
    where
        S: RenderSink + PromptFacility,
    {
        let prev = self.pages.clone();

        let notice = match self.pages.jump_to(target) {
            JumpTarget::Exact => None,
            JumpTarget::ClampedStart => Some(JUMP_START_NOTICE),
            JumpTarget::ClampedEnd => Some(JUMP_END_NOTICE),
        };

        if let Some(notice) = notice {
            if let Err(err) = surface
                .send_notice(notice, self.config.notice_duration)
                .await
            {
                warn!(?err, "Failed to send jump notice");
            }
        }

        self.render_or_revert(prev, surface).await?;

        Ok(MenuOutcome::Rendered)
    }

    /// Keeps the previously displayed position if the new page could not be shown.
    async fn render_or_revert<S: RenderSink>(&mut self, prev: PageIndex, surface: &mut S) -> Result<()> {
        let res = self.render(surface).await;

        if res.is_err() {
            self.pages = prev;
        }

        res
    }

    fn page_context(&self) -> PageContext<'_> {
        PageContext {
            pages: &self.pages,
            viewer: self.access.author(),
            game: &*self.game,
        }
    }

    async fn render<S: RenderSink>(&mut self, surface: &mut S) -> Result<()> {
        let max_pages = self.menu.renderer().max_pages();
        self.pages.set_total(max_pages.unwrap_or(0));

        let embed = self
            .menu
            .renderer()
            .format_page(self.page_context())
            .await
            .wrap_err("failed to build page")?;

        let controls = self.menu.controls(max_pages);

        surface
            .render(embed.build(), controls)
            .await
            .wrap_err("failed to render page")
    }

    async fn stop<S: RenderSink>(&mut self, surface: &mut S) -> Result<()> {
        self.state = MenuState::Stopped;

        surface
            .teardown()
            .await
            .wrap_err("failed to tear down menu")
    }
}
