use std::sync::Arc;

use twilight_model::{
    channel::Message,
    id::{marker::UserMarker, Id},
};

use crate::{
    active::{Access, DiscordSurface, Menu, MenuConfig, MenuController},
    core::{BotConfig, Context},
    game::{GameLogic, JsonStore, Pokemon},
    util::{constants::GENERAL_ISSUE, ChannelExt},
};

use self::{list::list, pokedex::pokedex, search::search, select::select};

mod list;
mod pokedex;
mod search;
mod select;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PokeCommand {
    List,
    Pokedex,
    Search,
    Select,
}

impl PokeCommand {
    fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Pokedex => "pokedex",
            Self::Search => "search",
            Self::Select => "select",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Invoke<'m> {
    cmd: PokeCommand,
    args: &'m str,
}

impl<'m> Invoke<'m> {
    /// Parse content that already had its prefix stripped.
    fn parse(content: &'m str) -> Option<Self> {
        let content = content.trim_start();

        let (name, args) = match content.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (content, ""),
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "list" | "pokemon" => PokeCommand::List,
            "pokedex" | "dex" => PokeCommand::Pokedex,
            "search" => PokeCommand::Search,
            "select" => PokeCommand::Select,
            _ => return None,
        };

        Some(Self { cmd, args })
    }
}

pub async fn handle_message(ctx: Arc<Context>, msg: Message) {
    // Ignore bots and webhooks
    if msg.author.bot || msg.webhook_id.is_some() || ctx.is_own(&msg) {
        return;
    }

    let config = BotConfig::get();

    let Some(content) = msg.content.strip_prefix(&*config.prefix) else {
        return;
    };

    let Some(invoke) = Invoke::parse(content) else {
        return;
    };

    let name = invoke.cmd.name();
    info!("{} used prefix command `{name}`", msg.author.name);

    let Invoke { cmd, args } = invoke;

    let res = match cmd {
        PokeCommand::List => list(Arc::clone(&ctx), &msg).await,
        PokeCommand::Pokedex => pokedex(Arc::clone(&ctx), &msg).await,
        PokeCommand::Search => search(Arc::clone(&ctx), &msg, args).await,
        PokeCommand::Select => select(Arc::clone(&ctx), &msg, args).await,
    };

    match res {
        Ok(()) => info!("Processed command `{name}`"),
        Err(err) => {
            if let Err(err) = msg.error(&ctx, GENERAL_ISSUE).await {
                warn!(?err, "Failed to reply with error");
            }

            let wrap = format!("Failed to process prefix command `{name}`");
            error!("{:?}", err.wrap_err(wrap));
        }
    }
}

/// Display `menu` in the channel of `msg` and let it run in the background.
fn start_menu<M>(ctx: Arc<Context>, msg: &Message, menu: M)
where
    M: Menu + 'static,
{
    let config = BotConfig::get();

    let controller = menu_controller(
        &ctx.store,
        msg.author.id,
        &config.owners,
        config.menu_config(),
        menu,
    );

    let mut surface = DiscordSurface::new(ctx, msg.channel_id, config.delete_message_after);

    tokio::spawn(async move {
        if let Err(err) = controller.run(&mut surface).await {
            error!("{:?}", err.wrap_err("Failed to run menu"));
        }
    });
}

fn menu_controller<M: Menu>(
    store: &Arc<JsonStore>,
    author: Id<UserMarker>,
    owners: &[Id<UserMarker>],
    config: MenuConfig,
    menu: M,
) -> MenuController<M> {
    let game: Arc<dyn GameLogic> = store.clone();

    MenuController::new(menu, Access::new(author, owners), game).config(config)
}

/// Assign list positions to pokémon that were stored without one.
fn numbered(mut pokemon: Vec<Pokemon>) -> Vec<Pokemon> {
    for (i, pokemon) in pokemon.iter_mut().enumerate() {
        if pokemon.sid == 0 {
            pokemon.sid = i + 1;
        }
    }

    pokemon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        active::{impls::PokeListMenu, testing::FakeSurface, ActionEvent, Control},
        game::Stats,
    };

    fn pokemon(sid: usize) -> Pokemon {
        Pokemon {
            name: Default::default(),
            level: 1,
            types: Vec::new(),
            xp: 0,
            stats: Stats::default(),
            nickname: None,
            variant: None,
            url: None,
            id: None,
            sid,
        }
    }

    #[test]
    fn test_parse_invoke() {
        let invoke = Invoke::parse("Search  pika chu ").unwrap();
        assert_eq!(invoke.cmd, PokeCommand::Search);
        assert_eq!(invoke.args, "pika chu");

        let invoke = Invoke::parse("dex").unwrap();
        assert_eq!(invoke.cmd, PokeCommand::Pokedex);
        assert_eq!(invoke.args, "");

        assert!(Invoke::parse("help").is_none());
        assert!(Invoke::parse("").is_none());
    }

    #[test]
    fn test_numbered_keeps_stored_ids() {
        let sids: Vec<_> = numbered(vec![pokemon(0), pokemon(7), pokemon(0)])
            .iter()
            .map(|pokemon| pokemon.sid)
            .collect();

        assert_eq!(sids, [1, 7, 3]);
    }

    #[tokio::test]
    async fn test_menu_controller_over_store() {
        let dir = std::env::temp_dir().join(format!("pokecord-commands-{}", std::process::id()));
        let store = Arc::new(JsonStore::new(dir, Box::default()));
        let owner = Id::new(5);

        let menu = PokeListMenu::new(numbered(vec![pokemon(0), pokemon(0)]), false);
        let mut controller =
            menu_controller(&store, Id::new(1), &[owner], MenuConfig::default(), menu);

        let mut surface = FakeSurface::default();

        let event = ActionEvent {
            actor: owner,
            control: Control::Next,
        };

        controller.handle(event, &mut surface).await.unwrap();

        assert_eq!(controller.pages().index(), 1);
        assert_eq!(surface.last_footer().as_deref(), Some("Pokémon ID: 2/2"));
    }
}
