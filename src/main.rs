#[macro_use]
extern crate tracing;

#[macro_use]
extern crate eyre;

mod active;
mod commands;
mod core;
mod game;
mod util;

use std::sync::Arc;

use eyre::{Result, WrapErr};
use tokio::{runtime::Builder as RuntimeBuilder, signal};
use twilight_gateway::{Intents, Shard, ShardId};

use crate::{
    core::{event_loop, logging, BotConfig, Context},
    game::JsonStore,
};

fn main() {
    let runtime = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Could not build runtime");

    if let Err(err) = dotenv::dotenv() {
        panic!("Failed to prepare .env variables: {err}");
    }

    let _log_worker_guard = logging::init();

    if let Err(source) = runtime.block_on(async_main()) {
        error!(?source, "Critical error in main");
    }
}

async fn async_main() -> Result<()> {
    BotConfig::init().wrap_err("failed to initialize config")?;
    let config = BotConfig::get();

    let store = JsonStore::load(&config.data_path)
        .await
        .wrap_err("failed to load game data")?;

    let ctx = Context::new(&config.token, store)
        .await
        .wrap_err("failed to create context")?;

    let ctx = Arc::new(ctx);

    let intents = Intents::GUILD_MESSAGES
        | Intents::GUILD_MESSAGE_REACTIONS
        | Intents::DIRECT_MESSAGES
        | Intents::DIRECT_MESSAGE_REACTIONS
        | Intents::MESSAGE_CONTENT;

    let mut shard = Shard::new(ShardId::ONE, config.token.to_string(), intents);

    tokio::select! {
        _ = event_loop(ctx, &mut shard) => error!("Event loop ended"),
        res = signal::ctrl_c() => match res {
            Ok(_) => info!("Received Ctrl+C"),
            Err(err) => error!(?err, "Failed to await Ctrl+C"),
        }
    }

    Ok(())
}
