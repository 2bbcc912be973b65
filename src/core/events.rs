use std::sync::Arc;

use eyre::{Report, Result};
use twilight_gateway::{Event, Shard};

use super::Context;
use crate::commands::handle_message;

pub async fn event_loop(ctx: Arc<Context>, shard: &mut Shard) {
    loop {
        let err = match shard.next_event().await {
            Ok(event) => {
                ctx.standby.process(&event);
                let ctx = Arc::clone(&ctx);

                tokio::spawn(async move {
                    if let Err(err) = handle_event(ctx, event).await {
                        error!("{:?}", err.wrap_err("Failed to handle event"));
                    }
                });

                continue;
            }
            Err(err) => err,
        };

        let is_fatal = err.is_fatal();

        error!("{:?}", Report::new(err).wrap_err("Event error"));

        if is_fatal {
            return;
        }
    }
}

async fn handle_event(ctx: Arc<Context>, event: Event) -> Result<()> {
    match event {
        Event::GatewayClose(Some(frame)) => {
            warn!(
                "Received closing frame: reason={} (code {})",
                frame.reason, frame.code,
            )
        }
        Event::GatewayClose(None) => warn!("Received closing frame"),
        Event::GatewayInvalidateSession(true) => {
            warn!("Gateway has invalidated session, but its reconnectable")
        }
        Event::GatewayInvalidateSession(false) => warn!("Gateway has invalidated session"),
        Event::GatewayReconnect => info!("Gateway requested to reconnect"),
        Event::MessageCreate(msg) => handle_message(ctx, msg.0).await,
        Event::Ready(ready) => info!("Connected as {}", ready.user.name),
        Event::Resumed => info!("Shard is resumed"),
        _ => {}
    }

    Ok(())
}
