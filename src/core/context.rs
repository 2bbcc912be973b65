use std::sync::Arc;

use eyre::{Result, WrapErr};
use twilight_http::Client;
use twilight_model::{
    channel::Message,
    id::{marker::UserMarker, Id},
};
use twilight_standby::Standby;

use crate::game::JsonStore;

pub struct Context {
    pub http: Client,
    pub standby: Standby,
    pub store: Arc<JsonStore>,
    bot_id: Id<UserMarker>,
}

impl Context {
    pub async fn new(token: &str, store: JsonStore) -> Result<Self> {
        let http = Client::new(token.to_owned());

        let bot_id = http
            .current_user()
            .await
            .wrap_err("failed to request current user")?
            .model()
            .await
            .wrap_err("failed to deserialize current user")?
            .id;

        Ok(Self {
            http,
            standby: Standby::new(),
            store: Arc::new(store),
            bot_id,
        })
    }

    pub fn bot_id(&self) -> Id<UserMarker> {
        self.bot_id
    }

    /// Returns if a message was sent by us.
    pub fn is_own(&self, msg: &Message) -> bool {
        self.bot_id == msg.author.id
    }
}
