use twilight_model::channel::message::embed::{Embed, EmbedField, EmbedThumbnail};

use crate::util::constants::RED;

use super::FooterBuilder;

#[derive(Clone, Debug)]
pub struct EmbedBuilder(Embed);

impl Default for EmbedBuilder {
    fn default() -> Self {
        Self(Embed {
            author: None,
            color: Some(RED),
            description: None,
            fields: Vec::new(),
            footer: None,
            image: None,
            kind: String::new(),
            provider: None,
            thumbnail: None,
            timestamp: None,
            title: None,
            url: None,
            video: None,
        })
    }
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> Embed {
        self.0.kind.push_str("rich");

        self.0
    }

    pub fn color(mut self, color: u32) -> Self {
        self.0.color = Some(color);

        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());

        self
    }

    pub fn fields(mut self, fields: Vec<EmbedField>) -> Self {
        self.0.fields = fields;

        self
    }

    pub fn footer(mut self, footer: FooterBuilder) -> Self {
        self.0.footer = Some(footer.build());

        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());

        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        let url = thumbnail.into();

        if !url.is_empty() {
            let thumbnail = EmbedThumbnail {
                height: None,
                width: None,
                proxy_url: None,
                url,
            };

            self.0.thumbnail = Some(thumbnail);
        }

        self
    }
}
