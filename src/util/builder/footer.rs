use twilight_model::channel::message::embed::EmbedFooter;

#[derive(Clone, Debug)]
pub struct FooterBuilder {
    pub icon_url: Option<String>,
    pub text: String,
}

impl FooterBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }

    pub fn build(self) -> EmbedFooter {
        EmbedFooter {
            icon_url: self.icon_url,
            proxy_icon_url: None,
            text: self.text,
        }
    }
}
