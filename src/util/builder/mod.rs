pub use self::{embed::EmbedBuilder, footer::FooterBuilder};

mod embed;
mod footer;
