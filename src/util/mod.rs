pub use self::{
    builder::{EmbedBuilder, FooterBuilder},
    ext::ChannelExt,
};

pub mod builder;
pub mod constants;
pub mod datetime;

mod ext;
