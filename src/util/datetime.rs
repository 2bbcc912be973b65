use time::{format_description::FormatItem, macros::format_description};

pub const NAIVE_DATETIME_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
