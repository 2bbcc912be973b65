use std::future::ready;

use eyre::Result;
use futures::future::BoxFuture;

use crate::{
    active::{PageContext, PageRenderer},
    util::{EmbedBuilder, FooterBuilder},
};

/// One pre-formatted search result per page.
pub struct SearchPages {
    entries: Box<[String]>,
    color: u32,
}

impl SearchPages {
    pub fn new(entries: Vec<String>, color: u32) -> Self {
        Self {
            entries: entries.into_boxed_slice(),
            color,
        }
    }

    fn build_page(&self, ctx: PageContext<'_>) -> Result<EmbedBuilder> {
        let pages = ctx.pages;

        let Some(entry) = self.entries.get(pages.index()) else {
            bail!("no search result on page {}", pages.curr_page());
        };

        let footer = FooterBuilder::new(format!(
            "Page {page}/{amount}",
            page = pages.curr_page(),
            amount = pages.last_page()
        ));

        let embed = EmbedBuilder::new()
            .color(self.color)
            .description(entry.as_str())
            .footer(footer)
            .title("Pokemon Search");

        Ok(embed)
    }
}

impl PageRenderer for SearchPages {
    fn max_pages(&self) -> Option<usize> {
        Some(self.entries.len())
    }

    fn format_page<'a>(&'a self, ctx: PageContext<'a>) -> BoxFuture<'a, Result<EmbedBuilder>> {
        Box::pin(ready(self.build_page(ctx)))
    }
}
