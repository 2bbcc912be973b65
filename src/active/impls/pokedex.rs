use eyre::{Result, WrapErr};
use futures::future::BoxFuture;
use twilight_model::channel::message::embed::EmbedField;

use crate::{
    active::{PageContext, PageRenderer},
    game::DexEntry,
    util::{EmbedBuilder, FooterBuilder},
};

/// Batches of pokédex entries, each paired with its 1-based catalog position.
pub struct PokedexPages {
    batches: Box<[Box<[(usize, DexEntry)]>]>,
    color: u32,
    catalog_size: usize,
}

impl PokedexPages {
    pub fn new(batches: Vec<Vec<(usize, DexEntry)>>, catalog_size: usize, color: u32) -> Self {
        Self {
            batches: batches.into_iter().map(Vec::into_boxed_slice).collect(),
            color,
            catalog_size,
        }
    }

    async fn build_page(&self, ctx: PageContext<'_>) -> Result<EmbedBuilder> {
        let PageContext { pages, viewer, game } = ctx;

        let batch = match self.batches.get(pages.index()) {
            Some(batch) if !batch.is_empty() => batch,
            _ => bail!("no pokédex entries on page {}", pages.curr_page()),
        };

        let fields = batch
            .iter()
            .map(|(_, entry)| {
                let value = if entry.amount > 0 {
                    format!("{} caught! ✅", entry.amount)
                } else {
                    "Not caught yet! ❌".to_owned()
                };

                EmbedField {
                    inline: true,
                    name: format!("{} {}", game.display_name(&entry.name, viewer), entry.id),
                    value,
                }
            })
            .collect();

        let (first, last) = (batch[0].0, batch[batch.len() - 1].0);

        let footer = FooterBuilder::new(format!(
            "Showing {first}-{last} of {amount}.",
            amount = self.catalog_size
        ));

        let mut embed = EmbedBuilder::new()
            .color(self.color)
            .fields(fields)
            .footer(footer)
            .title("Pokédex");

        if pages.index() == 0 {
            let caught = game
                .caught_ids(viewer)
                .await
                .wrap_err("failed to get caught pokémon")?;

            let description = format!(
                "You've caught {total} out of {amount} pokémon.",
                total = caught.len(),
                amount = self.catalog_size,
            );

            embed = embed.description(description);
        }

        Ok(embed)
    }
}

impl PageRenderer for PokedexPages {
    fn max_pages(&self) -> Option<usize> {
        Some(self.batches.len())
    }

    fn format_page<'a>(&'a self, ctx: PageContext<'a>) -> BoxFuture<'a, Result<EmbedBuilder>> {
        Box::pin(self.build_page(ctx))
    }
}
