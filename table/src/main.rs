use std::io::{self, BufRead};

use anyhow::{Context as _, Result};
use catalog::auxiliary::group_by;
use catalog::sections::{assemble, Catalog};
use tracing::{info, warn};

use crate::command::Command;
use crate::view::ViewState;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = config::load().context("Failed to load config")?;
    info!("App config: {:?}", config);

    let products = dataset::products().context("Failed to load product dataset")?;
    let catalog = group_by(products, |product| product.category.clone());

    let mut view = ViewState::default()
        .with_search(config.view.search_text)
        .with_stock_only(config.view.only_in_stock);
    print!("{}", render_view(&catalog, &view));

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input line")?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                view = command.apply(view);
                print!("{}", render_view(&catalog, &view));
            }
            Err(err) => warn!("{err}"),
        }
    }

    Ok(())
}

fn render_view(catalog: &Catalog, view: &ViewState) -> String {
    render::render_table(&assemble(catalog, &view.criteria()))
}

mod command;
mod config;
mod dataset;
mod render;
mod style;
mod view;
