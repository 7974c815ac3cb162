use catalog::sections::Section;

use crate::style::style_for;

const NAME_COLUMN_WIDTH: usize = 16;

fn format_row(name: &str, price: &str, stocked: bool) -> String {
    let padded = format!("{:<width$}", name, width = NAME_COLUMN_WIDTH);
    format!("  {}{price}\n", style_for(stocked).paint(&padded))
}

pub fn render_table(sections: &[Section]) -> String {
    let heading = format!("  {:<width$}Price\n", "Name", width = NAME_COLUMN_WIDTH);

    sections.iter().fold(heading, |acc, section| {
        section
            .products
            .iter()
            .fold(acc + section.category + "\n", |acc, product| {
                acc + &format_row(&product.name, &product.price, product.stocked)
            })
    })
}
