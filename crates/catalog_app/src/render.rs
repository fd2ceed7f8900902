use catalog_core::{CatalogViewModel, Notice};

/// Prints the current view: notices, filter bar, then the table.
pub fn render(view: &CatalogViewModel) {
    if view.loading {
        println!("Loading catalog data...");
        return;
    }
    if let Some(message) = &view.load_error {
        println!("Failed to load data: {message}");
        return;
    }

    println!();
    match &view.notice {
        Some(Notice::MutationFailed(message)) => println!("!! {message}"),
        Some(Notice::ValidationFailed(message)) => println!("!! invalid item: {message}"),
        None => {}
    }

    render_filter_bar(view);
    render_table(view);
}

fn render_filter_bar(view: &CatalogViewModel) {
    let brand = display_or_all(&view.selection.brand);
    let category = display_or_all(&view.selection.category);
    println!(
        "Filters: brand={} category={} price=[{}, {}] rating>={}",
        brand, category, view.selection.min_price, view.selection.max_price, view.selection.min_rating
    );
    println!("  brands:     {}", view.brand_options.join(", "));
    println!("  categories: {}", view.category_options.join(", "));
    if view.price_buckets.is_empty() {
        println!("  prices:     (none match the other filters)");
    } else {
        let labels: Vec<&str> = view.price_buckets.iter().map(|bucket| bucket.label).collect();
        println!("  prices:     {}", labels.join(", "));
    }
    let ratings: Vec<&str> = view
        .rating_options
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    println!("  ratings:    {}", ratings.join(", "));
}

fn render_table(view: &CatalogViewModel) {
    println!(
        "{:<5} {:<36} {:<16} {:<16} {:>10} {:>7}",
        "ID", "TITLE", "BRAND", "CATEGORY", "PRICE", "RATING"
    );
    if view.rows.is_empty() {
        println!("No results found.");
        return;
    }
    for item in &view.rows {
        println!(
            "{:<5} {:<36} {:<16} {:<16} {:>10} {:>7}",
            item.id,
            truncated(&item.title, 36),
            truncated(&item.brand, 16),
            truncated(&item.category, 16),
            format!("${:.2}", item.price),
            format!("{:.1}", item.rating),
        );
    }
}

pub fn help() {
    println!("Commands:");
    println!("  brand [NAME]               filter by brand (no arg clears)");
    println!("  category [NAME]            filter by category (no arg clears)");
    println!("  price [MIN MAX]            filter by inclusive price range");
    println!("  rating [N]                 minimum rating threshold");
    println!("  reset                      clear all filters");
    println!("  rm ID                      delete a row");
    println!("  rename ID TITLE            retitle a row");
    println!("  add T|BRAND|CAT|PRICE|RATING   create an item");
    println!("  help, quit");
}

fn display_or_all(value: &str) -> &str {
    if value.is_empty() {
        "(all)"
    } else {
        value
    }
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut shortened: String = text.chars().take(max.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
