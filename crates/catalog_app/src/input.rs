use catalog_core::{FilterUpdate, Msg, NewItemForm};

/// One line of user input, parsed. `Core` commands flow into the reducer;
/// the rest are handled by the app loop directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Core(Msg),
    Help,
    Quit,
    Unknown(String),
}

/// Maps a line to a command. Filter values and numeric arguments are
/// parsed here; add-form fields are passed through as raw text because
/// validating them is the store's job.
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Core(Msg::NoOp);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "reset" => Command::Core(Msg::FiltersCleared),
        "brand" => Command::Core(Msg::FilterChanged(FilterUpdate::Brand(rest.to_owned()))),
        "category" => Command::Core(Msg::FilterChanged(FilterUpdate::Category(rest.to_owned()))),
        "price" => parse_price(rest),
        "rating" => parse_rating(rest),
        "rm" => parse_remove(rest),
        "rename" => parse_rename(rest),
        "add" => parse_add(rest),
        _ => Command::Unknown(trimmed.to_owned()),
    }
}

fn parse_price(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::Core(Msg::FilterChanged(FilterUpdate::PriceRange {
            min: 0.0,
            max: f64::INFINITY,
        }));
    }
    let mut bounds = rest.split_whitespace();
    let (Some(min), Some(max)) = (bounds.next(), bounds.next()) else {
        return Command::Unknown(format!("price {rest}"));
    };
    match (min.parse::<f64>(), max.parse::<f64>()) {
        (Ok(min), Ok(max)) => Command::Core(Msg::FilterChanged(FilterUpdate::PriceRange {
            min,
            max,
        })),
        _ => Command::Unknown(format!("price {rest}")),
    }
}

fn parse_rating(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::Core(Msg::FilterChanged(FilterUpdate::MinRating(0.0)));
    }
    match rest.parse::<f64>() {
        Ok(min_rating) => Command::Core(Msg::FilterChanged(FilterUpdate::MinRating(min_rating))),
        Err(_) => Command::Unknown(format!("rating {rest}")),
    }
}

fn parse_remove(rest: &str) -> Command {
    match rest.parse::<u64>() {
        Ok(id) => Command::Core(Msg::RemoveRequested { id }),
        Err(_) => Command::Unknown(format!("rm {rest}")),
    }
}

fn parse_rename(rest: &str) -> Command {
    let Some((id, title)) = rest.split_once(char::is_whitespace) else {
        return Command::Unknown(format!("rename {rest}"));
    };
    let title = title.trim();
    match id.parse::<u64>() {
        Ok(id) if !title.is_empty() => Command::Core(Msg::RenameRequested {
            id,
            title: title.to_owned(),
        }),
        _ => Command::Unknown(format!("rename {rest}")),
    }
}

fn parse_add(rest: &str) -> Command {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let [title, brand, category, price, rating] = fields.as_slice() else {
        return Command::Unknown(format!("add {rest}"));
    };
    Command::Core(Msg::SubmitNewItem {
        form: NewItemForm {
            title: (*title).to_owned(),
            brand: (*brand).to_owned(),
            category: (*category).to_owned(),
            price: (*price).to_owned(),
            rating: (*rating).to_owned(),
        },
    })
}
