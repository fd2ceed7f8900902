use std::fmt;

/// Identity assigned by the backing store on creation; never reused.
pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

/// Raw text fields as captured from the add-item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemForm {
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub rating: String,
}

/// Parsed and validated fields for a backing create call.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemFields {
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

/// Why an add-form submission was rejected before reaching the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
    InvalidNumber(&'static str),
    PriceNegative,
    RatingOutOfRange,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "{field} is required"),
            FormError::InvalidNumber(field) => write!(f, "{field} must be a number"),
            FormError::PriceNegative => write!(f, "price must not be negative"),
            FormError::RatingOutOfRange => write!(f, "rating must be between 0 and 5"),
        }
    }
}

impl NewItemForm {
    /// Validates the form and parses the numeric fields.
    ///
    /// Every field must be non-empty after trimming; `price` and `rating`
    /// must parse as finite numbers, with price non-negative and rating
    /// within [0, 5].
    pub fn parse(&self) -> Result<NewItemFields, FormError> {
        let title = required(&self.title, "title")?;
        let brand = required(&self.brand, "brand")?;
        let category = required(&self.category, "category")?;
        let price = number(&self.price, "price")?;
        let rating = number(&self.rating, "rating")?;

        if price < 0.0 {
            return Err(FormError::PriceNegative);
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(FormError::RatingOutOfRange);
        }

        Ok(NewItemFields {
            title,
            brand,
            category,
            price,
            rating,
        })
    }
}

fn required(raw: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

fn number(raw: &str, field: &'static str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    // "NaN" and "inf" parse as f64 but are not usable values here.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::InvalidNumber(field)),
    }
}
