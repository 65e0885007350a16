//! Product record representation.

use std::fmt;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

/// Stable identifier of a product.
///
/// Datasets may store ids as JSON numbers or strings; both are normalised
/// to their string form so `7` and `"7"` name the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawId")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawId> for ProductId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

/// Display price of a product, kept exactly as the dataset wrote it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(serde_json::Number),
    Label(String),
}

impl Default for Price {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// A single catalog product.
///
/// `Product` is immutable once loaded. Missing or `null` text fields in the
/// dataset become empty strings rather than load failures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawProduct")]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    price: Price,
    tags: Vec<String>,
    image: String,
}

#[derive(Deserialize)]
struct RawProduct {
    id: ProductId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<Price>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    image: Option<String>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            title: nfc(raw.title.unwrap_or_default()),
            description: nfc(raw.description.unwrap_or_default()),
            price: raw.price.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default().into_iter().map(nfc).collect(),
            image: raw.image.unwrap_or_default(),
        }
    }
}

fn nfc(s: String) -> String {
    s.nfc().collect()
}

impl Product {
    /// Creates a product with the given id and title; other fields are blank.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            title: nfc(title.into()),
            description: String::new(),
            price: Price::default(),
            tags: Vec::new(),
            image: String::new(),
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: nfc(description.into()),
            ..self
        }
    }

    pub fn with_price(self, price: Price) -> Self {
        Self { price, ..self }
    }

    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(|t| nfc(t.into())).collect(),
            ..self
        }
    }

    pub fn with_image(self, image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..self
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags joined with `", "` for display.
    pub fn tags_label(&self) -> String {
        self.tags.join(", ")
    }

    /// URI of the product image. Never fetched; shown as text.
    pub fn image(&self) -> &str {
        &self.image
    }
}
