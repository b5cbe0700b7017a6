//! Frontend Models
//!
//! Data structures matching the backend's JSON. The backend is loose about
//! numbers (prices often arrive as strings), so numeric fields accept both.

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Catalog product (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de_string")]
    pub id: String,
    pub name: String,
    #[serde(rename = "unitPrice", deserialize_with = "de_f64")]
    pub unit_price: f64,
}

/// Order lifecycle status. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::InProgress, OrderStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(OrderStatus::Pending),
            "In Progress" | "InProgress" => Some(OrderStatus::InProgress),
            "Completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// One product line inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Product id
    #[serde(deserialize_with = "de_string")]
    pub id: String,
    pub name: String,
    #[serde(rename = "unitPrice", deserialize_with = "de_f64")]
    pub unit_price: f64,
    #[serde(deserialize_with = "de_u32")]
    pub qty: u32,
    #[serde(rename = "totalPrice", deserialize_with = "de_f64")]
    pub total_price: f64,
}

impl OrderLineItem {
    pub fn new(product: &Product, qty: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            qty,
            total_price: product.unit_price * f64::from(qty),
        }
    }

    /// Change the quantity, keeping `total_price` in step.
    pub fn set_qty(&mut self, qty: u32) {
        self.qty = qty;
        self.total_price = self.unit_price * f64::from(qty);
    }
}

/// Full order as returned by `GET /api/orders/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "de_string")]
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, rename = "createdAt", deserialize_with = "de_opt_date")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_status")]
    pub status: OrderStatus,
    #[serde(default, rename = "products")]
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Order day, falling back to the record's creation time
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.or(self.created_at)
    }
}

/// Order row as returned by `GET /api/orders`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderSummary {
    #[serde(deserialize_with = "de_string")]
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, rename = "createdAt", deserialize_with = "de_opt_date")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_u64")]
    pub products_number: u64,
    #[serde(default, deserialize_with = "de_f64")]
    pub final_price: f64,
    #[serde(default, deserialize_with = "de_status")]
    pub status: OrderStatus,
}

impl OrderSummary {
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.or(self.created_at)
    }

    pub fn display_number(&self) -> &str {
        self.order_number.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }
}

/// Body of `POST /api/orders` and `PUT /api/orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub id: String,
    pub order_number: String,
    pub products_number: u64,
    pub final_price: f64,
    pub status: OrderStatus,
    pub products: Vec<LineItemPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
    pub total_price: f64,
    pub order_id: String,
}

// ========================
// Formatting
// ========================

/// `DD/MM/YYYY`, or an empty string when the backend sent no date
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()
}

/// Two decimals with a currency sign, e.g. `$35.00`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Round to whole cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accepts `2024-03-05` as well as RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| raw.get(..10).and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()))
}

// ========================
// Lenient Deserializers
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
}

fn de_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Loose::deserialize(deserializer)? {
        Loose::Number(n) => Ok(n),
        Loose::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid number: {:?}", s))),
    }
}

fn de_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = de_f64(deserializer)?;
    if n.fract() != 0.0 || n < 0.0 || n >= u64::MAX as f64 {
        return Err(de::Error::custom(format!("invalid count: {}", n)));
    }
    Ok(n as u64)
}

fn de_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = de_u64(deserializer)?;
    u32::try_from(n).map_err(|_| de::Error::custom(format!("invalid count: {}", n)))
}

fn de_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Loose::deserialize(deserializer)? {
        Loose::Number(n) if n.fract() == 0.0 => Ok(format!("{}", n as i64)),
        Loose::Number(n) => Ok(n.to_string()),
        Loose::Text(s) => Ok(s),
    }
}

/// Unknown status strings read as `Pending` rather than failing the whole list.
fn de_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OrderStatus, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(OrderStatus::parse).unwrap_or_default())
}

fn de_opt_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}
