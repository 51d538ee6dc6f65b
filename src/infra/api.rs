//! Asynchronous client for the shipments REST API.
//!
//! - `GET  {base}/api/shipments` lists every shipment.
//! - `POST {base}/api/shipments` creates one; the response body is ignored.
//!
//! Records are validated here so the rest of the crate only sees typed
//! `Shipment`s. Malformed entries are skipped with a warning.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    Coords, NewShipment, RouteEndpoints, Shipment, ShipmentStatus, TransportType,
};

const SHIPMENTS_PATH: &str = "api/shipments";
const USER_AGENT: &str = concat!("orbit-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ShipmentApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("api error: {0}")]
    Api(String),
}

/// Remote operations the dashboard depends on.
#[async_trait]
pub trait ShipmentApi: Send + Sync {
    async fn list_shipments(&self) -> Result<Vec<Shipment>, ShipmentApiError>;
    async fn create_shipment(&self, order: &NewShipment) -> Result<(), ShipmentApiError>;
}

#[derive(Clone, Debug)]
pub struct ShipmentClient {
    http: Client,
    base_url: Url,
}

impl ShipmentClient {
    pub fn new(base: &str) -> Result<Self, ShipmentApiError> {
        let base_url = normalize_base_url(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    fn shipments_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join(SHIPMENTS_PATH)
    }
}

#[async_trait]
impl ShipmentApi for ShipmentClient {
    async fn list_shipments(&self) -> Result<Vec<Shipment>, ShipmentApiError> {
        let url = self.shipments_url()?;
        debug!(%url, "requesting shipments");
        let body: serde_json::Value = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        parse_shipments(body)
    }

    async fn create_shipment(&self, order: &NewShipment) -> Result<(), ShipmentApiError> {
        let url = self.shipments_url()?;
        debug!(%url, id = %order.id, "posting new shipment");
        self.http
            .post(url)
            .json(order)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Parses the base URL and guarantees a trailing slash so relative joins land
/// beneath any path prefix.
pub fn normalize_base_url(base: &str) -> Result<Url, url::ParseError> {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{trimmed}/"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShipmentsBody {
    List(Vec<serde_json::Value>),
    Envelope { data: Vec<serde_json::Value> },
}

/// Decodes a list response, accepting a bare array or a `{"data": [...]}`
/// envelope. Entries that fail validation are dropped.
pub fn parse_shipments(body: serde_json::Value) -> Result<Vec<Shipment>, ShipmentApiError> {
    if !body.is_array() && !body.is_object() {
        return Err(ShipmentApiError::Api(format!(
            "expected a list of shipments, got {body}"
        )));
    }
    let entries = match serde_json::from_value::<ShipmentsBody>(body)? {
        ShipmentsBody::List(entries) | ShipmentsBody::Envelope { data: entries } => entries,
    };

    let total = entries.len();
    let shipments = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match parse_entry(entry) {
            Ok(shipment) => Some(shipment),
            Err(reason) => {
                warn!(index, "skipping malformed shipment record: {reason}");
                None
            }
        })
        .collect::<Vec<_>>();

    if shipments.len() != total {
        debug!(kept = shipments.len(), total, "dropped invalid shipment records");
    }
    Ok(shipments)
}

fn parse_entry(entry: serde_json::Value) -> Result<Shipment, String> {
    let dto = serde_json::from_value::<ShipmentDto>(entry).map_err(|err| err.to_string())?;
    Shipment::try_from(dto)
}

#[derive(Debug, Deserialize)]
struct ShipmentDto {
    #[serde(deserialize_with = "string_from_json")]
    id: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    destination: Option<String>,
    coords: PointDto,
    #[serde(default)]
    route: Option<RouteDto>,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default, rename = "type")]
    transport: Option<String>,
    #[serde(default, rename = "fechaEntrega", alias = "deliveryDate")]
    delivery_date: Option<String>,
    #[serde(default, rename = "descripcion", alias = "description")]
    description: Option<String>,
}

/// Leaflet accepts both `[lat, lng]` pairs and `{lat, lng}` objects, so the
/// API emits either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointDto {
    Pair([f64; 2]),
    Object {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
    },
}

impl From<PointDto> for Coords {
    fn from(point: PointDto) -> Self {
        match point {
            PointDto::Pair([lat, lng]) => Coords::new(lat, lng),
            PointDto::Object { lat, lng } => Coords::new(lat, lng),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteDto {
    start: PointDto,
    end: PointDto,
}

impl TryFrom<ShipmentDto> for Shipment {
    type Error = String;

    fn try_from(dto: ShipmentDto) -> Result<Self, Self::Error> {
        let id = dto.id.trim().to_string();
        if id.is_empty() {
            return Err("empty id".to_string());
        }

        let coords = Coords::from(dto.coords);
        if !coords.is_valid() {
            return Err(format!("{id}: coordinates out of range ({}, {})", coords.lat, coords.lng));
        }

        let route = match dto.route {
            Some(route) => {
                let endpoints = RouteEndpoints {
                    start: route.start.into(),
                    end: route.end.into(),
                };
                if endpoints.start.is_valid() && endpoints.end.is_valid() {
                    Some(endpoints)
                } else {
                    warn!(%id, "ignoring route with out-of-range endpoints");
                    None
                }
            }
            None => None,
        };

        Ok(Shipment {
            status: ShipmentStatus::from_label(dto.status.as_deref().unwrap_or_default()),
            origin: dto.origin.unwrap_or_default(),
            destination: dto.destination.unwrap_or_default(),
            coords,
            route,
            progress: dto.progress.filter(|p| p.is_finite()).unwrap_or(0.0).clamp(0.0, 100.0),
            transport: dto
                .transport
                .as_deref()
                .and_then(|raw| raw.parse::<TransportType>().ok()),
            delivery_date: dto.delivery_date,
            description: dto.description,
            id,
        })
    }
}

fn string_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}
