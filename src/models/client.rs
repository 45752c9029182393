use serde::{Deserialize, Serialize};

/// A stored client record. `id` is the SQLite-assigned surrogate key; the
/// business key is `national_id`.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub capital: f64,
}

/// Raw create body as received over the wire. Every field is optional so
/// that missing ones surface as typed validation errors rather than a serde
/// rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub capital: Option<f64>,
}

/// Validated fields for a new client, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub capital: f64,
}

/// Partial update body. The national id is the lookup key and never changes.
#[derive(Debug, Default, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub capital: Option<f64>,
}

impl ClientUpdate {
    /// Apply the supplied fields onto an existing record. Unsupplied fields
    /// keep their current value.
    pub fn merge_into(&self, client: &mut Client) {
        if let Some(name) = &self.name {
            client.name = name.clone();
        }
        if let Some(email) = &self.email {
            client.email = email.clone();
        }
        if let Some(capital) = self.capital {
            client.capital = capital;
        }
    }
}

/// Wire shape for `GET /clientes/{nationalId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub capital: f64,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            name: client.name,
            national_id: client.national_id,
            email: client.email,
            capital: client.capital,
        }
    }
}
