use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

// ── Wire records ────────────────────────────────────────────────────

/// `null` decodes like an absent field: the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAge {
    Whole(u64),
    Fractional(f64),
    Text(String),
}

/// Ages arrive as integers, floats or numeric strings. Anything that is not
/// a non-negative number reads as unknown.
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let from_float = |f: f64| (f.is_finite() && f >= 0.0).then(|| f.round() as u32);
    Ok(match Option::<RawAge>::deserialize(deserializer)? {
        Some(RawAge::Whole(n)) => u32::try_from(n).ok(),
        Some(RawAge::Fractional(f)) => from_float(f),
        Some(RawAge::Text(s)) => s.trim().parse::<f64>().ok().and_then(from_float),
        None => None,
    })
}

/// A billable procedure attached to a case.
///
/// Services carry no identity of their own; a service is addressed by its
/// position in [`Case::services`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub service_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attended: bool,
}

/// A reference to a file stored outside the case record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// A patient claim as returned by `GET /api/cases?id=`.
///
/// Required fields default to empty strings when the backend omits them so a
/// sparse record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Case {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sinister_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ci_titular: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ci_patient: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub assigned_analyst_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_analyst_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgm_service_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_invoice_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_generated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_other_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_fixed_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_birth_date: Option<String>,
    #[serde(
        deserialize_with = "lenient_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub patient_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "holderCI", skip_serializing_if = "Option::is_none")]
    pub holder_ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baremo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baremo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
}

impl Case {
    /// Services on the case, empty when the backend sent none.
    pub fn services(&self) -> &[Service] {
        self.services.as_deref().unwrap_or_default()
    }

    /// Documents on the case, empty when the backend sent none.
    pub fn documents(&self) -> &[Document] {
        self.documents.as_deref().unwrap_or_default()
    }

    /// Whether `user_id` is the analyst assigned to this case.
    pub fn is_assigned_to(&self, user_id: Option<&str>) -> bool {
        match user_id {
            Some(uid) => !uid.is_empty() && self.assigned_analyst_id == uid,
            None => false,
        }
    }

    /// The patient's age: the stored value, or else computed from
    /// `patientBirthDate` (`YYYY-MM-DD`, optionally followed by a time) as of
    /// `today`.
    pub fn patient_age_on(&self, today: NaiveDate) -> Option<u32> {
        if let Some(age) = self.patient_age {
            return Some(age);
        }
        let raw = self.patient_birth_date.as_deref()?;
        let birth = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// Sum of every service amount.
    pub fn services_total(&self) -> f64 {
        self.services().iter().map(|s| s.amount).sum()
    }

    /// Sum of the amounts of attended services only.
    pub fn attended_total(&self) -> f64 {
        self.services()
            .iter()
            .filter(|s| s.attended)
            .map(|s| s.amount)
            .sum()
    }
}

// ── Partial update body ─────────────────────────────────────────────

/// Body of `PUT /api/cases?id=`: any subset of [`Case`] fields.
///
/// There is no `id`: it travels in the query string and never changes. Unset
/// fields are omitted from the JSON and left alone by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sinister_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_titular: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_patient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_analyst_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgm_service_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_invoice_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_generated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_other_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_fixed_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "holderCI", skip_serializing_if = "Option::is_none")]
    pub holder_ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baremo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
}

impl CaseUpdate {
    /// An update that replaces only the document list.
    pub fn documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Some(documents),
            ..Self::default()
        }
    }

    /// An update that replaces only the service list.
    pub fn services(services: Vec<Service>) -> Self {
        Self {
            services: Some(services),
            ..Self::default()
        }
    }

    /// True when no field is set; sending it would be a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ── Identity & display helpers ──────────────────────────────────────

/// Placeholder shown for absent optional values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render an optional text value, falling back to [`NOT_AVAILABLE`] when it is
/// missing or blank.
pub fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Render an optional amount with two decimals.
pub fn amount_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format_amount(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an amount with two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
