use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The form fields a submission may carry. Every field is optional and
/// absent fields are left out of both documents and API output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agree_to_terms: Option<bool>,
    /// "tab1" or "tab2" in practice; not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
}

impl FormFields {
    /// Present fields as (key, value) pairs, in schema order.
    pub fn summary(&self) -> Vec<(String, String)> {
        let text = [
            ("preset", &self.preset),
            ("language", &self.language),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("gender", &self.gender),
            ("phoneNumber", &self.phone_number),
            ("email", &self.email),
            ("company", &self.company),
        ];

        let mut pairs: Vec<(String, String)> = text
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
            .collect();

        if let Some(agreed) = self.agree_to_terms {
            pairs.push(("agreeToTerms".to_string(), agreed.to_string()));
        }
        if let Some(tab) = &self.tab {
            pairs.push(("tab".to_string(), tab.clone()));
        }
        pairs
    }
}

/// A submission accepted for storage but not yet persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub fields: FormFields,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: FormFields,
    pub created_at: DateTime<Utc>,
}
