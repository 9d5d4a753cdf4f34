// membercard/src/api.rs

//! Wire contract of the backend member-verification service.
//!
//! The service itself is an external collaborator reached over HTTP by
//! the application layer; this module only fixes the request/response
//! shapes so decoded card data can be handed over. Field names follow the
//! historical wire format: camelCase throughout except `card_mfid`.
//! Serialization derives are available under the `serde` feature.

use crate::card::CardData;

/// Verification request built from a decoded card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerifyMemberRequest {
    /// Member identifier as read off the card.
    #[cfg_attr(feature = "serde", serde(rename = "memberId"))]
    pub member_id: String,
    /// Company name as read off the card.
    #[cfg_attr(feature = "serde", serde(rename = "companyName"))]
    pub company_name: String,
    /// Member password as read off the card; empty when sector 4 was
    /// unavailable.
    pub password: String,
    /// Tag UID, uppercase hex without separators.
    pub card_mfid: String,
    /// Expiry date `DD-MM-YYYY`, possibly empty.
    #[cfg_attr(feature = "serde", serde(rename = "cardValidity"))]
    pub card_validity: String,
    /// Card tier; empty when sector 5 was unavailable.
    #[cfg_attr(feature = "serde", serde(rename = "cardType"))]
    pub card_type: String,
}

impl VerifyMemberRequest {
    /// Build a request from decoded card data. Presence is the only
    /// validation applied here; fields missing from a partial read map to
    /// empty strings and are the backend's problem to judge.
    pub fn from_card(data: &CardData) -> Self {
        Self {
            member_id: data.member_id.clone(),
            company_name: data.company_name.clone(),
            password: data.password.clone().unwrap_or_default(),
            card_mfid: data.card_mfid.clone(),
            card_validity: data.valid_upto.clone(),
            card_type: data.card_type.clone().unwrap_or_default(),
        }
    }
}

/// Verified member record, or an error message.
///
/// The backend answers with whichever of these fields it knows; absent
/// and null members both decode to the defaults.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerifyMemberResponse {
    /// Member identifier echoed back.
    #[cfg_attr(feature = "serde", serde(rename = "memberId"))]
    pub member_id: Option<String>,
    /// Company name on record.
    #[cfg_attr(feature = "serde", serde(rename = "companyName"))]
    pub company_name: Option<String>,
    /// Tag UID on record.
    pub card_mfid: Option<String>,
    /// Validity date on record.
    #[cfg_attr(feature = "serde", serde(rename = "cardValidity"))]
    pub card_validity: Option<String>,
    /// Error message, set when verification failed.
    pub message: Option<String>,
    /// Balance with the issuing company.
    #[cfg_attr(feature = "serde", serde(rename = "currentTotal"))]
    pub current_total: f64,
    /// Balance across all companies.
    #[cfg_attr(feature = "serde", serde(rename = "globalTotal"))]
    pub global_total: f64,
    /// Validity as the backend states it.
    pub validity: Option<String>,
    /// Whether the member verified.
    pub verified: Option<bool>,
    /// Whether the membership has expired.
    pub expired: Option<bool>,
    /// Company address on record.
    #[cfg_attr(feature = "serde", serde(rename = "companyAddress"))]
    pub company_address: Option<String>,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(rename = "phoneNumber"))]
    pub phone_number: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Company website.
    pub website: Option<String>,
    /// WhatsApp contact.
    #[cfg_attr(feature = "serde", serde(rename = "communicatorWhatsapp"))]
    pub whatsapp: Option<String>,
    /// Backend status code.
    pub status: Option<i32>,
}
