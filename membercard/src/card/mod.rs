// membercard/src/card/mod.rs

use std::collections::BTreeMap;

use crate::types::{CardDate, CardField};

mod report;
pub use report::OpReport;

pub mod operations;
pub mod session;
pub mod worker;

/// Decoded member data read from one card.
///
/// The primary fields (sector 3) are always present on a non-blank card;
/// the secondary ones are `None` when sector 4 or 5 did not authenticate
/// during the read ("partial data").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardData {
    /// Tag UID as uppercase hex, no separators.
    pub card_mfid: String,
    /// Member identifier.
    pub member_id: String,
    /// Company name.
    pub company_name: String,
    /// Expiry date as `DD-MM-YYYY`, or empty when unreadable.
    pub valid_upto: String,
    /// Accumulated purchase amount, sector 4.
    pub total_buy: Option<String>,
    /// Date of the last write, sector 4.
    pub last_buy_date: Option<String>,
    /// Member password, sector 4.
    pub password: Option<String>,
    /// Card tier, sector 5.
    pub card_type: Option<String>,
}

impl CardData {
    /// Field-name map in the form the verification backend consumes,
    /// including the synthetic `card_mfid` entry. Fields missing due to a
    /// partial read are omitted.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        map.insert("card_mfid", self.card_mfid.clone());
        map.insert(CardField::MemberId.key(), self.member_id.clone());
        map.insert(CardField::CompanyName.key(), self.company_name.clone());
        map.insert(CardField::ValidUpto.key(), self.valid_upto.clone());
        if let Some(v) = &self.total_buy {
            map.insert(CardField::TotalBuy.key(), v.clone());
        }
        if let Some(v) = &self.last_buy_date {
            map.insert(CardField::LastWriteDate.key(), v.clone());
        }
        if let Some(v) = &self.password {
            map.insert(CardField::Password.key(), v.clone());
        }
        if let Some(v) = &self.card_type {
            map.insert(CardField::CardType.key(), v.clone());
        }
        map
    }
}

/// Result of a successful read pass over a presented card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Member-id block was all zero: an unissued or cleared card. Success
    /// with no data, distinct from any failure.
    Blank,
    /// Decoded member data.
    Data(CardData),
}

/// Field values written when issuing a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    /// Member identifier (8 characters at most survive encoding).
    pub member_id: String,
    /// Company name.
    pub company_name: String,
    /// Member password.
    pub password: String,
    /// Membership expiry date.
    pub valid_upto: CardDate,
    /// Accumulated purchase amount as a numeric string.
    pub total_buy: String,
    /// Card tier.
    pub card_type: String,
    /// Stamped into the last-write block; callers supply the current
    /// date, the crate takes no clock dependency.
    pub write_date: CardDate,
}
