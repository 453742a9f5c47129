//! New-petition record with repeated party blocks.

use serde::{Deserialize, Serialize};

use super::certified_copy::DEFAULT_PLACE;
use super::{clean, clean_or, format_date};
use crate::clock::Clock;

const DEFAULT_TITLE: &str = "Mr.";
const DEFAULT_RELATION: &str = "Son Of";
const DEFAULT_AGE: &str = "30";

/// One submitted petitioner or defendant block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyForm {
    pub title: Option<String>,
    pub name: Option<String>,
    pub parent_relation: Option<String>,
    pub parent_name: Option<String>,
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
}

/// A resolved party. The default is a party with every field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Party {
    pub title: String,
    pub name: String,
    pub parent_relation: String,
    pub parent_name: String,
    pub age: String,
    pub occupation: String,
    pub address: String,
}

impl PartyForm {
    /// Apply the per-party defaults.
    pub fn resolve(&self) -> Party {
        Party {
            title: clean_or(self.title.as_deref(), DEFAULT_TITLE),
            name: clean(self.name.as_deref()),
            parent_relation: clean_or(self.parent_relation.as_deref(), DEFAULT_RELATION),
            parent_name: clean(self.parent_name.as_deref()),
            age: clean_or(self.age.as_deref(), DEFAULT_AGE),
            occupation: clean(self.occupation.as_deref()),
            address: clean(self.address.as_deref()),
        }
    }
}

impl Party {
    /// `"Mr. Name"`, or just the name when it stands alone.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.title, self.name)
        }
    }
}

/// Submitted new petition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetitionForm {
    pub court: Option<String>,
    pub case_no: Option<String>,
    pub petitioners: Vec<PartyForm>,
    pub defendants: Vec<PartyForm>,
    pub petition_text: Option<String>,
    pub place: Option<String>,
    pub date: Option<String>,
}

/// Resolved new petition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PetitionRecord {
    pub court: String,
    pub case_no: String,
    pub petitioners: Vec<Party>,
    pub defendants: Vec<Party>,
    /// Multi-line body; blank lines are kept
    pub petition_text: String,
    pub place: String,
    /// `DD/MM/YYYY`, or the value as typed
    pub date: String,
}

impl PetitionForm {
    /// Apply defaults and normalize every field, party lists included.
    pub fn resolve(&self, clock: &Clock) -> PetitionRecord {
        PetitionRecord {
            court: clean(self.court.as_deref()),
            case_no: clean(self.case_no.as_deref()),
            petitioners: self.petitioners.iter().map(PartyForm::resolve).collect(),
            defendants: self.defendants.iter().map(PartyForm::resolve).collect(),
            petition_text: clean(self.petition_text.as_deref()),
            place: clean_or(self.place.as_deref(), DEFAULT_PLACE),
            date: format_date(self.date.as_deref(), clock),
        }
    }
}

impl PetitionRecord {
    /// The party who verifies and swears the petition; an empty party
    /// when no petitioner was entered.
    pub fn deponent(&self) -> Party {
        self.petitioners.first().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clock() -> Clock {
        Clock::fixed(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    #[test]
    fn test_party_defaults() {
        let party = PartyForm {
            name: Some(" Ravi Naik ".into()),
            ..Default::default()
        }
        .resolve();
        assert_eq!(party.title, "Mr.");
        assert_eq!(party.name, "Ravi Naik");
        assert_eq!(party.parent_relation, "Son Of");
        assert_eq!(party.age, "30");
        assert_eq!(party.display_name(), "Mr. Ravi Naik");
    }

    #[test]
    fn test_petition_json() {
        let form: PetitionForm = serde_json::from_str(
            r#"{"court":"Civil Court","case_no":"7/2026",
                "petitioners":[{"name":"A","age":"41"},{"name":"B","title":"Mrs."}],
                "defendants":[],"petition_text":"Line 1\n\nLine 3","date":"2026-10-01"}"#,
        )
        .unwrap();
        let record = form.resolve(&clock());
        assert_eq!(record.petitioners.len(), 2);
        assert_eq!(record.petitioners[0].age, "41");
        assert_eq!(record.petitioners[1].title, "Mrs.");
        assert!(record.defendants.is_empty());
        assert_eq!(record.petition_text, "Line 1\n\nLine 3");
        assert_eq!(record.place, "Margao");
        assert_eq!(record.date, "01/10/2026");
        assert_eq!(record.deponent().name, "A");
    }

    #[test]
    fn test_deponent_without_petitioners() {
        let record = PetitionForm::default().resolve(&clock());
        let deponent = record.deponent();
        assert_eq!(deponent.name, "");
        assert_eq!(deponent.display_name(), "");
        assert_eq!(deponent, Party::default());
        assert_eq!(deponent.parent_relation, "");
        assert_eq!(deponent.age, "");
    }
}
