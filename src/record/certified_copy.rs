//! Certified-copy application record.

use serde::{Deserialize, Serialize};

use super::{clean, clean_list, clean_or, format_date};
use crate::clock::Clock;

pub(crate) const DEFAULT_PLACE: &str = "Margao";
pub(crate) const DEFAULT_PLAINTIFF_ROLE: &str = "Petitioner";
pub(crate) const DEFAULT_DEFENDANT_ROLE: &str = "Respondent";

/// Submitted certified-copy application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CertifiedCopyForm {
    pub court: Option<String>,
    pub case_no: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "P_Title")]
    pub p_title: Option<String>,
    pub plaintiff: Option<String>,
    /// Checked plaintiff roles, joined with " / "
    pub p_role: Option<String>,
    #[serde(rename = "D_Title")]
    pub d_title: Option<String>,
    pub defendant: Option<String>,
    pub d_role: Option<String>,
    pub applicant_type: Option<String>,
    pub suit_type: Option<String>,
    /// `pending` or `decided`
    pub suit_status: Option<String>,
    pub docs: Vec<String>,
    pub applicant: Option<String>,
    pub mobile: Option<String>,
    /// ISO date as entered
    pub date: Option<String>,
    pub place: Option<String>,
}

/// Resolved certified-copy application.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertifiedCopyRecord {
    pub court: String,
    pub case_no: String,
    pub year: String,
    #[serde(rename = "P_Title")]
    pub p_title: String,
    pub plaintiff: String,
    pub p_role: String,
    #[serde(rename = "D_Title")]
    pub d_title: String,
    pub defendant: String,
    pub d_role: String,
    pub applicant_type: String,
    pub suit_type: String,
    pub suit_status: String,
    pub docs: Vec<String>,
    pub applicant: String,
    pub mobile: String,
    /// `DD/MM/YYYY`, or the value as typed
    pub date: String,
    pub place: String,
}

impl CertifiedCopyForm {
    /// Apply defaults and normalize every field.
    pub fn resolve(&self, clock: &Clock) -> CertifiedCopyRecord {
        CertifiedCopyRecord {
            court: clean(self.court.as_deref()),
            case_no: clean(self.case_no.as_deref()),
            year: clean(self.year.as_deref()),
            p_title: clean(self.p_title.as_deref()),
            plaintiff: clean(self.plaintiff.as_deref()),
            p_role: clean_or(self.p_role.as_deref(), DEFAULT_PLAINTIFF_ROLE),
            d_title: clean(self.d_title.as_deref()),
            defendant: clean(self.defendant.as_deref()),
            d_role: clean_or(self.d_role.as_deref(), DEFAULT_DEFENDANT_ROLE),
            applicant_type: clean(self.applicant_type.as_deref()),
            suit_type: clean(self.suit_type.as_deref()),
            suit_status: clean(self.suit_status.as_deref()).to_lowercase(),
            docs: clean_list(&self.docs),
            applicant: clean(self.applicant.as_deref()),
            mobile: clean(self.mobile.as_deref()),
            date: format_date(self.date.as_deref(), clock),
            place: clean_or(self.place.as_deref(), DEFAULT_PLACE),
        }
    }
}

impl CertifiedCopyRecord {
    /// Whether the suit has already been decided.
    pub fn is_decided(&self) -> bool {
        self.suit_status == "decided"
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
    fn test_defaults() {
        let record = CertifiedCopyForm::default().resolve(&clock());
        assert_eq!(record.p_role, "Petitioner");
        assert_eq!(record.d_role, "Respondent");
        assert_eq!(record.place, "Margao");
        assert_eq!(record.date, "14/10/2026");
        assert_eq!(record.court, "");
        assert!(record.docs.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let form: CertifiedCopyForm = serde_json::from_str(
            r#"{"Court":"X COURT","CaseNo":"12/2024","P_Title":"Mr.","Plaintiff":"A",
                "PRole":"Appellant","Docs":["Order dated 1.1.2024"],"Date":"2024-02-01",
                "SuitStatus":"Decided"}"#,
        )
        .unwrap();
        let record = form.resolve(&clock());
        assert_eq!(record.case_no, "12/2024");
        assert_eq!(record.p_title, "Mr.");
        assert_eq!(record.p_role, "Appellant");
        assert_eq!(record.docs, vec!["Order dated 1.1.2024"]);
        assert_eq!(record.date, "01/02/2024");
        assert!(record.is_decided());
    }
}
