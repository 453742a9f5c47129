//! Vakalatnama (appointment of advocate) record.

use log::warn;
use serde::{Deserialize, Serialize};

use super::certified_copy::{DEFAULT_DEFENDANT_ROLE, DEFAULT_PLAINTIFF_ROLE};
use super::{clean, clean_list, clean_or, format_date};
use crate::clock::Clock;

const DEFAULT_APPOINTMENT: &str = "I";
const DEFAULT_PARTY_ROLE: &str = "Petitioner";

/// Upper end of the extra-executant slider.
pub const MAX_EXTRA_EXECUTANTS: usize = 10;

/// Placeholder name of the extra executant at `index` (0-based).
///
/// The principal applicant is executant 1, so extras start at 2.
pub fn executant_placeholder(index: usize) -> String {
    format!("Executant {}", index + 2)
}

/// Submitted vakalatnama.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VakalatnamaForm {
    pub court: Option<String>,
    pub case_no: Option<String>,
    #[serde(rename = "P_Title")]
    pub p_title: Option<String>,
    pub petitioner: Option<String>,
    pub p_role: Option<String>,
    #[serde(rename = "D_Title")]
    pub d_title: Option<String>,
    pub defendant: Option<String>,
    pub d_role: Option<String>,
    /// `I` or `We`
    pub appointment_type: Option<String>,
    pub applicant_name: Option<String>,
    pub address: Option<String>,
    pub party_type_role: Option<String>,
    pub advocates: Vec<String>,
    /// Number of extra signatories selected on the slider
    pub extra_executants: Option<usize>,
    pub extra_executant_names: Vec<String>,
    pub witness_date: Option<String>,
}

/// Resolved vakalatnama.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VakalatnamaRecord {
    pub court: String,
    pub case_no: String,
    #[serde(rename = "P_Title")]
    pub p_title: String,
    pub petitioner: String,
    pub p_role: String,
    #[serde(rename = "D_Title")]
    pub d_title: String,
    pub defendant: String,
    pub d_role: String,
    pub appointment_type: String,
    pub applicant_name: String,
    pub address: String,
    pub party_type_role: String,
    pub advocates: Vec<String>,
    pub extra_executant_names: Vec<String>,
    pub witness_date: String,
}

impl VakalatnamaForm {
    /// Apply defaults and normalize every field.
    ///
    /// The extra executant list is padded with placeholders up to
    /// `ExtraExecutants`; blank names are replaced in place.
    pub fn resolve(&self, clock: &Clock) -> VakalatnamaRecord {
        let requested = self
            .extra_executants
            .unwrap_or(0)
            .max(self.extra_executant_names.len());
        let count = requested.min(MAX_EXTRA_EXECUTANTS);
        if count < requested {
            warn!(
                "{} extra executants requested, keeping the first {}",
                requested, MAX_EXTRA_EXECUTANTS
            );
        }
        let extra_executant_names = (0..count)
            .map(|i| {
                let name = self.extra_executant_names.get(i).map(String::as_str);
                clean_or(name, &executant_placeholder(i))
            })
            .collect();

        let appointment_type = match clean(self.appointment_type.as_deref()).as_str() {
            t if t.eq_ignore_ascii_case("we") => "We".to_string(),
            _ => DEFAULT_APPOINTMENT.to_string(),
        };

        VakalatnamaRecord {
            court: clean(self.court.as_deref()),
            case_no: clean(self.case_no.as_deref()),
            p_title: clean(self.p_title.as_deref()),
            petitioner: clean(self.petitioner.as_deref()),
            p_role: clean_or(self.p_role.as_deref(), DEFAULT_PLAINTIFF_ROLE),
            d_title: clean(self.d_title.as_deref()),
            defendant: clean(self.defendant.as_deref()),
            d_role: clean_or(self.d_role.as_deref(), DEFAULT_DEFENDANT_ROLE),
            appointment_type,
            applicant_name: clean(self.applicant_name.as_deref()),
            address: clean(self.address.as_deref()),
            party_type_role: clean_or(self.party_type_role.as_deref(), DEFAULT_PARTY_ROLE),
            advocates: clean_list(&self.advocates),
            extra_executant_names,
            witness_date: format_date(self.witness_date.as_deref(), clock),
        }
    }
}

impl VakalatnamaRecord {
    /// Whether the appointment is made by several executants.
    pub fn is_plural(&self) -> bool {
        self.appointment_type == "We"
    }

    /// All executants in signing order: the applicant, then the extras.
    pub fn executants(&self) -> Vec<&str> {
        std::iter::once(self.applicant_name.as_str())
            .chain(self.extra_executant_names.iter().map(String::as_str))
            .collect()
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
        let record = VakalatnamaForm::default().resolve(&clock());
        assert_eq!(record.appointment_type, "I");
        assert_eq!(record.party_type_role, "Petitioner");
        assert_eq!(record.p_role, "Petitioner");
        assert_eq!(record.d_role, "Respondent");
        assert_eq!(record.witness_date, "14/10/2026");
        assert!(record.extra_executant_names.is_empty());
        assert!(!record.is_plural());
    }

    #[test]
    fn test_extra_executants_padded() {
        let form = VakalatnamaForm {
            applicant_name: Some("Rita Dias".into()),
            extra_executants: Some(3),
            extra_executant_names: vec!["Anil Dias".into(), " ".into()],
            ..Default::default()
        };
        let record = form.resolve(&clock());
        assert_eq!(
            record.extra_executant_names,
            vec!["Anil Dias", "Executant 3", "Executant 4"]
        );
        assert_eq!(
            record.executants(),
            vec!["Rita Dias", "Anil Dias", "Executant 3", "Executant 4"]
        );
    }

    #[test]
    fn test_extra_executants_capped_at_slider_maximum() {
        let form: VakalatnamaForm =
            serde_json::from_str(r#"{"ApplicantName":"Rita","ExtraExecutants":18446744073709551615}"#)
                .unwrap();
        let record = form.resolve(&clock());
        assert_eq!(record.extra_executant_names.len(), MAX_EXTRA_EXECUTANTS);
        assert_eq!(record.extra_executant_names.last().unwrap(), "Executant 11");

        let form = VakalatnamaForm {
            extra_executant_names: (0..25).map(|i| format!("Name {}", i)).collect(),
            ..Default::default()
        };
        let record = form.resolve(&clock());
        assert_eq!(record.extra_executant_names.len(), MAX_EXTRA_EXECUTANTS);
        assert_eq!(record.extra_executant_names[9], "Name 9");
    }

    #[test]
    fn test_plural_appointment() {
        let form: VakalatnamaForm =
            serde_json::from_str(r#"{"AppointmentType":"we","Advocates":["Adv. X", ""]}"#).unwrap();
        let record = form.resolve(&clock());
        assert!(record.is_plural());
        assert_eq!(record.advocates, vec!["Adv. X"]);
    }
}
