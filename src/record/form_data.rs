//! Form Collector: submitted `(name, value)` pairs to forms.
//!
//! [`FormData`] mirrors what a browser submits: repeated names for checked
//! boxes, nothing at all for unchecked boxes or disabled fields.

use super::certified_copy::CertifiedCopyForm;
use super::petition::{PartyForm, PetitionForm};
use super::vakalatnama::{executant_placeholder, VakalatnamaForm, MAX_EXTRA_EXECUTANTS};
use crate::session::{PartySide, PetitionSession};

/// Documents with a free-text detail: (checkbox, detail field, label).
const DETAILED_DOCS: [(&str, &str, &str); 7] = [
    ("cb_App", "doc_App", "Application No."),
    ("cb_IA", "doc_IA", "Interlocutory Application No."),
    ("cb_Reply", "doc_Reply", "Reply to Application"),
    ("cb_Order", "doc_Order", "Order dated"),
    ("cb_Judg", "doc_Judg", "Judgment dated"),
    ("cb_Evid", "doc_Evid", "Evidence of Witness"),
    ("cb_Exh", "doc_Exh", "Exhibit No."),
];

/// Documents without a detail: (checkbox, label).
const PLAIN_DOCS: [(&str, &str); 2] = [("doc_Plaint", "Plaint"), ("doc_WS", "Written Statement")];

const ROLE_SEPARATOR: &str = " / ";

/// Ordered multimap of submitted form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one submitted pair.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Builder form of [`append`](Self::append).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`, in submission order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether a checkbox named `name` was submitted.
    pub fn is_checked(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// Checked values of a role checkbox group, joined; `None` when none checked.
    fn joined_roles(&self, name: &str) -> Option<String> {
        let roles: Vec<&str> = self
            .get_all(name)
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .collect();
        if roles.is_empty() {
            None
        } else {
            Some(roles.join(ROLE_SEPARATOR))
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.append(name, value);
        }
        data
    }
}

/// Collect the certified-copy application form.
pub fn collect_certified_copy(fd: &FormData) -> CertifiedCopyForm {
    let mut docs: Vec<String> = PLAIN_DOCS
        .iter()
        .filter(|(checkbox, _)| fd.is_checked(checkbox))
        .map(|(_, label)| label.to_string())
        .collect();

    for (checkbox, field, label) in DETAILED_DOCS {
        if !fd.is_checked(checkbox) {
            continue;
        }
        match fd.get(field).map(str::trim) {
            Some(detail) if !detail.is_empty() => docs.push(format!("{} {}", label, detail)),
            _ => docs.push(label.to_string()),
        }
    }

    CertifiedCopyForm {
        court: fd.owned("Court"),
        case_no: fd.owned("CaseNo"),
        year: fd.owned("Year"),
        p_title: fd.owned("P_Title"),
        plaintiff: fd.owned("Plaintiff"),
        p_role: fd.joined_roles("PRole"),
        d_title: fd.owned("D_Title"),
        defendant: fd.owned("Defendant"),
        d_role: fd.joined_roles("DRole"),
        applicant_type: fd.owned("ApplicantType"),
        suit_type: fd.owned("SuitType"),
        suit_status: fd.owned("SuitStatus"),
        docs,
        applicant: fd.owned("Applicant"),
        mobile: fd.owned("Mobile"),
        date: fd.owned("Date"),
        place: fd.owned("Place"),
    }
}

/// Collect the vakalatnama form.
pub fn collect_vakalatnama(fd: &FormData) -> VakalatnamaForm {
    let extra_count = fd
        .get("ExtraExecutants")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
        .min(MAX_EXTRA_EXECUTANTS);
    let extra_executant_names = (0..extra_count)
        .map(|i| match fd.get(&format!("ExtraExec_{}", i)).map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => executant_placeholder(i),
        })
        .collect();

    VakalatnamaForm {
        court: fd.owned("Court"),
        case_no: fd.owned("CaseNo"),
        p_title: fd.owned("P_Title"),
        petitioner: fd.owned("Petitioner"),
        p_role: fd.joined_roles("PRole"),
        d_title: fd.owned("D_Title"),
        defendant: fd.owned("Defendant"),
        d_role: fd.joined_roles("DRole"),
        appointment_type: fd.owned("AppointmentType"),
        applicant_name: fd.owned("ApplicantName"),
        address: fd.owned("Address"),
        party_type_role: fd.owned("PartyTypeRole"),
        advocates: fd
            .get_all("Advocate")
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .collect(),
        extra_executants: Some(extra_count),
        extra_executant_names,
        witness_date: fd.owned("WitnessDate"),
    }
}

fn collect_parties(fd: &FormData, session: &PetitionSession, side: PartySide) -> Vec<PartyForm> {
    (0..session.count(side))
        .map(|i| PartyForm {
            title: fd.owned(&side.field_name("title", i)),
            name: fd.owned(&side.field_name("name", i)),
            parent_relation: fd.owned(&side.field_name("relation", i)),
            parent_name: fd.owned(&side.field_name("parent", i)),
            age: fd.owned(&side.field_name("age", i)),
            occupation: fd.owned(&side.field_name("occupation", i)),
            address: fd.owned(&side.field_name("address", i)),
        })
        .collect()
}

/// Collect the new-petition form; the session says how many party blocks exist.
pub fn collect_new_petition(fd: &FormData, session: &PetitionSession) -> PetitionForm {
    PetitionForm {
        court: fd.owned("Court"),
        case_no: fd.owned("CaseNo"),
        petitioners: collect_parties(fd, session, PartySide::Petitioner),
        defendants: collect_parties(fd, session, PartySide::Defendant),
        petition_text: fd.owned("PetitionText"),
        place: fd.owned("Place"),
        date: fd.owned("Date"),
    }
}
