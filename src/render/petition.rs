use chrono::{Datelike, NaiveDate};
use log::warn;

use super::common::{
    body, case_number, court_caption, heading, justified, labelled, recital, sanitize_filename,
    signature, spacer, titled_name, versus, Body, BODY_SIZE,
};
use super::{date_or_today, Template};
use crate::clock::{Clock, DISPLAY_DATE_FORMAT};
use crate::model::{Alignment, Block, BorderMode, Cell, PageGeometry, Row, Table};
use crate::record::{Party, PetitionRecord};
use crate::session::PartySide;

/// Party details column and label column, in points.
const PARTY_COLUMNS: [f32; 2] = [276.0, 120.0];

const VERIFICATION_FALLBACK: &str = "solemnly verified on this day";

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `"solemnly verified on this 14th day of October 2026"` from a
/// `DD/MM/YYYY` date; a generic phrase when the date does not parse.
pub fn verification_phrase(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), DISPLAY_DATE_FORMAT) {
        Ok(d) => format!(
            "solemnly verified on this {}{} day of {} {}",
            d.day(),
            ordinal_suffix(d.day()),
            d.format("%B"),
            d.year()
        ),
        Err(e) => {
            warn!("verification date {:?} not understood ({}), using generic phrase", date, e);
            VERIFICATION_FALLBACK.to_string()
        }
    }
}

/// `…Petitioner No. 2`, or a bare `…Petitioner` when the side has one party.
fn party_label(side: PartySide, index: usize, total: usize) -> String {
    if total > 1 {
        format!("\u{2026}{} No. {}", side.label(), index + 1)
    } else {
        format!("\u{2026}{}", side.label())
    }
}

/// Bordered party box: particulars on the left, the label on the right.
fn party_table(party: &Party, label: String) -> Table {
    let details = vec![
        body(titled_name(&party.title, &party.name)),
        body(format!("{} {}", party.parent_relation, party.parent_name).trim_end().to_string()),
        body(format!("Age: {} years, Occupation: {}", party.age, party.occupation)),
        body(format!("R/o {}", party.address)),
    ];
    Table::with_borders(BorderMode::Single)
        .with_column_widths(PARTY_COLUMNS.to_vec())
        .row(Row::from_cells(vec![
            Cell::from_paragraphs(details),
            Cell::from_paragraphs(vec![body(label)]).aligned(Alignment::Right),
        ]))
}

fn party_tables(parties: &[Party], side: PartySide) -> Vec<Table> {
    parties
        .iter()
        .enumerate()
        .map(|(i, party)| party_table(party, party_label(side, i, parties.len())))
        .collect()
}

/// `"I, Mr. Name, Son Of Father, aged 30 years, ..."` for the deponent.
/// Particulars left blank are omitted.
fn deponent_intro(party: &Party) -> String {
    let mut parts = vec!["I".to_string()];
    let name = titled_name(&party.title, &party.name);
    if !name.is_empty() {
        parts.push(name);
    }
    if !party.parent_name.is_empty() {
        parts.push(format!("{} {}", party.parent_relation, party.parent_name));
    }
    if !party.age.is_empty() {
        parts.push(format!("aged {} years", party.age));
    }
    if !party.occupation.is_empty() {
        parts.push(format!("occupation {}", party.occupation));
    }
    if !party.address.is_empty() {
        parts.push(format!("residing at {}", party.address));
    }
    parts.join(", ")
}

impl PetitionRecord {
    fn main_body(&self, out: &mut Body, clock: &Clock) {
        out.push(court_caption(&self.court));
        out.push(case_number(&self.case_no));

        out.extend(party_tables(&self.petitioners, PartySide::Petitioner));
        out.push(versus("Versus"));
        out.extend(party_tables(&self.defendants, PartySide::Defendant));

        out.push(heading("PETITION", BODY_SIZE));
        out.push(body("MOST RESPECTFULLY SHEWETH:").spaced(0.0, 10.0));
        out.push(
            justified(self.petition_text.as_str())
                .with_line_spacing(1.5)
                .spaced(0.0, 15.0),
        );

        out.push(labelled("Place", &self.place));
        out.push(labelled("Date", &date_or_today(&self.date, clock)).spaced(0.0, 7.5));
        for petitioner in &self.petitioners {
            out.push(spacer());
            out.extend(signature(&petitioner.display_name(), Some("(Petitioner)")));
        }
    }

    fn verification(&self, out: &mut Body, clock: &Clock) {
        let deponent = self.deponent();
        let date = date_or_today(&self.date, clock);

        out.push(heading("VERIFICATION", BODY_SIZE));
        out.push(
            justified(format!(
                "{}, the Petitioner above named, do hereby state on solemn affirmation that \
                 the contents of the above petition are true and correct to the best of my \
                 knowledge, information and belief, and that I have not concealed anything \
                 material therein.",
                deponent_intro(&deponent)
            ))
            .with_line_spacing(1.5)
            .spaced(0.0, 10.0),
        );
        out.push(justified(format!("Hence {} at {}.", verification_phrase(&date), self.place)));
        out.push(spacer());
        out.extend(signature(&deponent.display_name(), Some("(Petitioner)")));
    }

    fn affidavit(&self, out: &mut Body, clock: &Clock) {
        let deponent = self.deponent();

        out.push(heading("AFFIDAVIT", BODY_SIZE));
        out.push(
            justified(format!(
                "{}, do hereby solemnly affirm and state as under:",
                deponent_intro(&deponent)
            ))
            .spaced(0.0, 10.0),
        );
        out.push(recital(
            1,
            "That I am the Petitioner in the above matter and am well acquainted with the \
             facts of the case.",
        ));
        out.push(recital(
            2,
            "That the contents of the accompanying petition have been drafted under my \
             instructions and are true and correct to my knowledge and belief.",
        ));
        out.push(recital(
            3,
            "That no part of this affidavit is false and nothing material has been concealed.",
        ));
        out.push(
            body(format!(
                "Solemnly affirmed at {} on {}.",
                self.place,
                date_or_today(&self.date, clock)
            ))
            .spaced(7.5, 15.0),
        );
        out.extend(signature(&deponent.display_name(), Some("DEPONENT")));
    }
}

impl Template for PetitionRecord {
    fn geometry(&self) -> PageGeometry {
        PageGeometry::from_inches(1.2, 1.0, 2.0, 1.0)
    }

    fn blocks(&self, clock: &Clock) -> Vec<Block> {
        let mut out = Body::new();
        self.main_body(&mut out, clock);
        out.page_break();
        self.verification(&mut out, clock);
        out.page_break();
        self.affidavit(&mut out, clock);
        out.into_blocks()
    }

    fn filename(&self, clock: &Clock) -> String {
        let first = self
            .petitioners
            .first()
            .map(|p| p.name.as_str())
            .unwrap_or_default();
        let mut parts = vec![
            "Petition".to_string(),
            sanitize_filename(first, "Document"),
        ];
        if !self.case_no.is_empty() {
            parts.push(sanitize_filename(&self.case_no, ""));
        }
        parts.push(clock.today_compact());
        format!("{}.docx", parts.join("_"))
    }
}
