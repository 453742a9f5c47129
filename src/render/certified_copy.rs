use super::common::{
    body, bullet, case_number, court_caption, heading, labelled, party_line, recital,
    sanitize_filename, signature, titled_name, versus, Body, BODY_SIZE,
};
use super::{date_or_today, Template};
use crate::clock::Clock;
use crate::model::{Alignment, Block, PageGeometry};
use crate::record::CertifiedCopyRecord;

impl CertifiedCopyRecord {
    fn status_phrase(&self) -> &'static str {
        if self.is_decided() {
            "decided by"
        } else {
            "pending before"
        }
    }
}

impl Template for CertifiedCopyRecord {
    fn geometry(&self) -> PageGeometry {
        PageGeometry::from_inches(1.2, 1.0, 2.0, 1.0)
    }

    fn blocks(&self, clock: &Clock) -> Vec<Block> {
        let mut out = Body::new();

        out.push(court_caption(&self.court));
        out.push(case_number(&self.case_no));
        out.push(party_line(&titled_name(&self.p_title, &self.plaintiff), &self.p_role));
        out.push(versus("VERSUS"));
        out.push(party_line(&titled_name(&self.d_title, &self.defendant), &self.d_role));

        out.push(heading("APPLICATION FOR CERTIFIED COPY", BODY_SIZE));
        out.push(body("The Applicant above named most respectfully submits as under:").spaced(0.0, 10.0));
        out.push(recital(
            1,
            &format!(
                "That the Applicant is the {} in the {} bearing Case No. {} of {} {} this Hon'ble Court.",
                self.applicant_type,
                self.suit_type,
                self.case_no,
                self.year,
                self.status_phrase()
            ),
        ));
        out.push(recital(
            2,
            "That the Applicant requires a certified copy of the following document(s):",
        ));
        out.extend(self.docs.iter().map(|doc| bullet(doc)));
        out.push(
            recital(
                3,
                "That the Applicant prays that this Hon'ble Court may be pleased to issue the \
                 certified copy/copies of the aforesaid document(s) to the Applicant at the earliest.",
            )
            .spaced(7.5, 15.0),
        );

        out.push(labelled("Place", &self.place));
        out.push(labelled("Date", &date_or_today(&self.date, clock)).spaced(0.0, 7.5));
        out.extend(signature(&self.applicant, None));
        // mobile number closes the document, blank when not given
        out.push(body(self.mobile.as_str()).aligned(Alignment::Right));

        out.into_blocks()
    }

    fn filename(&self, _clock: &Clock) -> String {
        format!(
            "Certified_Copy_{}.docx",
            sanitize_filename(&self.applicant, "Application")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clock() -> Clock {
        Clock::fixed(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks.iter().map(Block::plain_text).collect()
    }

    fn sample() -> CertifiedCopyRecord {
        CertifiedCopyRecord {
            court: "x court".into(),
            case_no: "12/2024".into(),
            year: "2024".into(),
            p_title: "Mr.".into(),
            plaintiff: "A".into(),
            p_role: "Petitioner".into(),
            defendant: "B".into(),
            d_role: "Respondent".into(),
            applicant_type: "Petitioner".into(),
            suit_type: "Civil Suit".into(),
            suit_status: "pending".into(),
            docs: vec!["Plaint".into(), "Order dated 1.1.2024".into()],
            applicant: "Ravi Naik".into(),
            date: "01/02/2024".into(),
            place: "Margao".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_layout_order() {
        let blocks = sample().blocks(&clock());
        let texts = texts(&blocks);
        assert_eq!(texts[0], "X COURT");
        assert_eq!(texts[1], "Case No. 12/2024");
        assert_eq!(texts[2], "Mr. A\t\u{2026}Petitioner\n");
        assert_eq!(texts[3], "VERSUS");
        assert_eq!(texts[4], "B\t\u{2026}Respondent\n");
        assert_eq!(texts[5], "APPLICATION FOR CERTIFIED COPY");
        assert!(texts[7].starts_with("1.\tThat the Applicant is the Petitioner in the Civil Suit"));
        assert!(texts[7].ends_with("of 2024 pending before this Hon'ble Court."));
        assert_eq!(texts[9], "\t\u{2022} Plaint");
        assert_eq!(texts[10], "\t\u{2022} Order dated 1.1.2024");
        assert!(texts[11].starts_with("3.\t"));
        assert_eq!(texts[12], "Place: Margao");
        assert_eq!(texts[13], "Date: 01/02/2024");
        assert_eq!(texts[14], "Ravi Naik");
        assert_eq!(texts.last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_no_documents_no_bullets() {
        let record = CertifiedCopyRecord {
            docs: Vec::new(),
            ..sample()
        };
        let texts = texts(&record.blocks(&clock()));
        assert!(!texts.iter().any(|t| t.contains('\u{2022}')));
        assert!(texts[9].starts_with("3.\t"));
    }

    #[test]
    fn test_decided_status() {
        let record = CertifiedCopyRecord {
            suit_status: "decided".into(),
            ..sample()
        };
        let texts = texts(&record.blocks(&clock()));
        assert!(texts[7].ends_with("decided by this Hon'ble Court."));
    }

    #[test]
    fn test_filename() {
        assert_eq!(sample().filename(&clock()), "Certified_Copy_Ravi_Naik.docx");
    }
}
