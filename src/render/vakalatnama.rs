use super::common::{
    body, bullet, case_number, court_caption, heading, justified, party_line, sanitize_filename,
    signature, spacer, titled_name, versus, Body, CAPTION_SIZE,
};
use super::{date_or_today, Template};
use crate::clock::Clock;
use crate::model::{Block, PageGeometry};
use crate::record::VakalatnamaRecord;

/// Pronoun forms for a single or joint appointment.
struct Voice {
    subject: &'static str,
    /// Subject in mid-sentence position
    inner: &'static str,
    object: &'static str,
    possessive: &'static str,
}

static SINGULAR: Voice = Voice {
    subject: "I",
    inner: "I",
    object: "me",
    possessive: "my",
};

static PLURAL: Voice = Voice {
    subject: "We",
    inner: "we",
    object: "us",
    possessive: "our",
};

impl VakalatnamaRecord {
    fn voice(&self) -> &'static Voice {
        if self.is_plural() {
            &PLURAL
        } else {
            &SINGULAR
        }
    }
}

impl Template for VakalatnamaRecord {
    fn geometry(&self) -> PageGeometry {
        PageGeometry::from_inches(1.0, 1.0, 1.5, 1.0)
    }

    fn blocks(&self, clock: &Clock) -> Vec<Block> {
        let voice = self.voice();
        let mut out = Body::new();

        out.push(court_caption(&self.court));
        out.push(heading("VAKALATNAMA", CAPTION_SIZE));
        out.push(case_number(&self.case_no));
        out.push(party_line(&titled_name(&self.p_title, &self.petitioner), &self.p_role));
        out.push(versus("VERSUS"));
        out.push(party_line(&titled_name(&self.d_title, &self.defendant), &self.d_role));
        out.push(spacer());

        out.push(
            justified(format!(
                "{}, {}, residing at {}, the {} in the above matter, do hereby appoint and \
                 retain the following Advocate(s) to appear, act and plead for {}:",
                voice.subject, self.applicant_name, self.address, self.party_type_role, voice.object
            ))
            .spaced(0.0, 7.5),
        );
        out.extend(self.advocates.iter().map(|adv| bullet(adv)));

        out.push(
            justified(format!(
                "{} hereby authorise the said Advocate(s) to file, sign and verify all \
                 applications, petitions, affidavits and other documents, to appear and conduct \
                 the case on {} behalf, to compromise, withdraw or otherwise deal with the case \
                 as may be deemed fit, and to do all other acts, deeds and things necessary for \
                 the proper conduct of the case.",
                voice.subject, voice.possessive
            ))
            .spaced(7.5, 7.5),
        );
        out.push(
            justified(format!(
                "In witness whereof {} have signed this Vakalatnama on {}.",
                voice.inner,
                date_or_today(&self.witness_date, clock)
            ))
            .spaced(0.0, 15.0),
        );

        for name in self.executants() {
            out.push(spacer());
            out.extend(signature(name, Some("(Executant)")));
        }

        out.push(spacer());
        out.push(body("Accepted:").spaced(15.0, 10.0));
        for advocate in &self.advocates {
            out.extend(signature(advocate, Some("(Advocate)")));
        }

        out.into_blocks()
    }

    fn filename(&self, _clock: &Clock) -> String {
        format!(
            "Vakalatnama_{}.docx",
            sanitize_filename(&self.applicant_name, "Document")
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

    fn sample() -> VakalatnamaRecord {
        VakalatnamaRecord {
            court: "Civil Court".into(),
            case_no: "45/2026".into(),
            petitioner: "Rita Dias".into(),
            p_role: "Petitioner".into(),
            defendant: "State".into(),
            d_role: "Respondent".into(),
            appointment_type: "I".into(),
            applicant_name: "Rita Dias".into(),
            address: "Fatorda, Goa".into(),
            party_type_role: "Petitioner".into(),
            advocates: vec!["Adv. One".into(), "Adv. Two".into()],
            extra_executant_names: vec!["Anil Dias".into()],
            witness_date: "05/10/2026".into(),
            ..Default::default()
        }
    }

    fn texts(record: &VakalatnamaRecord) -> Vec<String> {
        record.blocks(&clock()).iter().map(Block::plain_text).collect()
    }

    #[test]
    fn test_singular_voice() {
        let texts = texts(&sample());
        assert_eq!(texts[1], "VAKALATNAMA");
        assert!(texts.iter().any(|t| t.starts_with("I, Rita Dias, residing at Fatorda, Goa")
            && t.ends_with("plead for me:")));
        assert!(texts.iter().any(|t| t.contains("on my behalf")));
        assert!(texts
            .iter()
            .any(|t| t == "In witness whereof I have signed this Vakalatnama on 05/10/2026."));
    }

    #[test]
    fn test_plural_voice() {
        let record = VakalatnamaRecord {
            appointment_type: "We".into(),
            ..sample()
        };
        let texts = texts(&record);
        assert!(texts.iter().any(|t| t.starts_with("We, Rita Dias") && t.ends_with("for us:")));
        assert!(texts.iter().any(|t| t.starts_with("We hereby authorise") && t.contains("our behalf")));
        assert!(texts.iter().any(|t| t.starts_with("In witness whereof we have")));
    }

    #[test]
    fn test_signatures_in_order() {
        let texts = texts(&sample());
        let position = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
        let accepted = position("Accepted:");
        let executants: Vec<usize> = texts
            .iter()
            .enumerate()
            .filter(|(_, t)| *t == "(Executant)")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(executants.len(), 2);
        assert!(executants.iter().all(|&i| i < accepted));
        assert_eq!(texts[executants[1] - 1], "Anil Dias");
        assert_eq!(texts.iter().filter(|t| *t == "(Advocate)").count(), 2);
        assert!(position("Adv. Two") > accepted);
    }

    #[test]
    fn test_no_advocates() {
        let record = VakalatnamaRecord {
            advocates: Vec::new(),
            ..sample()
        };
        let texts = texts(&record);
        assert!(!texts.iter().any(|t| t.contains('\u{2022}')));
        assert_eq!(texts.last().map(String::as_str), Some("Accepted:"));
    }

    #[test]
    fn test_filename() {
        assert_eq!(sample().filename(&clock()), "Vakalatnama_Rita_Dias.docx");
    }
}
