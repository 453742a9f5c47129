//! Fully populated records: every value appears verbatim, in reading order.

use chrono::NaiveDate;
use courtdocx::{generate_from_json, GenerateOptions, OoxmlContainer};

fn paragraph_texts(kind: &str, json: &str) -> Vec<String> {
    let options =
        GenerateOptions::default().with_today(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
    let doc = generate_from_json(kind, json, &options).unwrap();
    let container = OoxmlContainer::from_bytes(doc.data).unwrap();
    container.verify().unwrap();
    container.paragraph_texts().unwrap()
}

/// Each value must occur after the previous one, within a paragraph or in a
/// later one.
fn assert_in_order(texts: &[String], expected: &[&str]) {
    let mut para = 0;
    let mut offset = 0;
    for value in expected {
        loop {
            let text = texts
                .get(para)
                .unwrap_or_else(|| panic!("{:?} missing or out of order in {:#?}", value, texts));
            if let Some(i) = text[offset..].find(value) {
                offset += i + value.len();
                break;
            }
            para += 1;
            offset = 0;
        }
    }
}

#[test]
fn test_certified_copy_fields_in_order() {
    let json = r#"{
        "Court": "Court of Civil Judge Quepem",
        "CaseNo": "44/2023",
        "Year": "2023",
        "P_Title": "Shri",
        "Plaintiff": "Ramesh Gaonkar",
        "PRole": "Appellant",
        "D_Title": "Smt.",
        "Defendant": "Leela Naik",
        "DRole": "Opponent",
        "ApplicantType": "Plaintiff",
        "SuitType": "Regular Civil Suit",
        "SuitStatus": "decided",
        "Docs": ["Written Statement", "Order dated 3.3.2024"],
        "Applicant": "Mahesh Kamat",
        "Mobile": "9822012345",
        "Date": "2025-06-05",
        "Place": "Quepem"
    }"#;
    let texts = paragraph_texts("certified-copy", json);
    assert_in_order(
        &texts,
        &[
            "COURT OF CIVIL JUDGE QUEPEM",
            "Case No. 44/2023",
            "Shri Ramesh Gaonkar",
            "\u{2026}Appellant",
            "VERSUS",
            "Smt. Leela Naik",
            "\u{2026}Opponent",
            "APPLICATION FOR CERTIFIED COPY",
            "the Plaintiff in the Regular Civil Suit bearing Case No. 44/2023 of 2023 decided by",
            "Written Statement",
            "Order dated 3.3.2024",
            "Place: Quepem",
            "Date: 05/06/2025",
            "Mahesh Kamat",
            "9822012345",
        ],
    );
    assert_eq!(texts.last().map(String::as_str), Some("9822012345"));
}

#[test]
fn test_vakalatnama_fields_in_order() {
    let json = r#"{
        "Court": "Civil Judge Junior Division Ponda",
        "CaseNo": "9/2025",
        "P_Title": "Mrs.",
        "Petitioner": "Rita Dias",
        "PRole": "Plaintiff",
        "D_Title": "Mr.",
        "Defendant": "Rohan Dias",
        "DRole": "Defendant",
        "AppointmentType": "We",
        "ApplicantName": "Rita Dias",
        "Address": "H. No. 12, Ponda",
        "PartyTypeRole": "Plaintiff",
        "Advocates": ["Adv. Ivan Santimano", "Adv. Priya Kamat"],
        "ExtraExecutants": 2,
        "ExtraExecutantNames": ["Maria Dias", "Joao Dias"],
        "WitnessDate": "2025-03-09"
    }"#;
    let texts = paragraph_texts("vakalatnama", json);
    assert_in_order(
        &texts,
        &[
            "CIVIL JUDGE JUNIOR DIVISION PONDA",
            "VAKALATNAMA",
            "Case No. 9/2025",
            "Mrs. Rita Dias",
            "\u{2026}Plaintiff",
            "VERSUS",
            "Mr. Rohan Dias",
            "\u{2026}Defendant",
            "We, Rita Dias, residing at H. No. 12, Ponda, the Plaintiff in the above matter",
            "Adv. Ivan Santimano",
            "Adv. Priya Kamat",
            "In witness whereof we have signed this Vakalatnama on 09/03/2025.",
            "Rita Dias",
            "(Executant)",
            "Maria Dias",
            "(Executant)",
            "Joao Dias",
            "(Executant)",
            "Accepted:",
            "Adv. Ivan Santimano",
            "(Advocate)",
            "Adv. Priya Kamat",
            "(Advocate)",
        ],
    );
}

#[test]
fn test_petition_fields_in_order() {
    let json = r#"{
        "court": "District Court at Margao",
        "case_no": "7/2026",
        "petitioners": [
            {"title": "Shri", "name": "Anil Kamat", "parent_relation": "Son Of",
             "parent_name": "Suresh Kamat", "age": "45", "occupation": "Trader",
             "address": "Fatorda, Margao"},
            {"title": "Smt.", "name": "Sunita Kamat", "parent_relation": "Wife Of",
             "parent_name": "Anil Kamat", "age": "40", "occupation": "Nurse",
             "address": "Borda, Margao"}
        ],
        "defendants": [
            {"title": "M/s.", "name": "Dias Builders", "parent_relation": "Through",
             "parent_name": "Rohan Dias", "age": "52", "occupation": "Builder",
             "address": "Panaji"}
        ],
        "petition_text": "First fact.\nSecond fact.",
        "place": "Salcete",
        "date": "2026-10-14"
    }"#;
    let texts = paragraph_texts("new-petition", json);
    assert_in_order(
        &texts,
        &[
            "DISTRICT COURT AT MARGAO",
            "Case No. 7/2026",
            "Shri Anil Kamat",
            "Son Of Suresh Kamat",
            "Age: 45 years, Occupation: Trader",
            "R/o Fatorda, Margao",
            "\u{2026}Petitioner No. 1",
            "Smt. Sunita Kamat",
            "Wife Of Anil Kamat",
            "Age: 40 years, Occupation: Nurse",
            "R/o Borda, Margao",
            "\u{2026}Petitioner No. 2",
            "Versus",
            "M/s. Dias Builders",
            "Through Rohan Dias",
            "Age: 52 years, Occupation: Builder",
            "R/o Panaji",
            "\u{2026}Defendant",
            "PETITION",
            "First fact.\nSecond fact.",
            "Place: Salcete",
            "Date: 14/10/2026",
            "Shri Anil Kamat",
            "Smt. Sunita Kamat",
            "VERIFICATION",
            "I, Shri Anil Kamat, Son Of Suresh Kamat, aged 45 years, occupation Trader, \
             residing at Fatorda, Margao, the Petitioner above named",
            "Hence solemnly verified on this 14th day of October 2026 at Salcete.",
            "AFFIDAVIT",
            "I, Shri Anil Kamat, Son Of Suresh Kamat",
            "Solemnly affirmed at Salcete on 14/10/2026.",
            "Shri Anil Kamat",
            "DEPONENT",
        ],
    );
}
