//! End-to-end extraction scenarios

#[cfg(test)]
mod tests {
    use crate::{parse, Extractor};
    use halfpace_domain::{MissingField, RaceTime, Sex};

    #[test]
    fn test_complete_submission() {
        let (record, missing) =
            parse("Jestem mężczyzną, mam 37 lat, mój czas na 5 km to 23 minuty.");

        assert_eq!(record.sex, Sex::Male);
        assert_eq!(record.age, Some(37));
        assert_eq!(record.five_k_time, Some(RaceTime::from_minutes_seconds(23, 0)));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_time_only_submission() {
        let (record, missing) = parse("Mój najlepszy wynik to 23:15");

        assert_eq!(missing.as_slice(), &[MissingField::Sex, MissingField::Age]);
        assert_eq!(record.five_k_time, Some(RaceTime::from_minutes_seconds(23, 15)));
    }

    #[test]
    fn test_sex_only_submission() {
        let (record, missing) = parse("jestem kobietą");

        assert_eq!(record.sex, Sex::Female);
        assert_eq!(missing.as_slice(), &[MissingField::Age, MissingField::FiveKTime]);
        assert!(record.five_k_time.is_none());
    }

    #[test]
    fn test_both_vocabularies_resolve_to_male() {
        let (record, _) = parse("Mój mąż jest mężczyzną, a ja kobietą, mam 30 lat");
        assert_eq!(record.sex, Sex::Male);
    }

    #[test]
    fn test_house_number_read_as_time() {
        // Pattern extraction has no notion of context; this is accepted behavior.
        let (record, _) = parse("Mieszkam pod 12,5 na Legnickiej");
        assert_eq!(record.five_k_time, Some(RaceTime::from_minutes_seconds(12, 5)));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Kobieta, 41 lat, 5 km w 27:45";
        let extractor = Extractor::new();
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_extraction_json() {
        let extraction = Extractor::new().extract("jestem kobietą");
        let json = serde_json::to_value(&extraction).unwrap();
        assert_eq!(json["record"]["sex"], "female");
        assert_eq!(json["missing"], serde_json::json!(["age", "five_k_time"]));
    }
}
