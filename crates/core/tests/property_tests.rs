use proptest::prelude::*;
use text_stats_core::classifier::{count_regular, count_special, is_space};
use text_stats_core::{
    Counter, Delimiter, EngineConfigBuilder, LengthUnit, MarkupStripper, compute_statistics,
    count_segments,
};

fn counter(unit: LengthUnit) -> Counter {
    let config = EngineConfigBuilder::default().length_unit(unit).build().unwrap();
    Counter::new(config).unwrap()
}

proptest! {
    #[test]
    fn excluding_spaces_never_exceeds_characters(content in "\\PC{0,300}") {
        let report = compute_statistics(&content);
        prop_assert!(report.characters_excluding_spaces <= report.characters);
        let has_space = content.chars().any(is_space);
        prop_assert_eq!(report.characters_excluding_spaces == report.characters, !has_space);
    }

    #[test]
    fn every_excluding_variant_is_monotonic(content in "(<p>|</p>|<br>| |\\n|[a-z.!?,]){0,60}") {
        let report = compute_statistics(&content);
        prop_assert!(report.characters_excluding_markup <= report.characters);
        prop_assert!(report.characters_excluding_spaces_and_markup <= report.characters_excluding_spaces);
        prop_assert!(report.characters_excluding_spaces_and_markup <= report.characters_excluding_markup);
        prop_assert!(report.special_characters_excluding_spaces <= report.special_characters);
        prop_assert!(report.special_characters_excluding_markup <= report.special_characters);
        prop_assert!(report.special_characters <= report.characters);
        prop_assert!(report.special_characters_excluding_spaces <= report.characters_excluding_spaces);
        prop_assert!(report.special_characters_excluding_markup <= report.characters_excluding_markup);
        prop_assert!(
            report.special_characters_excluding_spaces_and_markup
                <= report.characters_excluding_spaces_and_markup
        );
    }

    #[test]
    fn zero_words_iff_blank(content in "[ \\na-z]{0,40}") {
        let words = count_segments(&content, Delimiter::Words);
        let blank = content.chars().all(|c| c == ' ' || c == '\n');
        prop_assert_eq!(words == 0, blank);
    }

    #[test]
    fn classifier_partitions_the_text(content in "\\PC{0,200}") {
        for unit in [LengthUnit::Utf16, LengthUnit::Chars] {
            let report = counter(unit).compute(&content);
            prop_assert_eq!(
                count_special(&content, unit) + count_regular(&content, unit),
                report.characters.value()
            );
        }
    }

    #[test]
    fn stripping_is_idempotent(content in "(<p>|</P>|<em>|</em>|[a-z ]){0,40}") {
        let stripper = MarkupStripper::new(&["p", "em"]).unwrap();
        let once = stripper.strip(&content).into_owned();
        let twice = stripper.strip(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn text_without_newline_is_at_most_one_paragraph(content in "[^\\n]{0,80}") {
        let report = compute_statistics(&content);
        prop_assert!(report.paragraphs.value() <= 1usize);
        let expected = usize::from(!content.is_empty() && content != " ");
        prop_assert_eq!(report.paragraphs.value(), expected);
    }
}
