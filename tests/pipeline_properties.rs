//! Properties of the parsing pipeline as seen by its callers

use imagineui::scene::config::{Loader, LocalePreference, ParsingConfig};
use imagineui::scene::cst::elements::{Axis, ItemKind};
use imagineui::scene::formats::{FormatOptions, FormatRegistry};
use imagineui::scene::locales::{detect_locale, Locale};
use imagineui::scene::pipeline::{parse_scene_to_ast, ParseResult, SceneProcessor};
use imagineui::scene::testing::assert_scene;
use imagineui::scene::views::{flatten_direction, page_block_groups, DirectionDescription};
use rstest::rstest;
use std::io::Write;

#[rstest]
#[case("Page: Login\n", Some(Locale::EnUs))]
#[case("Экран: Вход\n", Some(Locale::RuRu))]
#[case("Tablet screen: Home\n", Some(Locale::EnUs))]
#[case("Block: Form\n", None)]
#[case("", None)]
fn test_locale_detection(#[case] text: &str, #[case] expected: Option<Locale>) {
    assert_eq!(detect_locale(text), expected);
    assert_eq!(detect_locale(text), detect_locale(text));
}

#[test]
fn test_screen_login_example() {
    let result = parse_scene_to_ast("Screen: Login\nBlock: Form\n    Button \"Submit\"\n");
    let scene = result.scene().expect("no errors");
    assert_scene(scene).page_count(1).page(0, |page| {
        page.title("Login").block_count(1).block(0, |block| {
            block.title("Form").item_count(1).item(0, |item| {
                item.kind(ItemKind::Button).text("Submit");
            });
        });
    });
}

#[test]
fn test_missing_page_anchor_is_a_lex_error() {
    let result = parse_scene_to_ast("Block: Form\n    Button\n");
    let ParseResult::LexErrors { errors } = &result else {
        panic!("expected lex errors, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("detect"), "{}", errors[0].message);
    assert_eq!((errors[0].line, errors[0].column), (1, 1));
}

#[test]
fn test_flatten_direction_default() {
    assert_eq!(
        flatten_direction(None),
        DirectionDescription {
            count: 1,
            axis: Axis::Column,
            cross_axis: Axis::Row,
        }
    );
}

#[test]
fn test_unknown_blockalign_name_is_ignored() {
    let result = parse_scene_to_ast(
        "Page: Home\nBlocks \"Ghost\", \"Menu\" aligned in two rows\nBlock: Menu\nBlock: Feed\n",
    );
    let scene = result.scene().expect("no errors");
    let groups = page_block_groups(&scene.pages[0]);
    assert_eq!(groups.len(), 1);
    let titles: Vec<Option<String>> = groups[0].blocks.iter().map(|block| block.title()).collect();
    assert_eq!(titles, vec![Some("Menu".to_string()), Some("Feed".to_string())]);
    assert_eq!(groups[0].direction.axis, Axis::Row);
}

#[test]
fn test_block_claimed_twice_stays_with_first_claim() {
    let result = parse_scene_to_ast(
        "Page: Home\nBlocks \"Menu\" aligned in two rows\nBlock: Feed\nBlocks \"Menu\", \"Feed\" aligned in three columns\nBlock: Menu\n",
    );
    let scene = result.scene().expect("no errors");
    let groups = page_block_groups(&scene.pages[0]);
    let titles: Vec<Vec<Option<String>>> = groups
        .iter()
        .map(|group| group.blocks.iter().map(|block| block.title()).collect())
        .collect();
    assert_eq!(
        titles,
        vec![
            vec![Some("Menu".to_string())],
            vec![Some("Feed".to_string())],
        ]
    );
}

#[test]
fn test_parse_errors_keep_tokens_for_highlighting() {
    let result = parse_scene_to_ast("Page: Home\nBlock: Grid\n    13 columns\n");
    assert!(!result.is_success());
    assert!(result.tokens().is_some_and(|tokens| !tokens.is_empty()));
    assert_eq!(result.diagnostics().len(), 1);
    assert!(result.diagnostics()[0].starts_with("3:5: "), "{:?}", result.diagnostics());
}

#[rstest]
#[case::too_large("13")]
#[case::negative("-1")]
#[case::fraction("2.5")]
#[case::exponent("1e1")]
fn test_count_must_be_a_whole_number_up_to_twelve(#[case] count: &str) {
    let result = parse_scene_to_ast(&format!("Page: Home\nBlock: Grid\n    {count} columns\n"));
    let diagnostics = result.diagnostics();
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert_eq!(
        diagnostics[0],
        format!("3:5: expected a whole number from 0 to 12, found NumberLiteral {count:?}")
    );
}

#[rstest]
#[case::with_icon("with an icon", "WithIcon")]
#[case::left("on the left", "Left")]
#[case::center("centered", "Center")]
fn test_unused_keywords_after_a_widget_are_named(#[case] words: &str, #[case] kind: &str) {
    let result = parse_scene_to_ast(&format!("Page: Home\nBlock: Form\nButton {words}\n"));
    let ParseResult::ParseErrors { errors, .. } = &result else {
        panic!("expected parse errors, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].found, kind);
    assert_eq!(
        result.diagnostics()[0],
        format!("3:8: expected the end of the item, found {kind} {words:?}")
    );
}

#[test]
fn test_processor_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[parsing]\nlocale = \"ru_RU\"\nensure_trailing_newline = true").unwrap();

    let config = Loader::new()
        .with_file(file.path())
        .build()
        .expect("config to load");
    assert_eq!(config.parsing.locale, LocalePreference::Fixed(Locale::RuRu));

    let processor = SceneProcessor::new(config.parsing);
    // no trailing newline, and a forced locale
    let result = processor.parse("Экран: Вход\nБлок: Форма\n    Кнопка");
    assert!(result.is_success(), "{:?}", result.diagnostics());
    assert_eq!(result.locale(), Some(Locale::RuRu));
}

#[test]
fn test_forced_locale_mismatch_fails_to_lex_or_parse() {
    let processor = SceneProcessor::new(ParsingConfig {
        locale: LocalePreference::Fixed(Locale::EnUs),
        ..ParsingConfig::default()
    });
    let result = processor.parse("Экран: Вход\n");
    assert!(!result.is_success());
}

#[test]
fn test_registry_outputs_for_a_failed_parse() {
    let registry = FormatRegistry::with_defaults();
    let options = FormatOptions::default();
    let result = parse_scene_to_ast("Page: Home\nBlock: Grid\n    13 columns\n");

    let json = registry.serialize(&result, "json", &options).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["status"], "parse_errors");
    assert_eq!(value["locale"], "en_US");
    assert_eq!(value["errors"][0]["found"], "NumberLiteral");

    assert!(registry.serialize(&result, "tokens", &options).is_ok());
    assert!(registry.serialize(&result, "treeviz", &options).is_err());
    assert!(registry.serialize(&result, "scene", &options).is_err());
    assert!(registry.serialize(&result, "html", &options).is_err());
}
