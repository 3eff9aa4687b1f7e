use std::path::Path;

use sample_shifter_core::{
    CategoryConfig, CategoryDefinition, Classifier, DiscoveredFile, UNCATEGORIZED,
};

fn sample(file_name: &str) -> DiscoveredFile {
    DiscoveredFile::from_path(&Path::new("/test/path").join(file_name)).unwrap()
}

fn classify_default(file_name: &str) -> (String, String) {
    let result = Classifier::default().classify(&sample(file_name), Path::new("/tmp/test-target"), false);
    (result.category, result.subcategory)
}

#[test]
fn test_default_categories() {
    let cases = [
        ("kick_01.wav", "drums"),
        ("snare_heavy.wav", "drums"),
        ("hihat_closed.wav", "drums"),
        ("clap_01.wav", "drums"),
        ("bass_sub.wav", "bass"),
        ("808_bass.wav", "bass"),
        ("synth_lead.wav", "synth"),
        ("synth_pad.mp3", "synth"),
        // "shot" belongs to the higher ranked oneshots category
        ("vocal_shot.wav", "oneshots"),
        ("vocal_sample.wav", "vocals"),
        ("fx_riser.wav", "fx"),
        ("shaker_loop.wav", "percussion"),
        ("piano_chord.wav", "melodic"),
        ("guitar_strum.wav", "melodic"),
        ("bell_ring.flac", "melodic"),
        ("beat_loop.wav", "loops"),
        ("loop_128bpm.wav", "loops"),
        ("oneshot_stab.wav", "oneshots"),
        ("random_sound.wav", "uncategorized"),
    ];

    for (file_name, expected) in cases {
        let (category, _) = classify_default(file_name);
        assert_eq!(category, expected, "category of {file_name}");
    }
}

#[test]
fn test_default_subcategories() {
    let cases = [
        ("kick_01.wav", "kick"),
        ("hihat_closed.wav", "hihat"),
        ("bass_sub.wav", "sub"),
        ("808_bass.wav", "808"),
        ("synth_lead.wav", "lead"),
        ("vocal_shot.wav", "vocal"),
        ("shaker_loop.wav", "shaker"),
        ("oneshot_stab.wav", "general"),
    ];

    for (file_name, expected) in cases {
        let (_, subcategory) = classify_default(file_name);
        assert_eq!(subcategory, expected, "subcategory of {file_name}");
    }
}

#[test]
fn test_case_insensitive_matching() {
    assert_eq!(classify_default("KICK_01.wav").0, "drums");
    assert_eq!(classify_default("Snare_Heavy.wav").0, "drums");
    assert_eq!(classify_default("BASS_SUB.wav").0, "bass");
    assert_eq!(classify_default("Synth_Lead.wav").0, "synth");
}

#[test]
fn test_unmatched_files_are_uncategorized_without_subcategory() {
    for file_name in ["random_sound.wav", "zzz_000.wav", "qqq.flac"] {
        let (category, subcategory) = classify_default(file_name);
        assert_eq!(category, UNCATEGORIZED);
        assert_eq!(subcategory, "");
    }

    let result = Classifier::default().classify(&sample("zzz_000.wav"), Path::new("/out"), false);
    assert_eq!(result.target_path, "/out/uncategorized/zzz_000.wav");
}

#[test]
fn test_kick_heavy_scenario() {
    let result = Classifier::default().classify(&sample("Kick_Heavy_01.wav"), Path::new("/out"), false);
    assert_eq!(result.category, "drums");
    assert_eq!(result.subcategory, "kick");
    assert_eq!(result.target_path, "/out/drums/kick/Kick_Heavy_01.wav");
    assert_eq!(result.sample.original_path, "/test/path/Kick_Heavy_01.wav");
}

#[test]
fn test_ambient_pad_loop_follows_rank_order() {
    let classifier = Classifier::default();
    let order = classifier.priority_order();
    let rank = |name: &str| order.iter().position(|c| *c == name).unwrap();

    assert_eq!(
        order,
        vec![
            "oneshots", "drums", "bass", "percussion", "vocals", "synth", "melodic", "fx",
            "transition", "ambiance", "foley", "loops",
        ]
    );
    assert!(rank("synth") < rank("ambiance"));
    assert!(rank("ambiance") < rank("loops"));

    let (category, subcategory) = classify_default("ambient_pad_loop.wav");
    assert_eq!(category, "synth");
    assert_eq!(subcategory, "pad");
}

#[test]
fn test_category_priority_independent_of_keyword_order() {
    assert_eq!(classify_default("kick_bass.wav").0, "drums");
    assert_eq!(classify_default("bass_kick.wav").0, "drums");
}

#[test]
fn test_custom_priorities_change_the_winner() {
    let config = CategoryConfig {
        categories: vec![
            CategoryDefinition::new("drums", 5, &["kick"]),
            CategoryDefinition::new("bass", 1, &["bass"]),
        ],
    };
    let classifier = Classifier::new(&config);
    let result = classifier.classify(&sample("kick_bass.wav"), Path::new("/out"), false);
    assert_eq!(result.category, "bass");
    assert_eq!(result.target_path, "/out/bass/kick_bass.wav");
}

#[test]
fn test_longest_subcategory_keyword_wins() {
    let (category, subcategory) = classify_default("Drum_Loop_Kick_120.wav");
    assert_eq!(category, "drums");
    assert_eq!(subcategory, "loop");
}

#[test]
fn test_equal_length_subcategory_keywords_resolve_lexically() {
    // "beat" and "loop" are both four bytes long.
    assert_eq!(classify_default("beat_loop.wav"), ("loops".to_string(), "beat".to_string()));
}

#[test]
fn test_keywords_match_inside_larger_tokens() {
    assert_eq!(
        classify_default("grime_texture.wav"),
        ("drums".to_string(), "rimshot".to_string())
    );
}

#[test]
fn test_matched_category_without_subcategory_match() {
    let (category, subcategory) = classify_default("drum_groove.wav");
    assert_eq!(category, "drums");
    assert_eq!(subcategory, UNCATEGORIZED);
}

#[test]
fn test_normalized_target_name() {
    let result = Classifier::default().classify(&sample("My Kick_01.WAV"), Path::new("/out"), true);
    assert_eq!(result.target_path, "/out/drums/kick/my-kick-01.WAV");
    assert_eq!(result.sample.file_name, "My Kick_01.WAV");
    assert_eq!(result.sample.original_path, "/test/path/My Kick_01.WAV");
}

#[test]
fn test_trailing_separator_on_target_root() {
    let result = Classifier::default().classify(&sample("kick_01.wav"), Path::new("/out/"), false);
    assert_eq!(result.target_path, "/out/drums/kick/kick_01.wav");
}

#[test]
fn test_classification_is_repeatable() {
    let classifier = Classifier::default();
    for file_name in ["ambient_pad_loop.wav", "Kick_Heavy_01.wav", "zzz_000.wav"] {
        let first = classifier.classify(&sample(file_name), Path::new("/out"), true);
        let second = classifier.classify(&sample(file_name), Path::new("/out"), true);
        assert_eq!(first, second);
    }
}

#[test]
fn test_batch_preserves_order() {
    let samples = vec![sample("kick.wav"), sample("bass.wav"), sample("synth.wav"), sample("kick.wav")];
    let classified = Classifier::default().classify_batch(&samples, Path::new("/tmp/test-target"), false);

    assert_eq!(classified.len(), samples.len());
    for (result, input) in classified.iter().zip(&samples) {
        assert_eq!(&result.sample, input);
    }
    assert_eq!(classified[0], classified[3]);
}

#[test]
fn test_empty_batch() {
    let classified = Classifier::default().classify_batch(&[], Path::new("/out"), false);
    assert!(classified.is_empty());
}
