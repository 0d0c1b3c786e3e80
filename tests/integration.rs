// SPDX-License-Identifier: MPL-2.0
use iced_qr::config::{self, Config};
use iced_qr::i18n::fluent::I18n;
use iced_qr::qr::{self, export};
use iced_qr::validation::{self, UrlStatus};
use tempfile::tempdir;

#[test]
fn test_generate_and_save_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let url = "https://openai.com";

    // 1. Validate exactly what the input field would hold
    let UrlStatus::Valid(checked) = validation::check(url) else {
        panic!("URL should validate");
    };

    // 2. Generate and write the PNG with the proposed filename
    let image = qr::generate(checked.raw()).expect("Failed to generate QR code");
    let path = dir.path().join(export::default_filename(checked.host()));
    export::save_png(&image.pixels(), &path).expect("Failed to save PNG");
    assert!(path.ends_with("qr_code_openai.com.png"));

    // 3. An independent decoder must read back the exact input text
    let reloaded = image_rs::open(&path)
        .expect("Failed to reopen PNG")
        .to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(reloaded);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one QR symbol in the file");
    let (_meta, content) = grids[0].decode().expect("Failed to decode QR symbol");
    assert_eq!(content, url);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_saved_file_gets_png_extension_and_decodes() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let image = qr::generate("https://example.com/docs").expect("Failed to generate QR code");

    // A dialog result without extension still ends up as a valid .png file
    let path = export::ensure_png_extension(dir.path().join("my-code"));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

    export::save_png(&image.pixels(), &path).expect("Failed to save PNG");

    let reloaded = image_rs::open(&path).expect("Failed to reopen PNG");
    assert_eq!(reloaded.width(), image.width);
    assert_eq!(reloaded.height(), image.height);
}

#[test]
fn test_default_filename_follows_the_url_host() {
    let status = validation::check("https://www.openai.com/research");
    let checked = status.as_valid().expect("URL should validate");
    assert_eq!(
        export::default_filename(checked.host()),
        "qr_code_openai.com.png"
    );
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("button-generate"), "Generate QR Code");

    // 2. Change config to de
    let german_config = Config {
        language: Some("de".to_string()),
        ..Config::default()
    };
    config::save_to_path(&german_config, &temp_config_file_path)
        .expect("Failed to write german config file");

    // Load i18n with german config
    let loaded_german_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load german config from path");
    let i18n_de = I18n::new(None, &loaded_german_config);
    assert_eq!(i18n_de.current_locale().to_string(), "de");
    assert_eq!(i18n_de.tr("button-generate"), "QR-Code generieren");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}
