use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use taskreport::rendering::{render_terminal, TerminalLayout};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// The golden digest covers decoded RGB pixels rather than PNG bytes, so it
/// does not depend on the encoder's compression settings.
#[test]
fn golden_terminal_matches_fixture() {
    let shot = render_terminal("Original: hello\nReversed: olleh").expect("render");
    assert_eq!((shot.width, shot.height), (280, 92));
    let pixels = shot.decode().expect("decode").to_rgb8().into_raw();
    let digest = hex::encode(Sha256::digest(&pixels));

    let expected_path = golden_path("reverse_output.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("unable to read golden {:?}: {}", expected_path, e));
    assert_eq!(digest, exp.trim());
}

#[test]
fn rendering_is_deterministic() {
    let a = render_terminal("Numbers: 12, 45, 7\nLargest: 45").unwrap();
    let b = render_terminal("Numbers: 12, 45, 7\nLargest: 45").unwrap();
    assert_eq!(a.png_data, b.png_data);
}

#[test]
fn reverse_example_has_two_text_lines() {
    let layout = TerminalLayout::measure("Original: hello\nReversed: olleh");
    assert_eq!(layout.lines.len(), 2);

    let shot = render_terminal("Original: hello\nReversed: olleh").unwrap();
    let img = image::load_from_memory(&shot.png_data).unwrap().to_rgb8();

    // count text rows that contain black pixels, grouped by line slot
    let mut slots_with_ink = std::collections::BTreeSet::new();
    for (_, y, p) in img.enumerate_pixels() {
        if p.0 == [0, 0, 0] {
            let top = TerminalLayout::text_top();
            assert!(y >= top);
            slots_with_ink.insert((y - top) / layout.line_height);
        }
    }
    assert_eq!(slots_with_ink.into_iter().collect::<Vec<_>>(), vec![0, 1]);
}
