// Dskey Double-Struck Mapping Tests
//
// Verifies the mapping table against the Unicode code chart and the
// properties every caller relies on: character count, determinism,
// rule precedence and idempotence on the output.
//
// Run with: cargo test --test double_struck_test

use dskey_core::transform::{classify, is_mappable, map, map_char, map_graphemes, CharClass};

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

// Reference rendering taken from the Unicode Mathematical Alphanumeric
// Symbols and Letterlike Symbols charts.
const UPPER_DS: &str = "𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ";
const LOWER_DS: &str = "𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫";
const DIGITS_DS: &str = "𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡";

fn samples() -> Vec<String> {
    let mut all_ascii: String = (0u8..128).map(char::from).collect();
    all_ascii.push_str("ÀéßЖ日本語🎹\u{301}𝔸ℤ");
    vec![
        String::new(),
        "Hello World 123".to_string(),
        "The quick brown fox jumps over the lazy dog 0123456789".to_string(),
        "  tabs\tand\nnewlines\r\n".to_string(),
        "!@#$%^&*()_+-=[]{}|;':\",./<>?`~".to_string(),
        "mixed ℂℍℕ already 𝕕𝕠𝕟𝕖".to_string(),
        all_ascii,
    ]
}

#[test]
fn test_full_uppercase_table() {
    assert_eq!(map(UPPER), UPPER_DS);
}

#[test]
fn test_full_lowercase_table() {
    assert_eq!(map(LOWER), LOWER_DS);
}

#[test]
fn test_full_digit_table() {
    assert_eq!(map(DIGITS), DIGITS_DS);
}

#[test]
fn test_hello_world() {
    assert_eq!(map("Hello World 123"), "ℍ𝕖𝕝𝕝𝕠 𝕎𝕠𝕣𝕝𝕕 𝟙𝟚𝟛");
    assert_eq!(map_char('e') as u32, 0x1D556);
    assert_eq!(map_char('l') as u32, 0x1D55D);
}

#[test]
fn test_empty_input() {
    assert_eq!(map(""), "");
    assert_eq!(map_graphemes(""), "");
}

#[test]
fn test_exception_letters() {
    let expected = [
        ('C', 0x2102),
        ('H', 0x210D),
        ('N', 0x2115),
        ('P', 0x2119),
        ('Q', 0x211A),
        ('R', 0x211D),
        ('Z', 0x2124),
    ];
    for (letter, codepoint) in expected {
        let out = map_char(letter) as u32;
        assert_eq!(out, codepoint, "{}", letter);
        assert_ne!(out, 0x1D538 + (letter as u32 - 'A' as u32), "{}", letter);
    }
}

#[test]
fn test_rule_precedence_for_a_and_z() {
    assert_eq!(map("A"), "\u{1D538}");
    assert_ne!(map("Z"), "\u{1D551}");
    assert_eq!(map("Z"), "\u{2124}");
}

#[test]
fn test_lowercase_has_no_exceptions() {
    assert_eq!(map("c"), "\u{1D554}");
    assert_ne!(map("c"), "ℂ");
    for ch in "chnpqrz".chars() {
        assert_eq!(map_char(ch) as u32, 0x1D552 + (ch as u32 - 'a' as u32));
    }
}

#[test]
fn test_linear_slots_are_assigned_codepoints() {
    // Non-exception capitals land on assigned characters; the exception
    // slots in the math block are the reserved holes.
    for ch in UPPER.chars() {
        let linear = 0x1D538 + (ch as u32 - 'A' as u32);
        match classify(ch) {
            CharClass::Upper => assert_eq!(map_char(ch) as u32, linear),
            CharClass::Exception(legacy) => assert!((legacy as u32) < 0x2200),
            other => panic!("unexpected class {:?} for {}", other, ch),
        }
    }
}

#[test]
fn test_pass_through() {
    assert_eq!(map("!@#.,"), "!@#.,");
    assert_eq!(map(" \t\n"), " \t\n");
    assert_eq!(map("ÀéßЖ日本語🎹"), "ÀéßЖ日本語🎹");
}

#[test]
fn test_only_ascii_alphanumerics_are_mappable() {
    for b in 0u8..128 {
        let ch = char::from(b);
        assert_eq!(is_mappable(ch), ch.is_ascii_alphanumeric(), "{:?}", ch);
        assert_eq!(map_char(ch) != ch, ch.is_ascii_alphanumeric(), "{:?}", ch);
    }
}

#[test]
fn test_character_count_preserved() {
    for s in samples() {
        assert_eq!(map(&s).chars().count(), s.chars().count(), "{:?}", s);
    }
}

#[test]
fn test_deterministic() {
    for s in samples() {
        assert_eq!(map(&s), map(&s));
    }
}

#[test]
fn test_idempotent_on_output() {
    for s in samples() {
        let once = map(&s);
        assert_eq!(map(&once), once, "{:?}", s);
    }
}

#[test]
fn test_per_char_equivalence() {
    for s in samples() {
        let by_char: String = s.chars().map(|c| map(&c.to_string())).collect();
        assert_eq!(map(&s), by_char);
    }
}

#[test]
fn test_graphemes_agree_on_plain_text() {
    for s in ["Hello World 123", "abc XYZ 789", "!@#.,"] {
        assert_eq!(map_graphemes(s), map(s));
    }
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || map(&format!("Thread {}", i))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = format!("𝕋𝕙𝕣𝕖𝕒𝕕 {}", map(&i.to_string()));
        assert_eq!(handle.join().unwrap(), expected);
    }
}
