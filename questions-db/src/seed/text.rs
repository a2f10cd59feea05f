//! Placeholder names and lorem-ipsum text for fixtures.

use rand::Rng;
use rand::seq::SliceRandom;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amara", "Ben", "Bianca", "Carlos", "Chen", "Dana", "Dmitri",
    "Elena", "Emeka", "Farah", "Felix", "Grace", "Hana", "Hugo", "Ines", "Ivan", "Jamal",
    "Jun", "Kai", "Keiko", "Lars", "Leila", "Mateo", "Maya", "Nadia", "Noah", "Olga",
    "Omar", "Priya", "Quinn", "Rosa", "Sam", "Sofia", "Tariq", "Uma", "Victor", "Wen",
    "Xavier", "Yara", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Adeyemi", "Bauer", "Becker", "Castillo", "Chandra", "Dubois", "Eriksen",
    "Fischer", "Garcia", "Haddad", "Hoffman", "Ito", "Jensen", "Kim", "Kowalski", "Larsen",
    "Lopez", "Mbeki", "Moreau", "Nakamura", "Novak", "Okafor", "Olsen", "Patel", "Petrov",
    "Quinn", "Rossi", "Sato", "Schmidt", "Silva", "Tanaka", "Umar", "Vargas", "Weber",
    "Wong", "Yilmaz", "Zhang",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non",
    "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

/// A capitalized sentence of 4 to 9 words ending in a period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(4..=9);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, LOREM)).collect();
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

/// Three to six sentences.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(3..=6);
    (0..len)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
