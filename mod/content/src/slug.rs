//! Slug derivation from primary-language titles.
//!
//! Slugs are computed exactly once, when an entity is first saved, and
//! never regenerated on later edits — editing a title must not break
//! inbound links.

/// Transliterate+normalize a title into a URL slug.
///
/// Cyrillic characters are transliterated to Latin, everything is
/// lowercased, and runs of non-alphanumeric characters collapse into
/// single dashes. The result carries no leading or trailing dash. The
/// same input always yields the same output.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        let mapped: Option<&str> = if ch.is_ascii_alphanumeric() {
            None // pushed directly below
        } else {
            transliterate(ch)
        };

        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else if let Some(tr) = mapped {
            // Hard/soft signs transliterate to nothing; they neither
            // emit a character nor break the current word.
            if tr.is_empty() {
                continue;
            }
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push_str(tr);
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Map one lowercase Cyrillic character to its Latin transliteration.
fn transliterate(ch: char) -> Option<&'static str> {
    let tr = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(tr)
}
