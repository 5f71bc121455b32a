//! URL slug generation.
//!
//! Normalizes arbitrary text to a lowercase, hyphen-delimited token:
//! runs of non-alphanumeric code points collapse to a single `-`,
//! accented Latin letters fold to ASCII, anything unfoldable is
//! dropped, and an empty result becomes the literal token `n-a`.

/// Best-effort ASCII fold for a lowercase Latin letter.
///
/// Characters outside the table are not representable in a slug and get
/// dropped by the caller.
fn ascii_fold(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

/// Convert text into a lowercase, hyphen-delimited, URL-safe token.
pub fn slugify(text: &str) -> String {
    let mut out = String::new();
    let mut prev_was_dash = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if ch.is_ascii() {
                out.push(ch.to_ascii_lowercase());
                prev_was_dash = false;
                continue;
            }
            for lc in ch.to_lowercase() {
                if lc.is_ascii_alphanumeric() {
                    out.push(lc);
                    prev_was_dash = false;
                } else if let Some(folded) = ascii_fold(lc) {
                    out.push_str(folded);
                    prev_was_dash = false;
                }
                // unfoldable characters are dropped without a dash
            }
        } else if !out.is_empty() && !prev_was_dash {
            out.push('-');
            prev_was_dash = true;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        return "n-a".to_string();
    }

    out
}
