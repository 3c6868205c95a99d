// src/core/sanitize.rs

/// Lower-case and strip Latin diacritics (`Á` → `a`, `ñ` → `n`).
/// Used as the primary key when ordering names the way a Spanish reader expects.
pub fn fold_diacritics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let base = match ch {
            'á' | 'à' | 'ä' | 'â' | 'ã' | 'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' | 'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
            'ñ' | 'Ñ' => 'n',
            'ç' | 'Ç' => 'c',
            c => {
                out.extend(c.to_lowercase());
                continue;
            }
        };
        out.push(base);
    }
    out
}

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File-name friendly stem: ASCII alphanumerics, `-` and `_` only.
/// Falls back to `fallback` when nothing survives.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let folded = fold_diacritics(&normalize_ws(name));
    let mut out = String::with_capacity(folded.len());
    let mut last_us = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if (ch.is_whitespace() || ch == '_') && !last_us { out.push('_'); last_us = true; }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
