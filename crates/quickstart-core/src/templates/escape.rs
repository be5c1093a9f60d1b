//! Text escaping helpers for generated files

/// Characters with a special meaning in LaTeX and their replacements
const TEX_REPLACEMENTS: &[(char, &str)] = &[
    // TeX special characters
    ('$', r"\$"),
    ('%', r"\%"),
    ('&', r"\&"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('[', "{[}"),
    (']', "{]}"),
    ('`', "{}`"),
    ('\\', r"\textbackslash{}"),
    ('~', r"\textasciitilde{}"),
    ('<', r"\textless{}"),
    ('>', r"\textgreater{}"),
    ('^', r"\textasciicircum{}"),
    // Unicode characters with TeX commands
    ('¶', r"\P{}"),
    ('§', r"\S{}"),
    ('€', r"\texteuro{}"),
    ('∞', r"\(\infty\)"),
    ('±', r"\(\pm\)"),
    ('→', r"\(\rightarrow\)"),
    ('‣', r"\(\rightarrow\)"),
    // Lookalikes mapped to ASCII
    ('─', "-"),
    ('⎽', r"\_"),
    ('╲', r"\textbackslash{}"),
    ('|', r"\textbar{}"),
    ('│', r"\textbar{}"),
    ('ℯ', "e"),
    ('ⅈ', "i"),
    ('₁', "1"),
    ('₂', "2"),
];

/// Escape text for a LaTeX document preamble
pub fn tex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match TEX_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Escape backslashes and single quotes for a single-quoted Python literal
pub fn py_string_escape(text: &str) -> String {
    text.replace('\\', r"\\").replace('\'', r"\'")
}

/// Reduce a project name to characters safe in file names.
///
/// Keeps ASCII letters, digits, `_` and `-`; falls back to `sphinx` when
/// nothing is left.
pub fn make_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        "sphinx".to_string()
    } else {
        cleaned
    }
}
