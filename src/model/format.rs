//! Minecraft legacy formatting codes.
//!
//! Text such as `§6Gold §lPlayer` is split into [`TextRun`]s carrying the style that
//! applies to each span. The `§` dialect is what the game stores, the `&` dialect is
//! what operators type in chat templates. Both share the same code table and differ
//! only in their marker character.

/// Codes recognised in a formatted string and the marker that introduces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTable {
    pub marker: char,
    pub colors: &'static [Color],
    pub styles: &'static [Style],
    pub reset: char,
}

/// Codes prefixed with `§`, as stored by the game server.
pub const SECTION_CODES: CodeTable = CodeTable {
    marker: '§',
    colors: &COLORS,
    styles: &Style::ALL,
    reset: 'r',
};

/// Codes prefixed with `&`, as typed in message templates.
pub const AMPERSAND_CODES: CodeTable = CodeTable {
    marker: '&',
    ..SECTION_CODES
};

impl CodeTable {
    /// Looks up the code following a marker, ignoring case.
    pub fn lookup(&self, c: char) -> Option<FormatCode> {
        let c = c.to_ascii_lowercase();

        if c == self.reset {
            return Some(FormatCode::Reset);
        }
        if let Some(color) = self.colors.iter().find(|color| color.code == c) {
            return Some(FormatCode::Color(*color));
        }
        self.styles
            .iter()
            .find(|style| style.code() == c)
            .map(|style| FormatCode::Style(*style))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub code: char,
    pub name: &'static str,
    pub hex: &'static str,
}

pub const COLORS: [Color; 16] = [
    Color { code: '0', name: "Black", hex: "#000000" },
    Color { code: '1', name: "Dark Blue", hex: "#0000AA" },
    Color { code: '2', name: "Dark Green", hex: "#00AA00" },
    Color { code: '3', name: "Dark Aqua", hex: "#00AAAA" },
    Color { code: '4', name: "Dark Red", hex: "#AA0000" },
    Color { code: '5', name: "Dark Purple", hex: "#AA00AA" },
    Color { code: '6', name: "Gold", hex: "#FFAA00" },
    Color { code: '7', name: "Gray", hex: "#AAAAAA" },
    Color { code: '8', name: "Dark Gray", hex: "#555555" },
    Color { code: '9', name: "Blue", hex: "#5555FF" },
    Color { code: 'a', name: "Green", hex: "#55FF55" },
    Color { code: 'b', name: "Aqua", hex: "#55FFFF" },
    Color { code: 'c', name: "Red", hex: "#FF5555" },
    Color { code: 'd', name: "Light Purple", hex: "#FF55FF" },
    Color { code: 'e', name: "Yellow", hex: "#FFFF55" },
    Color { code: 'f', name: "White", hex: "#FFFFFF" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Obfuscated,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Bold,
        Style::Strikethrough,
        Style::Underline,
        Style::Italic,
        Style::Obfuscated,
    ];

    pub fn code(&self) -> char {
        match self {
            Style::Bold => 'l',
            Style::Strikethrough => 'm',
            Style::Underline => 'n',
            Style::Italic => 'o',
            Style::Obfuscated => 'k',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Bold => "Bold",
            Style::Strikethrough => "Strikethrough",
            Style::Underline => "Underline",
            Style::Italic => "Italic",
            Style::Obfuscated => "Obfuscated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCode {
    Color(Color),
    Style(Style),
    Reset,
}

/// Style active for a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub bold: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub italic: bool,
    pub obfuscated: bool,
}

impl TextStyle {
    fn apply(&mut self, code: FormatCode) {
        match code {
            FormatCode::Color(color) => self.color = Some(color),
            FormatCode::Style(Style::Bold) => self.bold = true,
            FormatCode::Style(Style::Strikethrough) => self.strikethrough = true,
            FormatCode::Style(Style::Underline) => self.underline = true,
            FormatCode::Style(Style::Italic) => self.italic = true,
            FormatCode::Style(Style::Obfuscated) => self.obfuscated = true,
            FormatCode::Reset => *self = TextStyle::default(),
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }

    /// Inline CSS declarations for this style.
    pub fn css(&self) -> String {
        let mut css = String::new();

        if let Some(color) = self.color {
            css.push_str(&format!("color: {};", color.hex));
        }
        if self.bold {
            css.push_str("font-weight: bold;");
        }
        if self.italic {
            css.push_str("font-style: italic;");
        }

        let decorations: Vec<&str> = [
            (self.underline, "underline"),
            (self.strikethrough, "line-through"),
        ]
        .into_iter()
        .filter_map(|(enabled, value)| enabled.then_some(value))
        .collect();
        if !decorations.is_empty() {
            css.push_str(&format!("text-decoration: {};", decorations.join(" ")));
        }

        css
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

/// Splits `text` into styled runs.
///
/// A marker followed by a character outside the code table, or by nothing, is kept
/// as literal text.
pub fn parse(text: &str, table: &CodeTable) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut style = TextStyle::default();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == table.marker {
            if let Some(code) = chars.peek().copied().and_then(|c| table.lookup(c)) {
                chars.next();
                if !current.is_empty() {
                    runs.push(TextRun {
                        text: std::mem::take(&mut current),
                        style,
                    });
                }
                style.apply(code);
                continue;
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        runs.push(TextRun {
            text: current,
            style,
        });
    }

    runs
}

/// Removes every recognised code, leaving the plain text.
pub fn strip(text: &str, table: &CodeTable) -> String {
    parse(text, table).into_iter().map(|run| run.text).collect()
}

/// Renders `text` as HTML `<span>` elements with inline styles.
pub fn render_html(text: &str, table: &CodeTable) -> String {
    parse(text, table)
        .into_iter()
        .map(|run| {
            let escaped = escape_html(&run.text).replace('\n', "<br>");
            if run.style.is_plain() {
                escaped
            } else if run.style.obfuscated {
                format!(
                    "<span class=\"mc-obfuscated\" style=\"{}\">{}</span>",
                    run.style.css(),
                    escaped
                )
            } else {
                format!("<span style=\"{}\">{}</span>", run.style.css(), escaped)
            }
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(code: char) -> Option<Color> {
        COLORS.iter().find(|c| c.code == code).copied()
    }

    #[test]
    fn color_code_colors_following_text() {
        let runs = parse("§4Admin", &SECTION_CODES);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Admin");
        assert_eq!(runs[0].style.color.map(|c| c.hex), Some("#AA0000"));
    }

    #[test]
    fn style_then_color_combine() {
        let runs = parse("§l§4X", &SECTION_CODES);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "X");
        assert!(runs[0].style.bold);
        assert_eq!(runs[0].style.color, color('4'));
    }

    #[test]
    fn reset_clears_active_style() {
        let runs = parse("§l§cHi§rX", &SECTION_CODES);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].text, "X");
        assert!(runs[1].style.is_plain());
    }

    #[test]
    fn text_between_codes_splits_runs() {
        let runs = parse("&6Gold &bAqua", &AMPERSAND_CODES);

        let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Gold ", "Aqua"]);
        assert_eq!(runs[1].style.color, color('b'));
    }

    #[test]
    fn unknown_code_and_trailing_marker_stay_literal() {
        let runs = parse("50&z off &", &AMPERSAND_CODES);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "50&z off &");
    }

    #[test]
    fn codes_are_case_insensitive() {
        let runs = parse("§AGreen", &SECTION_CODES);

        assert_eq!(runs[0].style.color, color('a'));
    }

    #[test]
    fn other_dialect_marker_is_literal() {
        assert_eq!(strip("&cRed §cRed", &SECTION_CODES), "&cRed Red");
        assert_eq!(strip("&cRed §cRed", &AMPERSAND_CODES), "Red §cRed");
    }

    #[test]
    fn renders_escaped_html() {
        let html = render_html("<b>§4A\nB", &SECTION_CODES);

        assert_eq!(
            html,
            "&lt;b&gt;<span style=\"color: #AA0000;\">A<br>B</span>"
        );
    }

    #[test]
    fn only_codes_in_the_table_are_recognised() {
        static REDS: [Color; 2] = [COLORS[4], COLORS[12]];
        let colors_only = CodeTable {
            marker: '$',
            colors: &REDS,
            styles: &[],
            reset: 'r',
        };

        let runs = parse("$4Red$lBold$aX", &colors_only);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Red$lBold$aX");
        assert_eq!(runs[0].style.color, color('4'));
        assert!(!runs[0].style.bold);
    }

    #[test]
    fn css_combines_decorations() {
        let style = TextStyle {
            underline: true,
            strikethrough: true,
            ..Default::default()
        };

        assert_eq!(style.css(), "text-decoration: underline line-through;");
    }
}
