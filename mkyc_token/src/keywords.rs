use phf::phf_map;

use crate::TokenKind;

pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "fn" => TokenKind::Function,
    "let" => TokenKind::Let,
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "return" => TokenKind::Return,
};

pub fn check_keyword(arg: &str) -> Option<TokenKind> {
    KEYWORDS.get(arg).copied()
}

/// Resolves a complete identifier run to its reserved kind, or `Ident`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    check_keyword(ident).unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{check_keyword, lookup_ident, KEYWORDS};
    use crate::TokenKind;

    #[test]
    fn reserved_words() {
        let expected = [
            ("fn", TokenKind::Function),
            ("let", TokenKind::Let),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
        ];
        assert_eq!(KEYWORDS.len(), expected.len());
        for (spelling, kind) in expected {
            assert_eq!(lookup_ident(spelling), kind, "{spelling}");
        }
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
        assert_eq!(lookup_ident("RETURN"), TokenKind::Ident);
        assert_eq!(check_keyword("Fn"), None);
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(lookup_ident("lets"), TokenKind::Ident);
        assert_eq!(lookup_ident("if?"), TokenKind::Ident);
        assert_eq!(lookup_ident("fn_"), TokenKind::Ident);
    }

    proptest! {
        #[test]
        fn non_reserved_letter_runs_are_identifiers(ident in "[a-zA-Z_?!]{1,12}") {
            prop_assume!(!KEYWORDS.contains_key(ident.as_str()));
            prop_assert_eq!(lookup_ident(&ident), TokenKind::Ident);
        }
    }
}
