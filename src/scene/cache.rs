//! Process-wide cache of compiled locales
//!
//! Compiling a locale means building the regexes of all its keyword and numeral forms, which
//! is by far the most expensive step of a parse. It happens once per locale per process; the
//! result is immutable and shared by every parse afterwards, from any thread.

use crate::scene::lexing::lexer::SceneLexer;
use crate::scene::lexing::token_set::build_tokens_for_locale;
use crate::scene::locales::Locale;
use crate::scene::parsing::parser::SceneGrammar;
use log::debug;
use once_cell::sync::{Lazy, OnceCell};
use std::collections::HashMap;
use std::sync::Arc;

/// Lexer and grammar for one locale
#[derive(Debug)]
pub struct CompiledLocale {
    pub locale: Locale,
    pub lexer: SceneLexer,
    pub grammar: SceneGrammar,
}

impl CompiledLocale {
    fn compile(locale: Locale) -> Self {
        // The dictionaries are constants, a pattern that fails to compile is a bug in them.
        let token_set = build_tokens_for_locale(locale).unwrap_or_else(|error| {
            panic!("keyword dictionary of {locale} does not compile: {error}")
        });
        debug!(
            "compiled locale {} ({} keyword and {} numeral tokens)",
            locale,
            token_set.keywords.len(),
            token_set.numerals.len()
        );
        Self {
            locale,
            lexer: SceneLexer::new(token_set),
            grammar: SceneGrammar::new(locale),
        }
    }
}

static CACHE: Lazy<HashMap<Locale, OnceCell<Arc<CompiledLocale>>>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale, OnceCell::new()))
        .collect()
});

fn slot(locale: Locale) -> &'static OnceCell<Arc<CompiledLocale>> {
    // every locale gets a slot when the cache is created
    &CACHE[&locale]
}

/// The compiled lexer and grammar of `locale`, compiling them on first use.
pub fn compiled(locale: Locale) -> Arc<CompiledLocale> {
    Arc::clone(slot(locale).get_or_init(|| Arc::new(CompiledLocale::compile(locale))))
}

/// Whether `locale` was compiled already
pub fn is_compiled(locale: Locale) -> bool {
    slot(locale).get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_compiles_once_per_locale() {
        let first = compiled(Locale::EnUs);
        let second = compiled(Locale::EnUs);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(is_compiled(Locale::EnUs));
        assert_eq!(first.lexer.locale(), Locale::EnUs);
        assert_eq!(first.grammar.locale(), Locale::EnUs);
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| compiled(Locale::RuRu)))
            .collect();
        let compiled: Vec<Arc<CompiledLocale>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(compiled.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
